//! Property tests for the HTML dashboard.

use std::collections::BTreeMap;

use proptest::prelude::*;
use sqreport_html::{HtmlOptions, format_percent, render};
use sqreport_model::MetricsModel;
use sqreport_types::{Condition, GateStatus, QualityGateSummary};

fn bar_widths(html: &str, class: &str) -> Vec<f64> {
    let needle = format!(r#"class="{class}" style="width: "#);
    html.match_indices(&needle)
        .filter_map(|(i, _)| {
            let rest = &html[i + needle.len()..];
            rest[..rest.find('%')?].parse().ok()
        })
        .collect()
}

proptest! {
    #[test]
    fn bars_always_sum_to_about_one_hundred(
        coverage in -50.0f64..200.0,
        line in -50.0f64..200.0,
        branch in -50.0f64..200.0,
    ) {
        let numeric: BTreeMap<String, f64> = [
            ("coverage", coverage),
            ("line_coverage", line),
            ("branch_coverage", branch),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
        let html = render(
            &MetricsModel::from_numeric(numeric),
            &QualityGateSummary::default(),
            &HtmlOptions::default(),
        );

        let green = bar_widths(&html, "bar-covered");
        let red = bar_widths(&html, "bar-uncovered");
        prop_assert_eq!(green.len(), 3);
        prop_assert_eq!(red.len(), 3);
        for (g, r) in green.iter().zip(&red) {
            prop_assert!((0.0..=100.0).contains(g));
            prop_assert!((0.0..=100.0).contains(r));
            prop_assert!((g + r - 100.0).abs() <= 0.11);
        }
    }

    #[test]
    fn condition_text_never_injects_markup(key in ".*", actual in ".*") {
        let gate = QualityGateSummary {
            status: GateStatus::Error,
            conditions: vec![Condition {
                metric_key: key,
                actual_value: actual,
                ..Condition::default()
            }],
        };
        let html = render(&MetricsModel::default(), &gate, &HtmlOptions::default());
        let baseline = render(
            &MetricsModel::default(),
            &QualityGateSummary {
                status: GateStatus::Error,
                conditions: vec![Condition::default()],
            },
            &HtmlOptions::default(),
        );
        prop_assert_eq!(html.matches('<').count(), baseline.matches('<').count());
    }

    #[test]
    fn format_percent_never_shows_trailing_zero_decimal(p in 0.0f64..=100.0) {
        let text = format_percent(p);
        prop_assert!(text.ends_with('%'));
        prop_assert!(!text.ends_with(".0%"));
    }
}
