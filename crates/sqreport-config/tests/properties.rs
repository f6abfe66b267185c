//! Property tests for CLI-over-file precedence.

use std::path::PathBuf;

use proptest::prelude::*;
use sqreport_config::{RenderArgs, RenderPlan, ReportConfig};

fn arb_path() -> impl Strategy<Value = Option<PathBuf>> {
    prop::option::of("[a-z]{1,8}\\.(json|xml|html)".prop_map(PathBuf::from))
}

proptest! {
    #[test]
    fn cli_value_wins_whenever_present(
        cli_html in arb_path(),
        file_html in arb_path(),
        cli_measures in arb_path(),
        file_measures in arb_path(),
    ) {
        let mut config = ReportConfig::default();
        config.inputs.quality_gate = Some(PathBuf::from("gate.json"));
        config.inputs.measures = file_measures.clone();
        config.outputs.html = file_html.clone();
        let args = RenderArgs {
            measures: cli_measures.clone(),
            html: cli_html.clone(),
            ..RenderArgs::default()
        };

        match RenderPlan::resolve(&args, &config) {
            Ok(plan) => {
                let expected = cli_measures.or(file_measures);
                prop_assert_eq!(Some(plan.inputs.measures), expected);
                if let Some(html) = cli_html.or(file_html) {
                    prop_assert_eq!(plan.outputs.html, Some(html));
                }
            }
            Err(_) => prop_assert!(cli_measures.is_none() && file_measures.is_none()),
        }
    }

    #[test]
    fn checkstyle_is_only_planned_with_issues(has_issues in any::<bool>(), out_dir in any::<bool>()) {
        let args = RenderArgs {
            quality_gate: Some("g.json".into()),
            measures: Some("m.json".into()),
            issues: has_issues.then(|| "i.json".into()),
            out_dir: out_dir.then(|| "out".into()),
            ..RenderArgs::default()
        };
        let plan = RenderPlan::resolve(&args, &ReportConfig::default()).expect("resolve");
        prop_assert_eq!(plan.outputs.checkstyle.is_some(), has_issues);
        prop_assert!(plan.outputs.html.is_some() && plan.outputs.cobertura.is_some());
    }
}
