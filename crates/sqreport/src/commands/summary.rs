//! Handler for the `sqreport summary` command.

use anyhow::Result;
use serde_json::json;
use sqreport_config::{SummaryArgs, SummaryFormat};
use sqreport_gate::summarize_quality_gate;
use sqreport_html::format_percent;
use sqreport_model::{MetricsModel, raw_measures_from_json};
use sqreport_types::{InputKind, QualityGateSummary};

use crate::io::read_document;

/// Handle the summary command.
pub(crate) fn handle(args: SummaryArgs) -> Result<()> {
    let gate = summarize_quality_gate(&read_document(InputKind::QualityGate, &args.quality_gate)?);
    let model = match &args.measures {
        Some(path) => {
            let doc = read_document(InputKind::Measures, path)?;
            Some(MetricsModel::from_measures(&raw_measures_from_json(&doc)))
        }
        None => None,
    };

    match args.format {
        SummaryFormat::Text => print!("{}", text_summary(&gate, model.as_ref())),
        SummaryFormat::Json => println!("{}", json_summary(&gate, model.as_ref())?),
    }
    Ok(())
}

fn text_summary(gate: &QualityGateSummary, model: Option<&MetricsModel>) -> String {
    let mut out = format!("Quality gate: {}\n", gate.status);
    for c in &gate.conditions {
        out.push_str(&format!(
            "  [{}] {}: {} ({} {})\n",
            c.status, c.metric_key, c.actual_value, c.comparator, c.error_threshold
        ));
    }

    if let Some(model) = model {
        out.push_str(&format!("Coverage: {}\n", format_percent(model.coverage_percent())));
        out.push_str(&format!(
            "Line coverage: {} ({}/{} lines)\n",
            format_percent(model.line_coverage_percent()),
            model.covered_lines(),
            model.lines_to_cover()
        ));
        out.push_str(&format!(
            "Branch coverage: {} ({}/{} conditions)\n",
            format_percent(model.branch_coverage_percent()),
            model.branches_covered(),
            model.conditions_to_cover()
        ));
    }
    out
}

fn json_summary(gate: &QualityGateSummary, model: Option<&MetricsModel>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&json!({
        "passed": gate.passed(),
        "quality_gate": gate,
        "metrics": model,
    }))?)
}
