//! Quality-gate summary extraction.

use serde_json::Value;
use sqreport_types::{Condition, GateStatus, NOT_AVAILABLE, QualityGateSummary};
use tracing::{debug, trace, warn};

use crate::pointer::{CONDITIONS, STATUS, resolve_pointer, scalar_text};

/// Build a [`QualityGateSummary`] from a raw quality-gate document.
///
/// Never fails: a missing or malformed status is `UNKNOWN`, missing
/// conditions are an empty list, and absent condition fields are `N/A`.
pub fn summarize_quality_gate(doc: &Value) -> QualityGateSummary {
    let status = match resolve_pointer(doc, STATUS).and_then(Value::as_str) {
        Some(raw) => GateStatus::parse(raw),
        None => {
            warn!("quality gate has no projectStatus.status; reporting UNKNOWN");
            GateStatus::Unknown
        }
    };

    let conditions: Vec<Condition> = resolve_pointer(doc, CONDITIONS)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(extract_condition).collect())
        .unwrap_or_default();

    debug!(%status, conditions = conditions.len(), "summarized quality gate");
    QualityGateSummary { status, conditions }
}

fn extract_condition(raw: &Value) -> Option<Condition> {
    if !raw.is_object() {
        trace!("skipping non-object quality gate condition");
        return None;
    }
    let field = |key: &str| scalar_text(raw.get(key)).unwrap_or_else(|| NOT_AVAILABLE.to_string());

    Some(Condition {
        metric_key: field("metricKey"),
        actual_value: field("actualValue"),
        status: field("status"),
        comparator: field("comparator"),
        error_threshold: field("errorThreshold"),
    })
}
