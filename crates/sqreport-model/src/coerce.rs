//! Single coercion pass from raw measures to typed buckets.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use sqreport_types::RawMeasure;
use tracing::{debug, trace, warn};

/// Raw measures split into numeric and textual buckets.
///
/// A metric name appears in at most one bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CoercedMeasures {
    pub numeric: BTreeMap<String, f64>,
    pub textual: BTreeMap<String, String>,
}

/// Typed form of a single measure value.
#[derive(Debug, Clone, PartialEq)]
pub enum MeasureValue {
    Number(f64),
    Text(String),
}

/// Coerce an ordered sequence of raw measures.
///
/// Later duplicates replace earlier ones, whichever bucket either landed in.
pub fn coerce_measures(raw: &[RawMeasure]) -> CoercedMeasures {
    let mut out = CoercedMeasures::default();

    for measure in raw {
        match coerce_value(measure.value.as_ref()) {
            MeasureValue::Number(n) => {
                out.textual.remove(&measure.metric);
                out.numeric.insert(measure.metric.clone(), n);
            }
            MeasureValue::Text(s) => {
                out.numeric.remove(&measure.metric);
                out.textual.insert(measure.metric.clone(), s);
            }
        }
    }

    debug!(
        numeric = out.numeric.len(),
        textual = out.textual.len(),
        "coerced measures"
    );
    out
}

/// Classify one untyped value.
pub fn coerce_value(value: Option<&Value>) -> MeasureValue {
    match value {
        None | Some(Value::Null) => MeasureValue::Text(String::new()),
        Some(Value::String(s)) => match parse_number(s) {
            Some(n) => MeasureValue::Number(n),
            None => MeasureValue::Text(s.clone()),
        },
        Some(Value::Number(n)) => match n.as_f64().filter(|f| f.is_finite()) {
            Some(f) => MeasureValue::Number(f),
            None => MeasureValue::Text(n.to_string()),
        },
        Some(other) => MeasureValue::Text(other.to_string()),
    }
}

/// Parse a finite number, tolerating surrounding whitespace.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Pull `component.measures` out of a measures document.
///
/// Entries that are not objects or lack a string `metric` are skipped.
pub fn raw_measures_from_json(doc: &Value) -> Vec<RawMeasure> {
    let Some(entries) = doc
        .get("component")
        .and_then(|c| c.get("measures"))
        .and_then(Value::as_array)
    else {
        warn!("measures document has no component.measures array; using empty set");
        return Vec::new();
    };

    let mut measures = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        let Some(metric) = entry.get("metric").and_then(Value::as_str) else {
            trace!(index = idx, "skipping measure without metric name");
            continue;
        };
        measures.push(RawMeasure {
            metric: metric.to_string(),
            value: entry.get("value").filter(|v| !v.is_null()).cloned(),
        });
    }
    measures
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_strings_go_to_numeric_bucket() {
        let out = coerce_measures(&[
            RawMeasure::new("coverage", "81.3"),
            RawMeasure::new("ncloc", "1200"),
        ]);
        assert_eq!(out.numeric.get("coverage"), Some(&81.3));
        assert_eq!(out.numeric.get("ncloc"), Some(&1200.0));
        assert!(out.textual.is_empty());
    }

    #[test]
    fn status_strings_go_to_textual_bucket() {
        let out = coerce_measures(&[RawMeasure::new("alert_status", "OK")]);
        assert_eq!(out.textual.get("alert_status").map(String::as_str), Some("OK"));
        assert!(out.numeric.is_empty());
    }

    #[test]
    fn last_duplicate_wins_across_buckets() {
        let out = coerce_measures(&[
            RawMeasure::new("coverage", "10"),
            RawMeasure::new("coverage", "broken"),
        ]);
        assert!(!out.numeric.contains_key("coverage"));
        assert_eq!(out.textual.get("coverage").map(String::as_str), Some("broken"));

        let out = coerce_measures(&[
            RawMeasure::new("coverage", "broken"),
            RawMeasure::new("coverage", "55.5"),
        ]);
        assert!(!out.textual.contains_key("coverage"));
        assert_eq!(out.numeric.get("coverage"), Some(&55.5));
    }

    #[test]
    fn absent_value_is_empty_text() {
        let out = coerce_measures(&[RawMeasure {
            metric: "coverage".into(),
            value: None,
        }]);
        assert_eq!(out.textual.get("coverage").map(String::as_str), Some(""));
    }

    #[test]
    fn non_finite_strings_are_textual() {
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number(" 4.5 "), Some(4.5));
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn json_numbers_and_booleans() {
        assert_eq!(coerce_value(Some(&json!(12))), MeasureValue::Number(12.0));
        assert_eq!(
            coerce_value(Some(&json!(true))),
            MeasureValue::Text("true".into())
        );
    }

    #[test]
    fn raw_measures_skip_malformed_entries() {
        let doc = json!({
            "component": {
                "measures": [
                    {"metric": "coverage", "value": "70.0"},
                    {"value": "12"},
                    "garbage",
                    {"metric": "bugs", "value": null}
                ]
            }
        });
        let raw = raw_measures_from_json(&doc);
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0], RawMeasure::new("coverage", "70.0"));
        assert_eq!(raw[1].metric, "bugs");
        assert!(raw[1].value.is_none());
    }

    #[test]
    fn raw_measures_missing_component_is_empty() {
        assert!(raw_measures_from_json(&json!({})).is_empty());
        assert!(raw_measures_from_json(&json!({"component": {}})).is_empty());
    }
}
