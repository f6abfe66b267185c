//! Fuzz target for measure coercion and metrics model construction.
//!
//! Any JSON document must produce a model without panicking, and no derived
//! figure may be NaN, negative, or outside its range.

#![no_main]
use libfuzzer_sys::fuzz_target;
use serde_json::Value;
use sqreport_model::{MetricsModel, coerce_measures, raw_measures_from_json};

fuzz_target!(|data: &[u8]| {
    let Ok(doc) = serde_json::from_slice::<Value>(data) else {
        return;
    };

    let raw = raw_measures_from_json(&doc);
    let coerced = coerce_measures(&raw);
    assert!(coerced.numeric.values().all(|v| v.is_finite()));
    assert!(coerced.numeric.keys().all(|k| !coerced.textual.contains_key(k)));

    let model = MetricsModel::new(coerced);
    for pct in [
        model.coverage_percent(),
        model.line_coverage_percent(),
        model.branch_coverage_percent(),
        model.duplicated_lines_density(),
    ] {
        assert!((0.0..=100.0).contains(&pct));
    }
    assert!(model.covered_lines() <= model.lines_to_cover());
    assert!(model.branches_covered() <= model.conditions_to_cover());
    assert_eq!(model, MetricsModel::from_measures(&raw));
});
