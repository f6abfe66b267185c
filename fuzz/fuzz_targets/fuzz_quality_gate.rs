//! Fuzz target for quality gate extraction.
//!
//! Tests `summarize_quality_gate()` and `resolve_pointer()` with arbitrary
//! JSON documents; neither may panic.

#![no_main]
use libfuzzer_sys::fuzz_target;
use serde_json::Value;
use sqreport_gate::{resolve_pointer, summarize_quality_gate};

fuzz_target!(|data: &[u8]| {
    let Ok(doc) = serde_json::from_slice::<Value>(data) else {
        return;
    };

    let summary = summarize_quality_gate(&doc);
    let _ = summary.passed();
    let _ = summary.failed_conditions().count();

    for pointer in ["", "/", "//", "/~0", "/~1", "/projectStatus/conditions/0", "/0/0/0"] {
        let _ = resolve_pointer(&doc, pointer);
    }
});
