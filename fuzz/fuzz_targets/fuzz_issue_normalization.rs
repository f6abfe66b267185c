//! Fuzz target for issue normalization.
//!
//! Every issue must land in exactly one group with a line of at least 1.

#![no_main]
use libfuzzer_sys::fuzz_target;
use serde_json::Value;
use sqreport_issues::{issues_from_json, normalize_issues};

fuzz_target!(|data: &[u8]| {
    let Ok(doc) = serde_json::from_slice::<Value>(data) else {
        return;
    };

    let flat = issues_from_json(&doc);
    let groups = normalize_issues(&doc);

    let grouped: usize = groups.iter().map(|g| g.issues.len()).sum();
    assert_eq!(grouped, flat.len());
    for group in &groups {
        assert!(group.issues.iter().all(|i| i.line >= 1 && i.file_path == group.file_path));
    }
});
