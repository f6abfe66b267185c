//! # sqreport-gate
//!
//! **Tier 1 (Quality Gate)**
//!
//! Canonical view of a quality-gate verdict and its per-metric conditions.
//!
//! ## What belongs here
//! * JSON Pointer resolution over the raw gate document
//! * Status parsing with the `UNKNOWN` fallback
//! * Field-for-field condition extraction with `N/A` defaults
//!
//! ## Example
//! ```
//! use serde_json::json;
//! use sqreport_gate::summarize_quality_gate;
//! use sqreport_types::GateStatus;
//!
//! let doc = json!({"projectStatus": {"status": "OK", "conditions": []}});
//! let summary = summarize_quality_gate(&doc);
//! assert_eq!(summary.status, GateStatus::Ok);
//! ```

mod pointer;
mod summary;

pub use pointer::resolve_pointer;
pub use summary::summarize_quality_gate;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sqreport_types::GateStatus;

    #[test]
    fn resolve_pointer_missing_path() {
        let doc = json!({"projectStatus": {}});
        assert_eq!(resolve_pointer(&doc, "/projectStatus/status"), None);
    }

    #[test]
    fn summarize_reports_error_gate() {
        let doc = json!({"projectStatus": {"status": "ERROR"}});
        let summary = summarize_quality_gate(&doc);
        assert_eq!(summary.status, GateStatus::Error);
        assert!(!summary.passed());
    }

    #[test]
    fn summarize_on_non_object_document_is_unknown() {
        let summary = summarize_quality_gate(&json!([1, 2, 3]));
        assert_eq!(summary.status, GateStatus::Unknown);
        assert!(summary.conditions.is_empty());
    }
}
