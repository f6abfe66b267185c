//! # sqreport-issues
//!
//! **Tier 1 (Normalization)**
//!
//! Turns a raw issues feed into [`FileIssues`] groups for the Checkstyle
//! renderer.
//!
//! ## What belongs here
//! * Component-key to file-path mapping
//! * Line/severity/message/rule defaults
//! * Grouping in first-seen file order
//!
//! ## What does NOT belong here
//! * XML output (see `sqreport-checkstyle`)

use std::collections::HashMap;

use serde_json::Value;
use sqreport_types::{
    DEFAULT_ISSUE_SOURCE, DEFAULT_SEVERITY, FileIssues, IssueRecord, UNKNOWN_COMPONENT,
};
use tracing::{debug, trace};

/// Normalize an issues document (`{"issues": [...]}`) into per-file groups.
pub fn normalize_issues(doc: &Value) -> Vec<FileIssues> {
    group_by_file(issues_from_json(doc))
}

/// Extract one [`IssueRecord`] per object in `issues`, in input order.
///
/// A missing or non-array `issues` key is an empty feed.
pub fn issues_from_json(doc: &Value) -> Vec<IssueRecord> {
    let Some(entries) = doc.get("issues").and_then(Value::as_array) else {
        debug!("issues document has no issues array");
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            if entry.is_object() {
                Some(normalize_issue(entry))
            } else {
                trace!("skipping non-object issue entry");
                None
            }
        })
        .collect()
}

/// Normalize a single raw issue object.
pub fn normalize_issue(raw: &Value) -> IssueRecord {
    let text = |key: &str| raw.get(key).and_then(Value::as_str);

    let severity = text("severity")
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SEVERITY.to_string());

    IssueRecord {
        file_path: file_path_from_component(text("component").unwrap_or(UNKNOWN_COMPONENT))
            .to_string(),
        line: parse_line(raw.get("line")),
        message: text("message").unwrap_or_default().to_string(),
        severity,
        rule: text("rule").unwrap_or(DEFAULT_ISSUE_SOURCE).to_string(),
    }
}

/// File key of a `<project>:<path>` component: everything after the first
/// `:`, or the whole string when there is none.
pub fn file_path_from_component(component: &str) -> &str {
    component
        .split_once(':')
        .map(|(_, path)| path)
        .unwrap_or(component)
}

/// Group records by file path, keeping first-seen file order and the input
/// order of issues within each file.
pub fn group_by_file(records: Vec<IssueRecord>) -> Vec<FileIssues> {
    let mut groups: Vec<FileIssues> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let slot = *index.entry(record.file_path.clone()).or_insert_with(|| {
            groups.push(FileIssues {
                file_path: record.file_path.clone(),
                issues: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].issues.push(record);
    }

    debug!(files = groups.len(), "grouped issues by file");
    groups
}

fn parse_line(value: Option<&Value>) -> u32 {
    let line = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match line {
        Some(n) if n.is_finite() && n >= 1.0 => n.min(u32::MAX as f64).trunc() as u32,
        _ => 1,
    }
}
