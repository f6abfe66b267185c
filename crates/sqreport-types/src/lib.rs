//! # sqreport-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the core data structures shared by the `sqreport`
//! microcrates. It contains only data types, Serde definitions, and the fixed
//! schema constants of the emitted report formats.
//!
//! ## What belongs here
//! * Raw input records (`RawMeasure`)
//! * Canonical quality-gate and issue types
//! * Output schema versions and shared default values
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing
//! * Normalization or rendering logic

use std::fmt;

use serde::{Deserialize, Serialize};

/// Cobertura schema version declared on the `coverage` root element.
pub const COBERTURA_VERSION: &str = "1.9";

/// Checkstyle schema version declared on the `checkstyle` root element.
pub const CHECKSTYLE_VERSION: &str = "8.0";

/// Placeholder for absent string fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Rule/source tag used when an issue carries no rule id.
pub const DEFAULT_ISSUE_SOURCE: &str = "sonarqube";

/// Severity used when an issue carries none.
pub const DEFAULT_SEVERITY: &str = "info";

/// File key used when an issue has no component.
pub const UNKNOWN_COMPONENT: &str = "unknown";

/// Which input document a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    QualityGate,
    Measures,
    Issues,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::QualityGate => write!(f, "quality-gate"),
            InputKind::Measures => write!(f, "measures"),
            InputKind::Issues => write!(f, "issues"),
        }
    }
}

/// A single measure exactly as received.
///
/// `value` is kept untyped: exports carry strings (`"81.3"`, `"OK"`), but
/// numbers and nulls show up as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMeasure {
    pub metric: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl RawMeasure {
    /// Convenience constructor for string-valued measures.
    pub fn new(metric: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            value: Some(serde_json::Value::String(value.into())),
        }
    }
}

/// Overall verdict of a quality gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GateStatus {
    Ok,
    Error,
    #[default]
    Unknown,
}

impl GateStatus {
    /// Parse a platform status string. Anything unrecognised is `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "OK" => GateStatus::Ok,
            "ERROR" => GateStatus::Error,
            _ => GateStatus::Unknown,
        }
    }

    /// The upper-case wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            GateStatus::Ok => "OK",
            GateStatus::Error => "ERROR",
            GateStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for GateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One threshold condition of a quality gate, copied field for field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub metric_key: String,
    pub actual_value: String,
    pub status: String,
    pub comparator: String,
    pub error_threshold: String,
}

impl Default for Condition {
    fn default() -> Self {
        Self {
            metric_key: NOT_AVAILABLE.to_string(),
            actual_value: NOT_AVAILABLE.to_string(),
            status: NOT_AVAILABLE.to_string(),
            comparator: NOT_AVAILABLE.to_string(),
            error_threshold: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Canonical view of a quality-gate result.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QualityGateSummary {
    pub status: GateStatus,
    pub conditions: Vec<Condition>,
}

impl QualityGateSummary {
    /// The gate passes only on an explicit `OK`.
    pub fn passed(&self) -> bool {
        self.status == GateStatus::Ok
    }

    /// Conditions whose own status is `ERROR`.
    pub fn failed_conditions(&self) -> impl Iterator<Item = &Condition> {
        self.conditions
            .iter()
            .filter(|c| GateStatus::parse(&c.status) == GateStatus::Error)
    }
}

/// One lint/analysis finding attached to a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    pub file_path: String,
    /// 1-based line number; never 0.
    pub line: u32,
    pub message: String,
    /// Lower-cased platform severity (`info`, `minor`, `major`, ...).
    pub severity: String,
    pub rule: String,
}

/// Issues grouped under a single file, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileIssues {
    pub file_path: String,
    pub issues: Vec<IssueRecord>,
}
