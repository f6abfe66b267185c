//! # sqreport-core
//!
//! This crate is the **primary library interface** for `sqreport`.
//! It validates the three input documents, builds the canonical model once
//! and hands it to every renderer, so the artifacts cannot disagree.
//!
//! ## Example
//!
//! ```rust
//! use sqreport_core::{ReportInputs, RenderOptions, generate};
//!
//! let inputs = ReportInputs::from_json(
//!     r#"{"projectStatus": {"status": "OK", "conditions": []}}"#,
//!     r#"{"component": {"measures": [{"metric": "coverage", "value": "81.3"}]}}"#,
//!     None,
//! )
//! .expect("well-formed inputs");
//!
//! let artifacts = generate(&inputs, &RenderOptions::default()).expect("render");
//! assert!(artifacts.gate.passed());
//! assert!(artifacts.html.contains("81.3%"));
//! assert!(artifacts.checkstyle.is_none());
//! ```

mod error;

use std::io::Write;

use serde_json::Value;
use tracing::{debug, info};

pub use error::{ErrorCode, ReportError};
pub use sqreport_cobertura::CoberturaOptions;
pub use sqreport_html::HtmlOptions;
pub use sqreport_model as model;
pub use sqreport_types as types;

use sqreport_model::{MetricsModel, raw_measures_from_json};
use sqreport_types::{FileIssues, InputKind, QualityGateSummary};

/// Parse one input document and check that its top level is an object.
pub fn parse_document(kind: InputKind, text: &str) -> Result<Value, ReportError> {
    let value: Value = serde_json::from_str(text).map_err(|source| ReportError::InvalidJson {
        input: kind,
        source,
    })?;
    ensure_object(kind, &value)?;
    Ok(value)
}

fn ensure_object(kind: InputKind, value: &Value) -> Result<(), ReportError> {
    if value.is_object() {
        return Ok(());
    }
    Err(ReportError::InputShape {
        input: kind,
        found: json_type_name(value),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The already-parsed input documents of one invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportInputs {
    pub quality_gate: Value,
    pub measures: Value,
    /// Only needed for the Checkstyle artifact.
    pub issues: Option<Value>,
}

impl ReportInputs {
    /// Parse all inputs from JSON text.
    pub fn from_json(
        quality_gate: &str,
        measures: &str,
        issues: Option<&str>,
    ) -> Result<Self, ReportError> {
        Ok(Self {
            quality_gate: parse_document(InputKind::QualityGate, quality_gate)?,
            measures: parse_document(InputKind::Measures, measures)?,
            issues: issues
                .map(|text| parse_document(InputKind::Issues, text))
                .transpose()?,
        })
    }
}

/// Options for every renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    pub html: HtmlOptions,
    pub cobertura: CoberturaOptions,
}

/// Normalized data shared by all renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedReport {
    pub model: MetricsModel,
    pub gate: QualityGateSummary,
    pub issues: Option<Vec<FileIssues>>,
}

impl PreparedReport {
    /// Validate the inputs and run every normalization pass once.
    pub fn new(inputs: &ReportInputs) -> Result<Self, ReportError> {
        ensure_object(InputKind::QualityGate, &inputs.quality_gate)?;
        ensure_object(InputKind::Measures, &inputs.measures)?;
        if let Some(issues) = &inputs.issues {
            ensure_object(InputKind::Issues, issues)?;
        }

        let model = MetricsModel::from_measures(&raw_measures_from_json(&inputs.measures));
        let gate = sqreport_gate::summarize_quality_gate(&inputs.quality_gate);
        let issues = inputs.issues.as_ref().map(sqreport_issues::normalize_issues);

        debug!(
            numeric = model.numeric().len(),
            textual = model.textual().len(),
            status = %gate.status,
            issue_files = issues.as_ref().map_or(0, Vec::len),
            "prepared report"
        );
        Ok(Self { model, gate, issues })
    }

    pub fn render_html(&self, options: &HtmlOptions) -> String {
        sqreport_html::render(&self.model, &self.gate, options)
    }

    pub fn render_cobertura(&self, options: &CoberturaOptions) -> String {
        sqreport_cobertura::render(&self.model, options)
    }

    /// Stream the Cobertura document; prefer this for large projects.
    pub fn write_cobertura<W: Write>(
        &self,
        options: &CoberturaOptions,
        out: &mut W,
    ) -> Result<(), ReportError> {
        sqreport_cobertura::write_cobertura(&self.model, options, out)?;
        Ok(())
    }

    /// `None` when no issues input was supplied.
    pub fn render_checkstyle(&self) -> Option<String> {
        self.issues.as_deref().map(sqreport_checkstyle::render)
    }

    /// Stream the Checkstyle document. Returns `Ok(false)` without writing
    /// when no issues input was supplied.
    pub fn write_checkstyle<W: Write>(&self, out: &mut W) -> Result<bool, ReportError> {
        match &self.issues {
            Some(files) => {
                sqreport_checkstyle::write_checkstyle(files, out)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Every artifact of one run, rendered into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportArtifacts {
    pub model: MetricsModel,
    pub gate: QualityGateSummary,
    pub html: String,
    pub cobertura: String,
    pub checkstyle: Option<String>,
}

/// Runs the complete pipeline: validate, normalize once, render all.
pub fn generate(
    inputs: &ReportInputs,
    options: &RenderOptions,
) -> Result<ReportArtifacts, ReportError> {
    let prepared = PreparedReport::new(inputs)?;
    let html = prepared.render_html(&options.html);
    let cobertura = prepared.render_cobertura(&options.cobertura);
    let checkstyle = prepared.render_checkstyle();

    info!(
        status = %prepared.gate.status,
        checkstyle = checkstyle.is_some(),
        "generated report artifacts"
    );
    Ok(ReportArtifacts {
        model: prepared.model,
        gate: prepared.gate,
        html,
        cobertura,
        checkstyle,
    })
}
