//! # sqreport-cobertura
//!
//! **Tier 3 (Formatting Adapter)**
//!
//! Cobertura XML renderer for [`MetricsModel`].
//!
//! The measures carry no per-file breakdown, so the document holds one
//! synthetic package and class. Its `<lines>` block has exactly
//! `lines_to_cover` entries; the first `covered_lines` of them are hit. That
//! ordering is a fixed convention and says nothing about which real lines
//! were executed.
//!
//! ## What belongs here
//! * Root/package/class rate attributes
//! * Synthetic line and branch-line entries
//!
//! ## What does NOT belong here
//! * Computing any figure (see `sqreport-model`)
//! * Writing files

use std::io::{self, Write};

use sqreport_math::percent_to_rate;
use sqreport_model::MetricsModel;
use sqreport_types::COBERTURA_VERSION;
use sqreport_xml::{close, empty, open, text, write_declaration};
use tracing::debug;

const AGGREGATE_NOTE: &str = "<!-- synthetic per-line entries; aggregate coverage only -->";

/// Names used for the synthetic source root, package and class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoberturaOptions {
    pub source: String,
    pub package: String,
    pub class_name: String,
    pub filename: String,
}

impl Default for CoberturaOptions {
    fn default() -> Self {
        Self {
            source: ".".to_string(),
            package: "sonarqube".to_string(),
            class_name: "sonar_metrics_summary".to_string(),
            filename: "summary".to_string(),
        }
    }
}

/// Render the Cobertura document into a string.
pub fn render(model: &MetricsModel, options: &CoberturaOptions) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_cobertura(model, options, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Stream the Cobertura document into `out`.
///
/// Output size is linear in `lines_to_cover`; pass a buffered writer for
/// large projects.
pub fn write_cobertura<W: Write>(
    model: &MetricsModel,
    options: &CoberturaOptions,
    out: &mut W,
) -> io::Result<()> {
    let line_rate = format!("{:.4}", percent_to_rate(model.line_coverage_percent()));
    let branch_rate = format!("{:.4}", percent_to_rate(model.branch_coverage_percent()));
    let complexity = model.complexity().to_string();
    let lines_covered = model.covered_lines().to_string();
    let lines_valid = model.lines_to_cover().to_string();
    let branches_covered = model.branches_covered().to_string();
    let branches_valid = model.conditions_to_cover().to_string();
    let (line_rate, branch_rate, complexity) =
        (line_rate.as_str(), branch_rate.as_str(), complexity.as_str());

    debug!(
        lines = model.lines_to_cover(),
        covered = model.covered_lines(),
        "writing cobertura report"
    );

    write_declaration(out)?;
    writeln!(out, "{AGGREGATE_NOTE}")?;
    open(
        out,
        0,
        "coverage",
        &[
            ("line-rate", line_rate),
            ("branch-rate", branch_rate),
            ("lines-covered", lines_covered.as_str()),
            ("lines-valid", lines_valid.as_str()),
            ("branches-covered", branches_covered.as_str()),
            ("branches-valid", branches_valid.as_str()),
            ("complexity", complexity),
            ("timestamp", "0"),
            ("version", COBERTURA_VERSION),
        ],
    )?;

    open(out, 1, "sources", &[])?;
    text(out, 2, "source", &options.source)?;
    close(out, 1, "sources")?;

    open(out, 1, "packages", &[])?;
    open(
        out,
        2,
        "package",
        &[
            ("name", options.package.as_str()),
            ("line-rate", line_rate),
            ("branch-rate", branch_rate),
            ("complexity", complexity),
        ],
    )?;
    open(out, 3, "classes", &[])?;
    open(
        out,
        4,
        "class",
        &[
            ("name", options.class_name.as_str()),
            ("filename", options.filename.as_str()),
            ("line-rate", line_rate),
            ("branch-rate", branch_rate),
            ("complexity", complexity),
        ],
    )?;
    empty(out, 5, "methods", &[])?;
    open(out, 5, "lines", &[])?;
    write_lines(model, out)?;
    close(out, 5, "lines")?;
    close(out, 4, "class")?;
    close(out, 3, "classes")?;
    close(out, 2, "package")?;
    close(out, 1, "packages")?;
    close(out, 0, "coverage")
}

fn write_lines<W: Write>(model: &MetricsModel, out: &mut W) -> io::Result<()> {
    const INDENT: &str = "            ";

    let covered = model.covered_lines();
    let total = model.lines_to_cover();
    for number in 1..=total {
        let hits = u8::from(number <= covered);
        writeln!(
            out,
            r#"{INDENT}<line number="{number}" hits="{hits}" branch="false"/>"#
        )?;
    }

    let conditions = model.conditions_to_cover();
    if conditions > 0 {
        writeln!(
            out,
            r#"{INDENT}<line number="{}" hits="1" branch="true" condition-coverage="{}"/>"#,
            total.saturating_add(1),
            condition_coverage(model),
        )?;
    }
    Ok(())
}

/// `"{pct}% ({covered}/{total})"` summary for the synthetic branch line.
pub fn condition_coverage(model: &MetricsModel) -> String {
    format!(
        "{:.1}% ({}/{})",
        model.branch_coverage_percent(),
        model.branches_covered(),
        model.conditions_to_cover()
    )
}
