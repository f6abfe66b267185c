//! # sqreport-html
//!
//! **Tier 3 (Formatting Adapter)**
//!
//! Single-responsibility HTML dashboard renderer for a [`MetricsModel`] and
//! its [`QualityGateSummary`].
//!
//! ## What belongs here
//! * Status banner, conditions table, coverage bars, metrics tables
//! * HTML escaping of every interpolated value
//!
//! ## What does NOT belong here
//! * Computing or defaulting figures (see `sqreport-model`)
//! * Reading the clock; the caller passes the timestamp in

use std::fmt::Write as _;

use sqreport_model::{FieldValue, MetricsModel};
use sqreport_types::{NOT_AVAILABLE, QualityGateSummary};
use time::OffsetDateTime;
use time::macros::format_description;
use tracing::debug;

const TEMPLATE: &str = include_str!("templates/dashboard.html");

/// Page title used when none is configured.
pub const DEFAULT_TITLE: &str = "SonarQube Metrics Report";

/// Presentation options for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlOptions {
    pub title: String,
    /// When set, a "Report generated on" footer is rendered.
    pub generated_at: Option<OffsetDateTime>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            generated_at: None,
        }
    }
}

/// Render a self-contained HTML dashboard.
pub fn render(model: &MetricsModel, gate: &QualityGateSummary, options: &HtmlOptions) -> String {
    let status_class = if gate.passed() { "status-pass" } else { "status-fail" };

    debug!(
        conditions = gate.conditions.len(),
        textual = model.textual().len(),
        "rendering html dashboard"
    );

    let title = escape_html(&options.title);
    let condition_rows = build_condition_rows(gate);
    let coverage_bars = build_coverage_bars(model);
    let metric_rows = build_metric_rows(model);
    let textual_section = build_textual_section(model);
    let footer = build_footer(options.generated_at);

    fill_template(
        TEMPLATE,
        &[
            ("TITLE", title.as_str()),
            ("STATUS_CLASS", status_class),
            ("STATUS", gate.status.as_str()),
            ("CONDITION_ROWS", condition_rows.as_str()),
            ("COVERAGE_BARS", coverage_bars.as_str()),
            ("METRIC_ROWS", metric_rows.as_str()),
            ("TEXTUAL_SECTION", textual_section.as_str()),
            ("FOOTER", footer.as_str()),
        ],
    )
}

/// Substitute `{{KEY}}` placeholders in one pass, so substituted values are
/// never themselves scanned for placeholders.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = &after[..end];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

fn build_condition_rows(gate: &QualityGateSummary) -> String {
    let mut rows = String::new();
    for c in &gate.conditions {
        let _ = writeln!(
            rows,
            "      <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&c.metric_key),
            escape_html(&c.actual_value),
            escape_html(&c.status),
            escape_html(&c.error_threshold),
        );
    }
    if gate.conditions.is_empty() {
        rows.push_str("      <tr><td colspan=\"4\">No conditions reported</td></tr>\n");
    }
    rows
}

fn build_coverage_bars(model: &MetricsModel) -> String {
    let bars = [
        ("Coverage", model.coverage_percent()),
        ("Line Coverage", model.line_coverage_percent()),
        ("Branch Coverage", model.branch_coverage_percent()),
    ];

    let mut out = String::new();
    for (label, percent) in bars {
        let covered = format_number(percent);
        let uncovered = format_number(100.0 - percent);
        let _ = writeln!(
            out,
            concat!(
                "  <div class=\"bar-row\"><strong>{label}</strong> {covered}%\n",
                "    <div class=\"bar\"><div class=\"bar-covered\" style=\"width: {covered}%\"></div>",
                "<div class=\"bar-uncovered\" style=\"width: {uncovered}%\"></div></div>\n",
                "  </div>"
            ),
            label = label,
            covered = covered,
            uncovered = uncovered,
        );
    }
    out
}

fn build_metric_rows(model: &MetricsModel) -> String {
    let mut rows = String::new();
    for field in model.fields() {
        let value = match field.value {
            FieldValue::Count(n) => n.to_string(),
            FieldValue::Percent(p) => format_percent(p),
        };
        let _ = writeln!(
            rows,
            "      <tr data-key=\"{}\"><td>{}</td><td class=\"num\">{}</td></tr>",
            field.key, field.label, value
        );
    }
    rows
}

fn build_textual_section(model: &MetricsModel) -> String {
    if model.textual().is_empty() {
        return String::new();
    }

    let mut out = String::from(concat!(
        "  <h2>Other Measures</h2>\n",
        "  <table class=\"textual\">\n",
        "    <thead><tr><th>Metric</th><th>Value</th></tr></thead>\n",
        "    <tbody>\n"
    ));
    for (key, value) in model.textual() {
        let shown = if value.trim().is_empty() {
            NOT_AVAILABLE
        } else {
            value.as_str()
        };
        let _ = writeln!(
            out,
            "      <tr><td>{}</td><td>{}</td></tr>",
            escape_html(key),
            escape_html(shown)
        );
    }
    out.push_str("    </tbody>\n  </table>\n");
    out
}

fn build_footer(generated_at: Option<OffsetDateTime>) -> String {
    generated_at
        .and_then(format_timestamp)
        .map(|ts| format!("  <p class=\"generated\">Report generated on: {ts}</p>\n"))
        .unwrap_or_default()
}

fn format_timestamp(at: OffsetDateTime) -> Option<String> {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");
    at.to_offset(time::UtcOffset::UTC).format(&format).ok()
}

/// Format a percentage with at most one decimal, dropping a trailing `.0`.
pub fn format_percent(percent: f64) -> String {
    format!("{}%", format_number(percent))
}

fn format_number(value: f64) -> String {
    let text = format!("{value:.1}");
    match text.strip_suffix(".0") {
        Some(whole) if whole == "-0" => "0".to_string(),
        Some(whole) => whole.to_string(),
        None => text,
    }
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
