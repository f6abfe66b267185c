//! The canonical metrics model.

use std::collections::BTreeMap;

use serde::Serialize;
use sqreport_math::{clamp_count, clamp_percent, scaled_count};
use sqreport_types::RawMeasure;

use crate::coerce::{CoercedMeasures, coerce_measures};
use crate::keys;

/// Immutable snapshot of one project's measures plus derived figures.
///
/// Every derived field is a pure function of `numeric`; building twice from
/// the same mapping yields identical values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsModel {
    numeric: BTreeMap<String, f64>,
    textual: BTreeMap<String, String>,

    lines_to_cover: u64,
    uncovered_lines: u64,
    covered_lines: u64,
    coverage_percent: f64,
    line_coverage_percent: f64,
    branch_coverage_percent: f64,
    conditions_to_cover: u64,
    branches_covered: u64,
    duplicated_lines_density: f64,

    complexity: u64,
    violations: u64,
    code_smells: u64,
    bugs: u64,
    vulnerabilities: u64,
    security_hotspots: u64,
    duplicated_lines: u64,
    functions: u64,
    tests: u64,
    ncloc: u64,
    statements: u64,
}

/// How a field should be presented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Count(u64),
    /// Already clamped to `[0, 100]`.
    Percent(f64),
}

/// A labelled model field, for renderers that enumerate the whole model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricField {
    pub key: &'static str,
    pub label: &'static str,
    pub value: FieldValue,
}

impl MetricsModel {
    /// Build from numeric measures only.
    pub fn from_numeric(numeric: BTreeMap<String, f64>) -> Self {
        Self::new(CoercedMeasures {
            numeric,
            textual: BTreeMap::new(),
        })
    }

    /// Coerce raw measures and build the model in one step.
    pub fn from_measures(raw: &[RawMeasure]) -> Self {
        Self::new(coerce_measures(raw))
    }

    /// Build from already coerced buckets.
    pub fn new(measures: CoercedMeasures) -> Self {
        let CoercedMeasures { numeric, textual } = measures;
        let count = |key: &str| numeric.get(key).copied().map(clamp_count).unwrap_or(0);
        let percent = |key: &str| numeric.get(key).copied().map(clamp_percent).unwrap_or(0.0);

        let lines_to_cover = count(keys::LINES_TO_COVER);
        let uncovered_lines = count(keys::UNCOVERED_LINES);
        let branch_coverage_percent = percent(keys::BRANCH_COVERAGE);
        let conditions_to_cover = count(keys::CONDITIONS_TO_COVER);

        Self {
            covered_lines: lines_to_cover.saturating_sub(uncovered_lines),
            branches_covered: scaled_count(conditions_to_cover, branch_coverage_percent),
            lines_to_cover,
            uncovered_lines,
            coverage_percent: percent(keys::COVERAGE),
            line_coverage_percent: percent(keys::LINE_COVERAGE),
            branch_coverage_percent,
            conditions_to_cover,
            duplicated_lines_density: percent(keys::DUPLICATED_LINES_DENSITY),
            complexity: count(keys::COMPLEXITY),
            violations: count(keys::VIOLATIONS),
            code_smells: count(keys::CODE_SMELLS),
            bugs: count(keys::BUGS),
            vulnerabilities: count(keys::VULNERABILITIES),
            security_hotspots: count(keys::SECURITY_HOTSPOTS),
            duplicated_lines: count(keys::DUPLICATED_LINES),
            functions: count(keys::FUNCTIONS),
            tests: count(keys::TESTS),
            ncloc: count(keys::NCLOC),
            statements: count(keys::STATEMENTS),
            numeric,
            textual,
        }
    }

    pub fn numeric(&self) -> &BTreeMap<String, f64> {
        &self.numeric
    }

    pub fn textual(&self) -> &BTreeMap<String, String> {
        &self.textual
    }

    /// Raw numeric measure by metric name.
    pub fn numeric_value(&self, key: &str) -> Option<f64> {
        self.numeric.get(key).copied()
    }

    /// Raw textual measure by metric name.
    pub fn textual_value(&self, key: &str) -> Option<&str> {
        self.textual.get(key).map(String::as_str)
    }

    pub fn lines_to_cover(&self) -> u64 {
        self.lines_to_cover
    }

    pub fn uncovered_lines(&self) -> u64 {
        self.uncovered_lines
    }

    /// `lines_to_cover - uncovered_lines`, floored at zero.
    pub fn covered_lines(&self) -> u64 {
        self.covered_lines
    }

    pub fn coverage_percent(&self) -> f64 {
        self.coverage_percent
    }

    pub fn line_coverage_percent(&self) -> f64 {
        self.line_coverage_percent
    }

    pub fn branch_coverage_percent(&self) -> f64 {
        self.branch_coverage_percent
    }

    pub fn conditions_to_cover(&self) -> u64 {
        self.conditions_to_cover
    }

    /// `round(conditions_to_cover * branch_coverage_percent / 100)`.
    pub fn branches_covered(&self) -> u64 {
        self.branches_covered
    }

    pub fn duplicated_lines_density(&self) -> f64 {
        self.duplicated_lines_density
    }

    pub fn complexity(&self) -> u64 {
        self.complexity
    }

    pub fn violations(&self) -> u64 {
        self.violations
    }

    pub fn code_smells(&self) -> u64 {
        self.code_smells
    }

    pub fn bugs(&self) -> u64 {
        self.bugs
    }

    pub fn vulnerabilities(&self) -> u64 {
        self.vulnerabilities
    }

    pub fn security_hotspots(&self) -> u64 {
        self.security_hotspots
    }

    pub fn duplicated_lines(&self) -> u64 {
        self.duplicated_lines
    }

    pub fn functions(&self) -> u64 {
        self.functions
    }

    pub fn tests(&self) -> u64 {
        self.tests
    }

    pub fn ncloc(&self) -> u64 {
        self.ncloc
    }

    pub fn statements(&self) -> u64 {
        self.statements
    }

    /// Every derived and pass-through field with a display label, in a
    /// fixed order.
    pub fn fields(&self) -> Vec<MetricField> {
        use FieldValue::{Count, Percent};

        fn field(key: &'static str, label: &'static str, value: FieldValue) -> MetricField {
            MetricField { key, label, value }
        }

        vec![
            field(keys::COVERAGE, "Coverage", Percent(self.coverage_percent)),
            field(keys::LINE_COVERAGE, "Line Coverage", Percent(self.line_coverage_percent)),
            field(keys::BRANCH_COVERAGE, "Branch Coverage", Percent(self.branch_coverage_percent)),
            field(keys::LINES_TO_COVER, "Lines to Cover", Count(self.lines_to_cover)),
            field(keys::UNCOVERED_LINES, "Uncovered Lines", Count(self.uncovered_lines)),
            field("covered_lines", "Covered Lines", Count(self.covered_lines)),
            field(keys::CONDITIONS_TO_COVER, "Conditions to Cover", Count(self.conditions_to_cover)),
            field("branches_covered", "Covered Branches", Count(self.branches_covered)),
            field(
                keys::DUPLICATED_LINES_DENSITY,
                "Duplicated Lines Density",
                Percent(self.duplicated_lines_density),
            ),
            field(keys::COMPLEXITY, "Complexity", Count(self.complexity)),
            field(keys::VIOLATIONS, "Violations", Count(self.violations)),
            field(keys::CODE_SMELLS, "Code Smells", Count(self.code_smells)),
            field(keys::BUGS, "Bugs", Count(self.bugs)),
            field(keys::VULNERABILITIES, "Vulnerabilities", Count(self.vulnerabilities)),
            field(keys::SECURITY_HOTSPOTS, "Security Hotspots", Count(self.security_hotspots)),
            field(keys::DUPLICATED_LINES, "Duplicated Lines", Count(self.duplicated_lines)),
            field(keys::FUNCTIONS, "Functions", Count(self.functions)),
            field(keys::TESTS, "Tests", Count(self.tests)),
            field(keys::NCLOC, "Lines of Code", Count(self.ncloc)),
            field(keys::STATEMENTS, "Statements", Count(self.statements)),
        ]
    }
}

impl Default for MetricsModel {
    fn default() -> Self {
        Self::new(CoercedMeasures::default())
    }
}
