//! Metric names as they appear in measure exports.

pub const COVERAGE: &str = "coverage";
pub const LINE_COVERAGE: &str = "line_coverage";
pub const BRANCH_COVERAGE: &str = "branch_coverage";
pub const LINES_TO_COVER: &str = "lines_to_cover";
pub const UNCOVERED_LINES: &str = "uncovered_lines";
pub const CONDITIONS_TO_COVER: &str = "conditions_to_cover";
pub const DUPLICATED_LINES_DENSITY: &str = "duplicated_lines_density";

pub const COMPLEXITY: &str = "complexity";
pub const VIOLATIONS: &str = "violations";
pub const CODE_SMELLS: &str = "code_smells";
pub const BUGS: &str = "bugs";
pub const VULNERABILITIES: &str = "vulnerabilities";
pub const SECURITY_HOTSPOTS: &str = "security_hotspots";
pub const DUPLICATED_LINES: &str = "duplicated_lines";
pub const FUNCTIONS: &str = "functions";
pub const TESTS: &str = "tests";
pub const NCLOC: &str = "ncloc";
pub const STATEMENTS: &str = "statements";
