//! # sqreport-config
//!
//! **Tier 4 (Configuration)**
//!
//! This crate defines the CLI arguments and configuration file structures,
//! and merges the two into the explicit input/output plan the binary runs.
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * Configuration file struct definitions (Serde)
//! * Default file names and CLI-over-file precedence
//!
//! ## What does NOT belong here
//! * Business logic
//! * I/O operations (except config file parsing)

mod plan;
mod toml_config;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub use plan::{
    DEFAULT_CHECKSTYLE_FILE, DEFAULT_COBERTURA_FILE, DEFAULT_HTML_FILE, InputSources,
    OutputDestinations, RenderPlan,
};
pub use toml_config::{
    CoberturaConfig, ConfigError, HtmlConfig, InputsConfig, OutputsConfig, ReportConfig,
};

/// `sqreport`: turn SonarQube exports into HTML, Cobertura and Checkstyle
/// reports.
#[derive(Parser, Debug)]
#[command(name = "sqreport", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging on stderr (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render the HTML dashboard, Cobertura XML and Checkstyle XML.
    Render(RenderArgs),

    /// Print the quality gate verdict and headline coverage figures.
    Summary(SummaryArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Quality gate JSON (`projectStatus` document).
    #[arg(long, value_name = "FILE")]
    pub quality_gate: Option<PathBuf>,

    /// Measures JSON (`component.measures` document).
    #[arg(long, value_name = "FILE")]
    pub measures: Option<PathBuf>,

    /// Issues JSON. Checkstyle output is only produced when given.
    #[arg(long, value_name = "FILE")]
    pub issues: Option<PathBuf>,

    /// Where to write the HTML dashboard.
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,

    /// Where to write the Cobertura XML.
    #[arg(long, value_name = "FILE")]
    pub cobertura: Option<PathBuf>,

    /// Where to write the Checkstyle XML.
    #[arg(long, value_name = "FILE")]
    pub checkstyle: Option<PathBuf>,

    /// Directory for any output not given explicitly, using default names.
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// TOML configuration file. CLI flags override its values.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// HTML page title.
    #[arg(long)]
    pub title: Option<String>,

    /// Exit with code 2 when the quality gate is not OK.
    #[arg(long)]
    pub fail_on_gate: bool,

    /// Omit the "Report generated on" footer for reproducible output.
    #[arg(long)]
    pub no_timestamp: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    /// Quality gate JSON (`projectStatus` document).
    #[arg(long, value_name = "FILE")]
    pub quality_gate: PathBuf,

    /// Measures JSON; adds coverage figures to the summary.
    #[arg(long, value_name = "FILE")]
    pub measures: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    pub format: SummaryFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}
