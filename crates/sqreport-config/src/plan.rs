//! Merging CLI flags over the config file into an explicit render plan.

use std::path::{Path, PathBuf};

use crate::RenderArgs;
use crate::toml_config::{CoberturaConfig, ConfigError, ReportConfig};

pub const DEFAULT_HTML_FILE: &str = "metrics_report.html";
pub const DEFAULT_COBERTURA_FILE: &str = "sonarqube_cobertura.xml";
pub const DEFAULT_CHECKSTYLE_FILE: &str = "sonar_checkstyle.xml";

/// Where the input documents are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSources {
    pub quality_gate: PathBuf,
    pub measures: PathBuf,
    pub issues: Option<PathBuf>,
}

/// Where each artifact is written. `None` skips that artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputDestinations {
    pub html: Option<PathBuf>,
    pub cobertura: Option<PathBuf>,
    pub checkstyle: Option<PathBuf>,
}

impl OutputDestinations {
    pub fn is_empty(&self) -> bool {
        self.html.is_none() && self.cobertura.is_none() && self.checkstyle.is_none()
    }

    /// Fill every unset destination with its default file name under `dir`.
    /// Checkstyle is only filled when an issues input exists.
    pub fn fill_defaults(&mut self, dir: &Path, with_checkstyle: bool) {
        self.html.get_or_insert_with(|| dir.join(DEFAULT_HTML_FILE));
        self.cobertura.get_or_insert_with(|| dir.join(DEFAULT_COBERTURA_FILE));
        if with_checkstyle {
            self.checkstyle.get_or_insert_with(|| dir.join(DEFAULT_CHECKSTYLE_FILE));
        }
    }
}

/// Fully resolved settings for one `render` run.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub inputs: InputSources,
    pub outputs: OutputDestinations,
    pub title: Option<String>,
    pub cobertura: CoberturaConfig,
    pub fail_on_gate: bool,
    pub timestamp: bool,
}

impl RenderPlan {
    /// Merge `args` over `config`, field by field.
    ///
    /// `--out-dir` fills any output still unset; with neither explicit
    /// outputs nor `--out-dir`, every output goes to the working directory.
    pub fn resolve(args: &RenderArgs, config: &ReportConfig) -> Result<Self, ConfigError> {
        let pick =
            |cli: &Option<PathBuf>, file: &Option<PathBuf>| cli.clone().or_else(|| file.clone());

        let inputs = InputSources {
            quality_gate: pick(&args.quality_gate, &config.inputs.quality_gate)
                .ok_or(ConfigError::MissingInput("quality-gate"))?,
            measures: pick(&args.measures, &config.inputs.measures)
                .ok_or(ConfigError::MissingInput("measures"))?,
            issues: pick(&args.issues, &config.inputs.issues),
        };

        let mut outputs = OutputDestinations {
            html: pick(&args.html, &config.outputs.html),
            cobertura: pick(&args.cobertura, &config.outputs.cobertura),
            checkstyle: pick(&args.checkstyle, &config.outputs.checkstyle),
        };
        let with_checkstyle = inputs.issues.is_some();
        match &args.out_dir {
            Some(dir) => outputs.fill_defaults(dir, with_checkstyle),
            None if outputs.is_empty() => outputs.fill_defaults(Path::new("."), with_checkstyle),
            None => {}
        }

        Ok(Self {
            inputs,
            outputs,
            title: args.title.clone().or_else(|| config.html.title.clone()),
            cobertura: config.cobertura.clone(),
            fail_on_gate: args.fail_on_gate,
            timestamp: !args.no_timestamp,
        })
    }
}
