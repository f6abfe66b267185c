//! TOML configuration file structures.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading configuration or resolving a render plan.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("no {0} input configured; pass --{0} or set it under [inputs]")]
    MissingInput(&'static str),
}

/// Root TOML configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub inputs: InputsConfig,
    pub outputs: OutputsConfig,
    pub html: HtmlConfig,
    pub cobertura: CoberturaConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputsConfig {
    pub quality_gate: Option<PathBuf>,
    pub measures: Option<PathBuf>,
    pub issues: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputsConfig {
    pub html: Option<PathBuf>,
    pub cobertura: Option<PathBuf>,
    pub checkstyle: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    pub title: Option<String>,
}

/// Names for the synthetic Cobertura source root, package and class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoberturaConfig {
    pub source: Option<String>,
    pub package: Option<String>,
    pub class_name: Option<String>,
    pub filename: Option<String>,
}

impl ReportConfig {
    /// Load configuration from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load configuration from a file path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(ReportConfig::from_toml("").unwrap(), ReportConfig::default());
    }

    #[test]
    fn parses_all_sections() {
        let config = ReportConfig::from_toml(
            r#"
            [inputs]
            quality_gate = "sonarqube_quality_gate.json"
            measures = "archive/sonar_metrics.json"

            [outputs]
            cobertura = "coverage/sonarqube_cobertura.xml"

            [html]
            title = "Petclinic"

            [cobertura]
            package = "petclinic"
            class_name = "summary"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.inputs.quality_gate,
            Some(PathBuf::from("sonarqube_quality_gate.json"))
        );
        assert!(config.inputs.issues.is_none());
        assert_eq!(
            config.outputs.cobertura,
            Some(PathBuf::from("coverage/sonarqube_cobertura.xml"))
        );
        assert_eq!(config.html.title.as_deref(), Some("Petclinic"));
        assert_eq!(config.cobertura.package.as_deref(), Some("petclinic"));
        assert!(config.cobertura.source.is_none());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let err = ReportConfig::from_toml("[inputs\nquality_gate = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ReportConfig::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
