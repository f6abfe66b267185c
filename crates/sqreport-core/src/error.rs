//! Structured error type for the report pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqreport_types::InputKind;
use thiserror::Error;

/// Stable machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Input text is not JSON.
    InvalidJson,
    /// JSON parsed but the top level is not an object.
    InputShape,
    /// Writing an artifact failed.
    IoError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::InvalidJson => write!(f, "invalid_json"),
            ErrorCode::InputShape => write!(f, "input_shape"),
            ErrorCode::IoError => write!(f, "io_error"),
        }
    }
}

/// The only failures the pipeline surfaces. Missing or malformed fields
/// inside a well-shaped document are absorbed into defaults instead.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{input} input is not valid JSON: {source}")]
    InvalidJson {
        input: InputKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("{input} input must be a JSON object, found {found}")]
    InputShape { input: InputKind, found: &'static str },

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ReportError::InvalidJson { .. } => ErrorCode::InvalidJson,
            ReportError::InputShape { .. } => ErrorCode::InputShape,
            ReportError::Io(_) => ErrorCode::IoError,
        }
    }

    /// Which input document the error refers to, if any.
    pub fn input(&self) -> Option<InputKind> {
        match self {
            ReportError::InvalidJson { input, .. } | ReportError::InputShape { input, .. } => {
                Some(*input)
            }
            ReportError::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_display_snake_case() {
        assert_eq!(ErrorCode::InvalidJson.to_string(), "invalid_json");
        assert_eq!(ErrorCode::InputShape.to_string(), "input_shape");
        assert_eq!(ErrorCode::IoError.to_string(), "io_error");
    }

    #[test]
    fn codes_serialize_like_display() {
        for code in [ErrorCode::InvalidJson, ErrorCode::InputShape, ErrorCode::IoError] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{code}\""));
        }
    }

    #[test]
    fn input_shape_message_names_the_document() {
        let err = ReportError::InputShape {
            input: InputKind::Measures,
            found: "array",
        };
        assert_eq!(err.to_string(), "measures input must be a JSON object, found array");
        assert_eq!(err.code(), ErrorCode::InputShape);
        assert_eq!(err.input(), Some(InputKind::Measures));
    }

    #[test]
    fn io_error_has_no_input() {
        let err = ReportError::from(std::io::Error::other("disk full"));
        assert_eq!(err.code(), ErrorCode::IoError);
        assert_eq!(err.input(), None);
    }
}
