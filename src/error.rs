//! Error types for fallsim.
//!
//! The integrators themselves never fail; these errors come from the
//! configuration layer and the file readers that sit around them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid vector `{field}`: expected 3 components, got {len}")]
    InvalidVector { field: &'static str, len: usize },

    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),

    #[error("Parse error on line {line}: {msg}")]
    Parse { line: usize, msg: String },
}

pub type Result<T> = std::result::Result<T, SimError>;
