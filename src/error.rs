//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Covers environment resolution, argument validation, processor parameter
//! schema violations, and I/O failures during artifact emission.
use thiserror::Error;

use crate::types::ValueKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing base path: required environment variable {var} is not set")]
    MissingEnv { var: &'static str },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("processor '{processor}' is missing required parameter '{key}'")]
    MissingParameter { processor: String, key: String },

    #[error("processor '{processor}' does not accept parameter '{key}'")]
    UnknownParameter { processor: String, key: String },

    #[error("processor '{processor}' parameter '{key}' expects {expected}, got {got}")]
    ParameterType {
        processor: String,
        key: String,
        expected: ValueKind,
        got: ValueKind,
    },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
