//! Error types for nullable values and their validators

use thiserror::Error;

/// Numeric kind of a nullable value, used in parse error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullableKind {
    /// Signed 64-bit integer
    Int,
    /// 64-bit float
    Float,
    /// Boolean literal
    Bool,
}

impl NullableKind {
    /// Name used in error messages
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
        }
    }
}

/// Errors produced while reading or validating a nullable value
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NullableError {
    /// The raw attribute value was not a string
    #[error("expected type of {key} to be string")]
    WrongType { key: String },

    /// The string could not be parsed as the expected kind
    #[error("{key}: cannot parse '{value}' as {}: {reason}", .kind.as_str())]
    Parse {
        key: String,
        value: String,
        kind: NullableKind,
        reason: String,
    },

    /// The parsed value is outside the allowed bounds
    #[error("expected {key} to be {bounds}, got {value}")]
    OutOfRange {
        key: String,
        bounds: String,
        value: String,
    },
}

impl NullableError {
    /// Build a `Parse` error from borrowed parts
    #[must_use]
    pub fn parse(key: &str, value: &str, kind: NullableKind, reason: &str) -> Self {
        Self::Parse {
            key: key.to_string(),
            value: value.to_string(),
            kind,
            reason: reason.to_string(),
        }
    }
}
