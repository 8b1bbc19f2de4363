//! Error types shared by the dataproc crates.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Errors raised while reading loosely-typed input.
#[derive(Debug, Error)]
pub enum DataProcError {
    /// A value had a JSON kind the operation cannot work with.
    #[error("type mismatch for '{field}': expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: JsonKind,
    },

    /// An exact integer total does not fit in 64 bits.
    #[error("integer total {total} is outside the 64-bit range")]
    TotalOutOfRange { total: i128 },

    /// Analyzer configuration could not be parsed.
    #[error("invalid analyzer configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

impl DataProcError {
    /// Builds a [`DataProcError::TypeMismatch`] from the offending value.
    pub fn type_mismatch(field: impl Into<String>, expected: &'static str, found: &Value) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            found: JsonKind::of(found),
        }
    }
}

pub type Result<T> = std::result::Result<T, DataProcError>;

/// Kind of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
