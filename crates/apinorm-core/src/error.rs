//! Error types for the Apinorm core library
//!
//! This module defines the error handling system for normalization,
//! using thiserror for ergonomic error definitions.
//!
//! Copyright (c) 2025 Apinorm Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;
use thiserror::Error;

/// Main error type for normalization operations
#[derive(Error, Debug)]
pub enum Error {
    /// A value normalizer received a value of the wrong JSON shape
    ///
    /// The engine never pre-validates value shapes; the normalizer that
    /// needs a particular shape detects and surfaces the mismatch.
    #[error("value shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A model could not be constructed from a domain value
    #[error("cannot construct `{type_name}`: {message}")]
    Construction {
        type_name: &'static str,
        message: String,
    },

    /// A model rejected a value assigned to one of its properties
    #[error("cannot assign `{property}` on `{type_name}`: {message}")]
    Assignment {
        type_name: &'static str,
        property: String,
        message: String,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// The JSON shape of a value, as used in shape-mismatch errors
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
