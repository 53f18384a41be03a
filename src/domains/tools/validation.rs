//! Boundary validation of tool arguments.
//!
//! Argument objects are decoded with serde into the tool's parameter struct,
//! which rejects unknown fields and wrong types. The few constraints serde
//! cannot express (lower bounds, non-empty strings) are checked afterwards
//! with the helpers below. Every failure names the offending field.

use std::fmt::Display;

use rmcp::model::JsonObject;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Field name reported when the failure concerns the object as a whole.
const ROOT_FIELD: &str = "arguments";

/// A tool argument that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {constraint}")]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,
    /// Human readable description of the violated constraint.
    pub constraint: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            constraint: constraint.into(),
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Decode an argument object into `T`.
///
/// Explicit `null` is accepted wherever the field is optional.
pub fn decode<T: DeserializeOwned>(arguments: &JsonObject) -> ValidationResult<T> {
    serde_path_to_error::deserialize(Value::Object(arguments.clone())).map_err(|err| {
        let field = match err.path().to_string() {
            path if path == "." => ROOT_FIELD.to_string(),
            path => path,
        };
        ValidationError::new(field, err.into_inner().to_string())
    })
}

/// Reject `value` below `min`.
pub fn at_least<T: PartialOrd + Display>(field: &str, value: T, min: T) -> ValidationResult<T> {
    if value < min {
        return Err(ValidationError::new(
            field,
            format!("must be greater than or equal to {min}"),
        ));
    }
    Ok(value)
}

/// Reject `value` above `max`.
pub fn at_most<T: PartialOrd + Display>(field: &str, value: T, max: T) -> ValidationResult<T> {
    if value > max {
        return Err(ValidationError::new(
            field,
            format!("must be less than or equal to {max}"),
        ));
    }
    Ok(value)
}

pub fn non_empty(field: &str, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(())
}
