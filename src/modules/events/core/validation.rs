// Input rules shared by the event use cases.
//
// Shape errors (wrong JSON types, missing non-optional fields) are rejected by
// the extractors before these rules run.

use std::ops::RangeInclusive;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("El campo '{0}' es obligatorio")]
    MissingField(&'static str),

    #[error("El campo '{0}' no puede ser nulo")]
    NullField(&'static str),

    #[error("El campo '{0}' no puede estar vacío")]
    EmptyField(&'static str),

    #[error("El parámetro '{name}' debe estar entre {min} y {max}")]
    OutOfRange {
        name: &'static str,
        min: u64,
        max: u64,
    },
}

/// A field that must be present with a non-empty value.
pub fn required(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// A patch field that may be omitted but not set to null.
pub fn not_null(
    field: &'static str,
    value: Option<Option<String>>,
) -> Result<Option<String>, ValidationError> {
    match value {
        Some(None) => Err(ValidationError::NullField(field)),
        Some(Some(value)) => Ok(Some(value)),
        None => Ok(None),
    }
}

pub fn not_empty(field: &'static str, value: Option<String>) -> Result<Option<String>, ValidationError> {
    match value {
        Some(value) if value.is_empty() => Err(ValidationError::EmptyField(field)),
        other => Ok(other),
    }
}

pub fn bounded(
    name: &'static str,
    value: u64,
    range: RangeInclusive<u64>,
) -> Result<u64, ValidationError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange {
            name,
            min: *range.start(),
            max: *range.end(),
        })
    }
}
