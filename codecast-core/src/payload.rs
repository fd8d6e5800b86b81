//! Decoding of raw JSON payloads returned by the three sources.
//!
//! Only the top-level shape is validated here. Bad numeric fields inside a
//! well-shaped payload are left for the normalizer to degrade.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{CodecastError, ForecastBundle, LogEntry, SourceKind, Stats};

/// Decode a payload into `T`, classifying failures as `UnexpectedShape` for `kind`.
///
/// # Errors
/// Returns `CodecastError::UnexpectedShape` when the value does not match `T`.
pub fn decode<T: DeserializeOwned>(kind: SourceKind, value: Value) -> Result<T, CodecastError> {
    serde_json::from_value(value).map_err(|e| CodecastError::unexpected_shape(kind, e.to_string()))
}

/// Decode a raw body string, classifying both syntax and shape errors as `UnexpectedShape`.
///
/// # Errors
/// Returns `CodecastError::UnexpectedShape` when the body is not JSON or has the wrong shape.
pub fn decode_str<T: DeserializeOwned>(kind: SourceKind, body: &str) -> Result<T, CodecastError> {
    serde_json::from_str(body).map_err(|e| CodecastError::unexpected_shape(kind, e.to_string()))
}

/// Decode a stats payload: `{ totalHours, avgPerDay, entries }`.
///
/// # Errors
/// Returns `UnexpectedShape` unless the payload is an object of that shape.
pub fn decode_stats(value: Value) -> Result<Stats, CodecastError> {
    if !value.is_object() {
        return Err(CodecastError::unexpected_shape(
            SourceKind::Stats,
            format!("expected an object, got {}", type_name(&value)),
        ));
    }
    decode(SourceKind::Stats, value)
}

/// Decode a forecast payload: `{ forecast: [...], confidence? }`.
///
/// # Errors
/// Returns `UnexpectedShape` unless the payload is an object of that shape.
pub fn decode_forecast(value: Value) -> Result<ForecastBundle, CodecastError> {
    if !value.is_object() {
        return Err(CodecastError::unexpected_shape(
            SourceKind::Forecast,
            format!("expected an object, got {}", type_name(&value)),
        ));
    }
    decode(SourceKind::Forecast, value)
}

/// Decode a logs payload: an array of `{ date, duration }` records.
///
/// # Errors
/// Returns `UnexpectedShape` unless the payload is an array of objects.
pub fn decode_logs(value: Value) -> Result<Vec<LogEntry>, CodecastError> {
    if !value.is_array() {
        return Err(CodecastError::unexpected_shape(
            SourceKind::Logs,
            format!("expected an array, got {}", type_name(&value)),
        ));
    }
    decode(SourceKind::Logs, value)
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
