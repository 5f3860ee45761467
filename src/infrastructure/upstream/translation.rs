use crate::domain::shared::errors::DomainError;
use serde_json::Value;

/// Pulls the translated text out of a `translate_a/single` response.
///
/// The payload is nested arrays: `[[["Paris", "Pariz", null, null, 10]], null, "hr", ...]`.
/// The translation is the first string of the first row of the first element.
pub fn extract_translation(payload: &Value) -> Result<String, DomainError> {
    payload
        .get(0)
        .and_then(Value::as_array)
        .and_then(|rows| rows.first())
        .and_then(Value::as_array)
        .and_then(|row| row.first())
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| DomainError::TranslationFailed("unexpected translation payload".into()))
}
