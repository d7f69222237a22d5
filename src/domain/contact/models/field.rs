use serde_json::Value;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FieldError {
    #[error("Field `{0}` is missing.")]
    Missing(&'static str),
    #[error("Field `{0}` cannot be empty or whitespace.")]
    EmptyOrWhitespace(&'static str),
}

/// Renders a raw JSON field as text.
///
/// Strings are taken as they are, numbers and booleans by their textual form.
/// `null`, arrays and objects count as absent.
pub fn coerce_to_string(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Returns the trimmed text of a required field.
pub fn required(field: &'static str, value: Option<Value>) -> Result<String, FieldError> {
    let text = coerce_to_string(value).ok_or(FieldError::Missing(field))?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FieldError::EmptyOrWhitespace(field));
    }
    Ok(trimmed.to_string())
}
