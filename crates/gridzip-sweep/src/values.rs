use gridzip_core::{ErrorInfo, SweepError};
use serde_json::Value;

/// Renders a scalar leaf as the bare text used inside an assignment string.
///
/// Strings stay unquoted; booleans and numbers use their display form.
/// Composite values fall back to their compact JSON encoding.
pub(crate) fn render_value(value: &Value) -> String {
    match value {
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Normalizes one parameter's raw value into an ordered sequence of string
/// encoded values.
///
/// Accepted shapes: boolean, number, string (comma strings split into
/// several values) and sequence. Anything else is a fatal value error
/// naming the offending key.
pub fn parse_values(key: &str, raw: &Value) -> Result<Vec<String>, SweepError> {
    match raw {
        Value::Bool(flag) => Ok(vec![flag.to_string()]),
        Value::Number(number) => Ok(vec![number.to_string()]),
        Value::String(text) => Ok(split_inline_list(text)),
        Value::Array(items) => Ok(items.iter().map(render_value).collect()),
        other => Err(SweepError::Value(
            ErrorInfo::new("value-parse", "cannot normalize raw parameter value")
                .with_context("key", key)
                .with_context("value", other.to_string())
                .with_hint("use a scalar, a comma separated string or a sequence"),
        )),
    }
}

/// Splits a comma string into trimmed values, stripping one enclosing
/// bracket pair when present. Strings without commas pass through unchanged.
fn split_inline_list(text: &str) -> Vec<String> {
    if !text.contains(',') {
        return vec![text.to_string()];
    }
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);
    inner
        .split(',')
        .map(|piece| piece.trim().to_string())
        .collect()
}
