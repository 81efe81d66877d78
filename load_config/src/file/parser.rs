//! JSON-with-comments parsing for configuration files.
//!
//! Files are read with `json5`, which accepts `//` and `/* */` comments and
//! reports failures against the original text.

use camino::Utf8Path;
use serde_json::{Map, Value};

use crate::{LoadConfigError, LoadConfigResult};

/// Parse `bytes` as a JSON object, tolerating `//` and `/* */` comments.
///
/// # Errors
///
/// Returns [`LoadConfigError::Syntax`] when the bytes are not UTF-8, contain
/// an unterminated block comment, are not valid JSON, or do not hold an
/// object at the top level.
pub(super) fn parse_config(path: &Utf8Path, bytes: &[u8]) -> LoadConfigResult<Map<String, Value>> {
    let text = std::str::from_utf8(bytes).map_err(|err| {
        let (line, column) = location(bytes, err.valid_up_to());
        LoadConfigError::syntax(path, line, column, format!("invalid UTF-8: {err}"))
    })?;
    let value: Value = json5::from_str(text).map_err(|err| LoadConfigError::from_json5(path, err))?;
    match value {
        Value::Object(map) => Ok(map),
        other => {
            let offset = text.len() - text.trim_start().len();
            let (line, column) = location(bytes, offset);
            Err(LoadConfigError::syntax(
                path,
                line,
                column,
                format!("expected a JSON object at the top level, found {}", kind(&other)),
            ))
        }
    }
}

/// One-based line and column of byte `offset`.
fn location(bytes: &[u8], offset: usize) -> (usize, usize) {
    let before = bytes.get(..offset).unwrap_or(bytes);
    let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = before
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |pos| pos + 1);
    (line, offset.saturating_sub(line_start) + 1)
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
