//! Parsing and printing single configuration values on the command line.

use toml::Value;

/// Parses `raw` as a TOML value, falling back to a plain string.
pub fn parse(raw: &str) -> Value {
    let document = format!("value = {}", raw);
    match document.parse::<toml::Table>() {
        Ok(mut table) if table.len() == 1 => table
            .remove("value")
            .unwrap_or_else(|| Value::String(raw.to_string())),
        _ => Value::String(raw.to_string()),
    }
}

/// Formats a value for output: strings bare, everything else as TOML.
pub fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
