//! State-free scalar coercions.
//!
//! The tree core never coerces: a typed read of the wrong payload is a
//! hard [`TypeMismatch`](crate::ConfigError::TypeMismatch). Callers who
//! want the lenient scalar rules opt in through these free functions.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoerceError {
    #[error("{actual} value cannot be coerced to {expected}")]
    Unsupported {
        expected: &'static str,
        actual: &'static str,
    },
}

/// Descriptive name of a JSON value's variant, used in error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn unsupported(expected: &'static str, value: &Value) -> CoerceError {
    CoerceError::Unsupported {
        expected,
        actual: json_type_name(value),
    }
}

/// Coerce a scalar to a boolean.
///
/// Booleans pass through. A number maps to the parity of its truncated
/// integer part (even is `true`). A string must be one of the tokens
/// `true`/`t`/`yes`/`y` or `false`/`f`/`no`/`n`, case-insensitive.
pub fn bool_from_value(value: &Value) -> Result<bool, CoerceError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => {
            let int = n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .ok_or_else(|| unsupported("boolean", value))?;
            Ok(int % 2 == 0)
        }
        Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "true" | "t" | "yes" | "y" => Ok(true),
            "false" | "f" | "no" | "n" => Ok(false),
            _ => Err(unsupported("boolean", value)),
        },
        other => Err(unsupported("boolean", other)),
    }
}

/// Coerce a scalar to a character: a number is taken as a code point,
/// a string must lowercase to exactly one character.
pub fn char_from_value(value: &Value) -> Result<char, CoerceError> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|code| u32::try_from(code).ok())
            .and_then(char::from_u32)
            .ok_or_else(|| unsupported("character", value)),
        Value::String(s) => {
            let lowered = s.to_lowercase();
            let mut chars = lowered.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(unsupported("character", value)),
            }
        }
        other => Err(unsupported("character", other)),
    }
}

/// Coerce a scalar to a list of values. Only arrays qualify.
pub fn list_from_value(value: &Value) -> Result<Vec<Value>, CoerceError> {
    match value {
        Value::Array(items) => Ok(items.clone()),
        other => Err(unsupported("list", other)),
    }
}
