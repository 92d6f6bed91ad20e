//! Strict JSON parsing into a value tree.
//!
//! Embedded `//` and `/* */` comments are stripped before parsing; duplicate
//! object keys resolve last-one-wins. Numbers and strings are never re-typed
//! on the way in: temporal-looking strings pass through verbatim.

use std::borrow::Cow;

use thiserror::Error;

use msgpack_bridge_base64::from_base64;
use msgpack_bridge_codec::{Ext, Value};

use super::{BIN_URI_START, EXT_URI_START};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses JSON text into a value tree. No partial tree is produced on
/// failure.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    let stripped = strip_comments(input);
    let json: serde_json::Value = serde_json::from_str(stripped.as_ref())?;
    Ok(from_json(json))
}

fn from_json(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Nil,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if let Some(u) = n.as_u64() {
                Value::UInt(u)
            } else {
                // Fractional or exponent form; JSON has one float width.
                Value::F64(n.as_f64().unwrap_or(0.0))
            }
        }
        serde_json::Value::String(s) => unwrap_data_uri(s),
        serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(from_json).collect()),
        serde_json::Value::Object(obj) => Value::Map(
            obj.into_iter()
                .map(|(k, v)| (Value::Str(k), from_json(v)))
                .collect(),
        ),
    }
}

/// Recovers binary and extension values from their data-URI projection; any
/// other string stays a string.
fn unwrap_data_uri(s: String) -> Value {
    if let Some(b64) = s.strip_prefix(BIN_URI_START) {
        if let Ok(bytes) = from_base64(b64) {
            return Value::Bin(bytes);
        }
    } else if let Some(rest) = s.strip_prefix(EXT_URI_START) {
        if let Some((tag_str, b64)) = rest.split_once(',') {
            if let Ok(tag) = tag_str.parse::<i8>() {
                if let Ok(bytes) = from_base64(b64) {
                    return Value::Ext(Ext::new(tag, bytes));
                }
            }
        }
    }
    Value::Str(s)
}

/// Removes `//` line and `/* */` block comments outside string literals.
fn strip_comments(input: &str) -> Cow<'_, str> {
    if !input.contains('/') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => {
                in_string = true;
                out.push('"');
            }
            '/' if chars.peek() == Some(&'/') => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut star = false;
                for c in chars.by_ref() {
                    if star && c == '/' {
                        break;
                    }
                    star = c == '*';
                }
            }
            _ => out.push(c),
        }
    }

    Cow::Owned(out)
}
