use crate::types::Query;
use serde_json::Value;
use std::fmt::Write as _;

/// Serializer signature injected into route construction.
pub type QueryStringifier = dyn Fn(&Query) -> String + Send + Sync;

/// Default query encoder: `?`-prefixed, `&`-joined `key=value` pairs.
/// Null serializes as a bare key; sequences repeat the key per element.
pub fn stringify_query(query: &Query) -> String {
    let mut pairs: Vec<String> = Vec::with_capacity(query.len());
    for (key, value) in query {
        match value {
            Value::Null => pairs.push(encode(key)),
            Value::Array(items) => {
                for item in items {
                    match item {
                        Value::Null => pairs.push(encode(key)),
                        _ => pairs.push(format!("{}={}", encode(key), encode(&value_text(item)))),
                    }
                }
            }
            _ => pairs.push(format!("{}={}", encode(key), encode(&value_text(value)))),
        }
    }
    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}

/// String form used for query serialization and loose comparison: strings
/// stay as-is, everything else renders through its JSON form.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Percent-encodes everything outside the unreserved set plus `,`.
fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for &byte in text.as_bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b',' => {
                out.push(byte as char)
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}
