use crate::route::query::value_text;
use crate::route::value::{Route, START};
use crate::types::{JsonMap, Query};
use serde_json::Value;
use std::sync::Arc;

/// Exact equivalence between two route snapshots. The start sentinel only
/// ever equals itself, by identity; a trailing slash on either path is
/// ignored. Unless `only_path`, hash and query (and params on the name
/// branch) must also agree.
pub fn is_same_route(a: &Arc<Route>, b: Option<&Arc<Route>>, only_path: bool) -> bool {
    let Some(b) = b else {
        return false;
    };
    if Arc::ptr_eq(a, &START) || Arc::ptr_eq(b, &START) {
        return Arc::ptr_eq(a, b);
    }
    if !a.path.is_empty() && !b.path.is_empty() {
        strip_trailing_slash(&a.path) == strip_trailing_slash(&b.path)
            && (only_path || (a.hash == b.hash && is_object_equal(&a.query, &b.query)))
    } else if let (Some(a_name), Some(b_name)) = (a.name.as_ref(), b.name.as_ref()) {
        a_name == b_name
            && (only_path
                || (a.hash == b.hash
                    && is_object_equal(&a.query, &b.query)
                    && is_object_equal(&a.params, &b.params)))
    } else {
        false
    }
}

/// Prefix inclusion used for active-link highlighting: `current` is within
/// `target` when target's path is a segment prefix of current's, target's
/// hash (if any) matches, and every target query key is present in
/// current. Query values are deliberately not compared.
pub fn is_included_route(current: &Route, target: &Route) -> bool {
    with_trailing_slash(&current.path).starts_with(&with_trailing_slash(&target.path))
        && (target.hash.is_empty() || current.hash == target.hash)
        && query_includes(&current.query, &target.query)
}

fn strip_trailing_slash(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

fn with_trailing_slash(path: &str) -> String {
    format!("{}/", strip_trailing_slash(path))
}

/// Order-independent key-set and value equality with loose coercion:
/// null equals only null, nested maps and sequences compare recursively,
/// everything else compares by string form (`1` equals `"1"`).
fn is_object_equal(a: &JsonMap, b: &JsonMap) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a_keys: Vec<&String> = a.keys().collect();
    let mut b_keys: Vec<&String> = b.keys().collect();
    a_keys.sort();
    b_keys.sort();
    a_keys.iter().zip(b_keys.iter()).all(|(a_key, b_key)| {
        if a_key != b_key {
            return false;
        }
        match (a.get(a_key.as_str()), b.get(b_key.as_str())) {
            (Some(a_val), Some(b_val)) => loose_value_eq(a_val, b_val),
            _ => false,
        }
    })
}

fn loose_value_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::Object(a_map), Value::Object(b_map)) => is_object_equal(a_map, b_map),
        (Value::Array(a_items), Value::Array(b_items)) => {
            a_items.len() == b_items.len()
                && a_items
                    .iter()
                    .zip(b_items)
                    .all(|(a_item, b_item)| loose_value_eq(a_item, b_item))
        }
        _ => value_text(a) == value_text(b),
    }
}

fn query_includes(current: &Query, target: &Query) -> bool {
    target.keys().all(|key| current.contains_key(key))
}
