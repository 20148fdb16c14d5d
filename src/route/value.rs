use crate::registry::RouteRecord;
use crate::route::query::{QueryStringifier, stringify_query};
use crate::types::{JsonMap, Params, Query};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock, Weak};

/// A navigation target before resolution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub name: Option<String>,
    pub path: Option<String>,
    /// Empty means no hash fragment.
    pub hash: String,
    pub query: Query,
    pub params: Params,
}

impl Location {
    pub fn path(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }

    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }
}

/// Immutable snapshot of a resolved navigation target. Constructed once
/// per navigation attempt, shared behind `Arc`, never mutated.
#[derive(Debug)]
pub struct Route {
    pub name: Option<String>,
    pub meta: JsonMap,
    pub path: String,
    pub hash: String,
    pub query: Query,
    pub params: Params,
    /// Serialized path + query + hash.
    pub full_path: String,
    /// Ancestor chain of the resolved record, root first; empty for the
    /// start sentinel.
    pub matched: Vec<Arc<RouteRecord>>,
    pub redirected_from: Option<String>,
}

/// The initial state before any navigation has occurred. Compared by
/// identity: no structurally equal route ever equals the sentinel.
pub static START: LazyLock<Arc<Route>> =
    LazyLock::new(|| create_route(None, &Location::path("/"), None, None));

/// Builds the immutable route snapshot for a resolved record and target
/// location. The location's query is cloned so the snapshot stays
/// independent of the caller's data.
pub fn create_route(
    record: Option<&Arc<RouteRecord>>,
    location: &Location,
    redirected_from: Option<&Location>,
    stringify: Option<&QueryStringifier>,
) -> Arc<Route> {
    let name = location
        .name
        .clone()
        .or_else(|| record.and_then(|rec| rec.name.clone()));
    Arc::new(Route {
        name,
        meta: record.map(|rec| rec.meta.clone()).unwrap_or_default(),
        path: path_or_root(location.path.as_deref()).to_string(),
        hash: location.hash.clone(),
        query: location.query.clone(),
        params: location.params.clone(),
        full_path: full_path_of(location, stringify),
        matched: record.map(format_match).unwrap_or_default(),
        redirected_from: redirected_from.map(|from| full_path_of(from, stringify)),
    })
}

/// Root-first ancestor chain reconstructed from parent back-references.
fn format_match(record: &Arc<RouteRecord>) -> Vec<Arc<RouteRecord>> {
    let mut chain = Vec::new();
    let mut current = Some(Arc::clone(record));
    while let Some(rec) = current {
        current = rec.parent.as_ref().and_then(Weak::upgrade);
        chain.push(rec);
    }
    chain.reverse();
    chain
}

fn full_path_of(location: &Location, stringify: Option<&QueryStringifier>) -> String {
    let path = path_or_root(location.path.as_deref());
    let query = match stringify {
        Some(serializer) => serializer(&location.query),
        None => stringify_query(&location.query),
    };
    format!("{path}{query}{}", location.hash)
}

fn path_or_root(path: Option<&str>) -> &str {
    match path {
        Some(path) if !path.is_empty() => path,
        _ => "/",
    }
}
