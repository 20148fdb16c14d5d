use crate::pattern::CompiledPattern;
use crate::registry::{GuardHook, RedirectTarget};
use crate::types::{Component, JsonMap};
use hashbrown::HashMap;
use serde_json::Value;
use std::sync::Weak;

/// Compiled form of one route configuration node. The table owns every
/// record; `parent` is navigation-only linkage.
#[derive(Debug)]
pub struct RouteRecord {
    /// Normalized absolute path; unique key within the path map.
    pub path: String,
    pub regex: CompiledPattern,
    /// Content keyed by view-slot name.
    pub components: HashMap<String, Component>,
    pub alias: Vec<String>,
    pub name: Option<String>,
    /// Non-owning back-reference to the owning record.
    pub parent: Option<Weak<RouteRecord>>,
    /// Canonical path to report as matched when this record was
    /// synthesized from an alias.
    pub match_as: Option<String>,
    pub redirect: Option<RedirectTarget>,
    pub before_enter: Option<GuardHook>,
    pub meta: JsonMap,
    pub props: HashMap<String, Value>,
}
