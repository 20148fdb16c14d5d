use crate::pattern::PatternOptions;
use crate::route::Route;
use crate::types::{Component, JsonMap};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Additional paths resolving to the same content as the canonical route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AliasDef {
    One(String),
    Many(Vec<String>),
}

impl AliasDef {
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::One(alias) => std::slice::from_ref(alias),
            Self::Many(aliases) => aliases,
        }
    }
}

impl From<&str> for AliasDef {
    fn from(alias: &str) -> Self {
        Self::One(alias.to_string())
    }
}

impl From<String> for AliasDef {
    fn from(alias: String) -> Self {
        Self::One(alias)
    }
}

impl From<Vec<String>> for AliasDef {
    fn from(aliases: Vec<String>) -> Self {
        Self::Many(aliases)
    }
}

impl From<Vec<&str>> for AliasDef {
    fn from(aliases: Vec<&str>) -> Self {
        Self::Many(aliases.into_iter().map(str::to_string).collect())
    }
}

/// Redirect target carried through to the navigation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedirectTarget {
    Path(String),
    Name(String),
}

/// Per-route guard hook. The table stores it untouched; the navigation
/// engine invokes it during transitions.
#[derive(Clone)]
pub struct GuardHook(Arc<dyn Fn(&Route, &Route) -> bool + Send + Sync>);

impl GuardHook {
    pub fn new(hook: impl Fn(&Route, &Route) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(hook))
    }

    pub fn call(&self, to: &Route, from: &Route) -> bool {
        (self.0)(to, from)
    }
}

impl fmt::Debug for GuardHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GuardHook")
    }
}

/// Externally authored declarative description of one route node.
#[derive(Debug, Clone, Default)]
pub struct RouteConfig {
    pub path: String,
    pub name: Option<String>,
    /// Singular content, placed under the `default` slot.
    pub component: Option<Component>,
    /// Content keyed by view-slot name; takes precedence over `component`.
    pub components: Option<HashMap<String, Component>>,
    pub children: Vec<RouteConfig>,
    pub alias: Option<AliasDef>,
    pub redirect: Option<RedirectTarget>,
    pub before_enter: Option<GuardHook>,
    pub meta: JsonMap,
    pub props: Option<Value>,
    pub pattern_options: Option<PatternOptions>,
    /// Overrides `PatternOptions::sensitive` for this route only.
    pub case_sensitive: Option<bool>,
}

impl RouteConfig {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn component(mut self, component: Component) -> Self {
        self.component = Some(component);
        self
    }

    pub fn components<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Component)>,
    {
        self.components = Some(entries.into_iter().collect());
        self
    }

    pub fn child(mut self, child: RouteConfig) -> Self {
        self.children.push(child);
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = RouteConfig>,
    {
        self.children = children.into_iter().collect();
        self
    }

    pub fn alias(mut self, alias: impl Into<AliasDef>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn redirect(mut self, target: RedirectTarget) -> Self {
        self.redirect = Some(target);
        self
    }

    pub fn before_enter(
        mut self,
        hook: impl Fn(&Route, &Route) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.before_enter = Some(GuardHook::new(hook));
        self
    }

    pub fn meta(mut self, meta: JsonMap) -> Self {
        self.meta = meta;
        self
    }

    pub fn props(mut self, props: Value) -> Self {
        self.props = Some(props);
        self
    }

    pub fn pattern_options(mut self, options: PatternOptions) -> Self {
        self.pattern_options = Some(options);
        self
    }

    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.case_sensitive = Some(value);
        self
    }
}
