use crate::errors::RouterResult;
use crate::path::{clean_path, normalize_route_path};
use crate::pattern::compile_route_pattern;
use crate::registry::{RegistryError, RouteConfig, RouteRecord};
use crate::types::{Component, DEFAULT_SLOT, Params};
use hashbrown::HashMap;
use serde_json::Value;
use std::sync::Arc;

const WILDCARD_PATH: &str = "*";

/// The compiled routing table: an ordered pattern list plus path and name
/// lookups. Position in `path_list` is match priority; catch-all entries
/// always sort last.
#[derive(Debug, Default)]
pub struct RouteMap {
    pub path_list: Vec<String>,
    pub path_map: HashMap<String, Arc<RouteRecord>>,
    pub name_map: HashMap<String, Arc<RouteRecord>>,
}

impl RouteMap {
    pub fn build(routes: &[RouteConfig]) -> RouterResult<Self> {
        let mut map = Self::default();
        map.add_routes(routes, None)?;
        Ok(map)
    }

    /// Registers additional routes against the existing tables. Paths
    /// already present are skipped, so repeated augmentation is
    /// idempotent.
    #[tracing::instrument(level = "debug", skip_all, fields(count = routes.len()))]
    pub fn add_routes(
        &mut self,
        routes: &[RouteConfig],
        parent: Option<&Arc<RouteRecord>>,
    ) -> RouterResult<()> {
        for route in routes {
            self.add_route_record(route, parent, None)?;
        }
        self.finalize();
        Ok(())
    }

    fn add_route_record(
        &mut self,
        route: &RouteConfig,
        parent: Option<&Arc<RouteRecord>>,
        match_as: Option<String>,
    ) -> RouterResult<()> {
        if let Some(component) = route.component.as_ref()
            && component.is_string()
        {
            return Err(RegistryError::ComponentAsIdentifier {
                path: route.path.clone(),
            }
            .into());
        }
        if !route.path.is_ascii() {
            tracing::warn!(
                path = %route.path,
                "route path contains unencoded characters; encode static segments before registering"
            );
        }

        let mut pattern_options = route.pattern_options.unwrap_or_default();
        if let Some(case_sensitive) = route.case_sensitive {
            pattern_options.sensitive = case_sensitive;
        }
        let parent_path = parent.map(|record| record.path.as_str());
        let path = normalize_route_path(&route.path, parent_path, pattern_options.strict);
        let regex = compile_route_pattern(&path, &pattern_options)?;

        let record = Arc::new(RouteRecord {
            path,
            regex,
            components: slot_components(route),
            alias: route
                .alias
                .as_ref()
                .map(|alias| alias.as_slice().to_vec())
                .unwrap_or_default(),
            name: route.name.clone(),
            parent: parent.map(Arc::downgrade),
            match_as: match_as.clone(),
            redirect: route.redirect.clone(),
            before_enter: route.before_enter.clone(),
            meta: route.meta.clone(),
            props: slot_props(route),
        });

        if !route.children.is_empty() {
            // Navigating to a named route renders the route itself, never
            // its default child; flag configs where that surprises.
            if route.name.is_some()
                && route.redirect.is_none()
                && route
                    .children
                    .iter()
                    .any(|child| matches!(child.path.as_str(), "" | "/"))
            {
                tracing::warn!(
                    name = route.name.as_deref().unwrap_or_default(),
                    "named route has a default child route; name the default child instead and navigate to that"
                );
            }
            for child in &route.children {
                let child_match_as = match_as
                    .as_ref()
                    .map(|prefix| clean_path(&format!("{prefix}/{}", child.path)));
                self.add_route_record(child, Some(&record), child_match_as)?;
            }
        }

        if !self.path_map.contains_key(&record.path) {
            self.path_list.push(record.path.clone());
            self.path_map.insert(record.path.clone(), Arc::clone(&record));
        }

        if let Some(aliases) = route.alias.as_ref() {
            for alias in aliases.as_slice() {
                if alias == &route.path {
                    tracing::warn!(
                        path = %route.path,
                        "alias has the same value as the path and will be ignored"
                    );
                    continue;
                }
                let alias_route = RouteConfig {
                    path: alias.clone(),
                    children: route.children.clone(),
                    ..RouteConfig::default()
                };
                let alias_match_as = if record.path.is_empty() {
                    "/".to_string()
                } else {
                    record.path.clone()
                };
                self.add_route_record(&alias_route, parent, Some(alias_match_as))?;
            }
        }

        if let Some(name) = route.name.as_ref() {
            if !self.name_map.contains_key(name) {
                self.name_map.insert(name.clone(), Arc::clone(&record));
            } else if match_as.is_none() {
                tracing::warn!(
                    name = %name,
                    path = %record.path,
                    "duplicate named routes definition; keeping the first registration"
                );
            }
        }

        Ok(())
    }

    /// Moves every catch-all entry behind the rest of the pattern list,
    /// preserving relative order on both sides, then audits the list for
    /// paths missing their leading slash.
    fn finalize(&mut self) {
        let (wild, rest): (Vec<String>, Vec<String>) = self
            .path_list
            .drain(..)
            .partition(|path| path == WILDCARD_PATH);
        self.path_list = rest;
        self.path_list.extend(wild);

        for path in &self.path_list {
            if !path.is_empty() && !path.starts_with('/') && !path.starts_with('*') {
                tracing::warn!(path = %path, "non-nested routes must include a leading slash");
            }
        }
    }

    /// First match over the priority-ordered pattern list. Redirects and
    /// guards are the navigation engine's concern; this only locates the
    /// record and extracts its parameters.
    pub fn match_path(&self, path: &str) -> Option<(Arc<RouteRecord>, Params)> {
        for candidate in &self.path_list {
            let Some(record) = self.path_map.get(candidate) else {
                continue;
            };
            if let Some(params) = record.regex.captures(path) {
                return Some((Arc::clone(record), params));
            }
        }
        None
    }
}

fn slot_components(route: &RouteConfig) -> HashMap<String, Component> {
    if let Some(components) = route.components.as_ref() {
        return components.clone();
    }
    let mut slots = HashMap::new();
    if let Some(component) = route.component.as_ref() {
        slots.insert(DEFAULT_SLOT.to_string(), component.clone());
    }
    slots
}

fn slot_props(route: &RouteConfig) -> HashMap<String, Value> {
    let Some(props) = route.props.as_ref() else {
        return HashMap::new();
    };
    if route.components.is_some() {
        // map form: props are already keyed by slot
        match props {
            Value::Object(map) => map
                .iter()
                .map(|(slot, value)| (slot.clone(), value.clone()))
                .collect(),
            _ => HashMap::new(),
        }
    } else {
        let mut slots = HashMap::new();
        slots.insert(DEFAULT_SLOT.to_string(), props.clone());
        slots
    }
}
