use serde_json::{Value, json};
use wayfarer_router_rs::registry::RegistryError;
use wayfarer_router_rs::{RouteConfig, RouteMap, RouterError};

fn meta_of(value: Value) -> serde_json::Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    }
}

#[test]
fn route_map_when_paths_registered_then_list_and_map_agree() {
    let map = RouteMap::build(&[
        RouteConfig::new("/a").component(json!({"view": "A"})),
        RouteConfig::new("/b").child(RouteConfig::new("c")),
    ])
    .expect("routes should build");

    assert_eq!(map.path_list.len(), map.path_map.len());
    for path in &map.path_list {
        assert!(map.path_map.contains_key(path), "missing record for {path}");
        assert_eq!(map.path_list.iter().filter(|p| *p == path).count(), 1);
    }
    for path in map.path_map.keys() {
        assert!(map.path_list.contains(path), "{path} absent from list");
    }
}

#[test]
fn route_map_when_duplicate_path_declared_then_first_registration_wins() {
    let map = RouteMap::build(&[
        RouteConfig::new("/a").meta(meta_of(json!({"order": "first"}))),
        RouteConfig::new("/a").meta(meta_of(json!({"order": "second"}))),
    ])
    .expect("routes should build");

    assert_eq!(map.path_list, vec!["/a".to_string()]);
    let record = map.path_map.get("/a").expect("record should exist");
    assert_eq!(record.meta.get("order"), Some(&json!("first")));
}

#[test]
fn route_map_when_wildcard_declared_first_then_it_sorts_last() {
    let map = RouteMap::build(&[
        RouteConfig::new("*"),
        RouteConfig::new("/a"),
        RouteConfig::new("/b"),
    ])
    .expect("routes should build");

    assert_eq!(map.path_list, vec!["/a", "/b", "*"]);
}

#[test]
fn route_map_when_children_nested_then_child_registers_before_parent() {
    let map = RouteMap::build(&[RouteConfig::new("/parent").child(RouteConfig::new("child"))])
        .expect("routes should build");

    assert_eq!(map.path_list, vec!["/parent/child", "/parent"]);

    let child = map.path_map.get("/parent/child").expect("child record");
    let parent = child
        .parent
        .as_ref()
        .and_then(|weak| weak.upgrade())
        .expect("parent link should resolve");
    assert_eq!(parent.path, "/parent");
}

#[test]
fn route_map_when_augmented_then_existing_paths_are_kept() {
    let mut map = RouteMap::build(&[RouteConfig::new("/a")]).expect("routes should build");

    map.add_routes(&[RouteConfig::new("/a"), RouteConfig::new("/b")], None)
        .expect("augmentation should succeed");

    assert_eq!(map.path_list, vec!["/a", "/b"]);
}

#[test]
fn route_map_when_component_is_string_id_then_build_fails() {
    let err = RouteMap::build(&[RouteConfig::new("/a").component(json!("UserView"))]);

    match err.expect_err("string component id must be rejected") {
        RouterError::Registry(RegistryError::ComponentAsIdentifier { path }) => {
            assert_eq!(path, "/a")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn route_map_when_named_route_registered_then_name_resolves() {
    let map = RouteMap::build(&[RouteConfig::new("/users").name("users")])
        .expect("routes should build");

    let record = map.name_map.get("users").expect("name should resolve");
    assert_eq!(record.path, "/users");
}

#[test]
fn route_map_when_duplicate_name_then_first_registration_wins() {
    let map = RouteMap::build(&[
        RouteConfig::new("/a").name("dup"),
        RouteConfig::new("/b").name("dup"),
    ])
    .expect("routes should build");

    let record = map.name_map.get("dup").expect("name should resolve");
    assert_eq!(record.path, "/a");
}

#[test]
fn route_map_when_matching_then_declared_routes_win_over_wildcard() {
    let map = RouteMap::build(&[RouteConfig::new("/user/:id"), RouteConfig::new("*")])
        .expect("routes should build");

    let (record, params) = map.match_path("/user/7").expect("param route should match");
    assert_eq!(record.path, "/user/:id");
    assert_eq!(params.get("id"), Some(&json!("7")));

    let (fallback, params) = map.match_path("/nope").expect("wildcard should match");
    assert_eq!(fallback.path, "*");
    assert_eq!(params.get("pathMatch"), Some(&json!("/nope")));
}

#[test]
fn route_map_when_default_child_declared_then_it_matches_parent_path() {
    let map = RouteMap::build(&[RouteConfig::new("/a").child(RouteConfig::new(""))])
        .expect("routes should build");

    assert!(map.path_map.contains_key("/a/"));
    let (record, _) = map.match_path("/a").expect("default child should match");
    assert_eq!(record.path, "/a/");
}

#[test]
fn route_map_when_case_sensitive_route_then_override_applies() {
    let map = RouteMap::build(&[RouteConfig::new("/Case").case_sensitive(true)])
        .expect("routes should build");

    assert!(map.match_path("/Case").is_some());
    assert!(map.match_path("/case").is_none());
}

#[test]
fn route_map_when_single_component_then_default_slot_assigned() {
    let map = RouteMap::build(&[
        RouteConfig::new("/a")
            .component(json!({"view": "A"}))
            .props(json!({"kind": "panel"})),
    ])
    .expect("routes should build");

    let record = map.path_map.get("/a").expect("record should exist");
    assert_eq!(record.components.get("default"), Some(&json!({"view": "A"})));
    assert_eq!(record.props.get("default"), Some(&json!({"kind": "panel"})));
}

#[test]
fn route_map_when_components_map_given_then_slots_kept_as_declared() {
    let map = RouteMap::build(&[
        RouteConfig::new("/a")
            .components([
                ("default".to_string(), json!({"view": "Main"})),
                ("sidebar".to_string(), json!({"view": "Side"})),
            ])
            .props(json!({"sidebar": {"wide": true}})),
    ])
    .expect("routes should build");

    let record = map.path_map.get("/a").expect("record should exist");
    assert_eq!(record.components.len(), 2);
    assert_eq!(record.components.get("sidebar"), Some(&json!({"view": "Side"})));
    assert_eq!(record.props.get("sidebar"), Some(&json!({"wide": true})));
    assert!(record.props.get("default").is_none());
}
