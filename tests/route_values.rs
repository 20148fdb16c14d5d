use serde_json::{Value, json};
use wayfarer_router_rs::{Location, RouteConfig, RouteMap, START, create_route};

fn query_of(value: Value) -> serde_json::Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    }
}

#[test]
fn route_when_created_with_defaults_then_root_path() {
    let route = create_route(None, &Location::default(), None, None);

    assert_eq!(route.path, "/");
    assert_eq!(route.full_path, "/");
    assert_eq!(route.hash, "");
    assert!(route.matched.is_empty());
    assert!(route.name.is_none());
}

#[test]
fn route_when_created_then_full_path_joins_query_and_hash() {
    let location = Location::path("/search")
        .with_query(query_of(json!({"q": "rust", "page": 2})))
        .with_hash("#results");
    let route = create_route(None, &location, None, None);

    assert_eq!(route.full_path, "/search?page=2&q=rust#results");
}

#[test]
fn route_when_record_matched_then_chain_is_root_first() {
    let map = RouteMap::build(&[RouteConfig::new("/parent").child(RouteConfig::new("child"))])
        .expect("routes should build");
    let record = map.path_map.get("/parent/child").expect("child record");

    let route = create_route(Some(record), &Location::path("/parent/child"), None, None);

    let chain: Vec<&str> = route.matched.iter().map(|rec| rec.path.as_str()).collect();
    assert_eq!(chain, vec!["/parent", "/parent/child"]);
}

#[test]
fn route_when_location_has_no_name_then_record_name_is_used() {
    let map = RouteMap::build(&[RouteConfig::new("/users").name("users")])
        .expect("routes should build");
    let record = map.path_map.get("/users").expect("record should exist");

    let route = create_route(Some(record), &Location::path("/users"), None, None);
    assert_eq!(route.name.as_deref(), Some("users"));

    let named = create_route(Some(record), &Location::named("override"), None, None);
    assert_eq!(named.name.as_deref(), Some("override"));
}

#[test]
fn route_when_record_has_meta_then_it_is_carried_over() {
    let map = RouteMap::build(&[
        RouteConfig::new("/admin").meta(query_of(json!({"requires_auth": true}))),
    ])
    .expect("routes should build");
    let record = map.path_map.get("/admin").expect("record should exist");

    let route = create_route(Some(record), &Location::path("/admin"), None, None);
    assert_eq!(route.meta.get("requires_auth"), Some(&json!(true)));
}

#[test]
fn route_when_redirected_then_source_full_path_is_recorded() {
    let from = Location::path("/old").with_query(query_of(json!({"ref": "mail"})));
    let route = create_route(None, &Location::path("/new"), Some(&from), None);

    assert_eq!(route.redirected_from.as_deref(), Some("/old?ref=mail"));
}

#[test]
fn route_when_custom_serializer_injected_then_it_is_used() {
    let location = Location::path("/p").with_query(query_of(json!({"a": "1"})));
    let stringify = |_: &serde_json::Map<String, Value>| "?custom".to_string();

    let route = create_route(None, &location, None, Some(&stringify));

    assert_eq!(route.full_path, "/p?custom");
}

#[test]
fn route_when_query_cloned_then_independent_of_location() {
    let mut location = Location::path("/p").with_query(query_of(json!({"a": "1"})));
    let route = create_route(None, &location, None, None);

    location.query.insert("b".to_string(), json!("2"));

    assert_eq!(route.query.len(), 1);
    assert_eq!(route.query.get("a"), Some(&json!("1")));
}

#[test]
fn start_route_when_accessed_then_root_snapshot_with_empty_chain() {
    assert_eq!(START.path, "/");
    assert_eq!(START.full_path, "/");
    assert!(START.matched.is_empty());
    assert!(START.name.is_none());
}
