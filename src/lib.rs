pub mod errors;
pub mod path;
pub mod pattern;
pub mod registry;
pub mod route;
pub mod types;

pub use errors::{RouterError, RouterResult};
pub use pattern::{CompiledPattern, PatternOptions, compile_route_pattern};
pub use registry::{AliasDef, GuardHook, RedirectTarget, RouteConfig, RouteMap, RouteRecord};
pub use route::{
    Location, Route, START, ViewInstance, ViewRegistry, create_route, handle_route_entered,
    is_included_route, is_same_route, stringify_query,
};
