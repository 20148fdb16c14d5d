mod compare;
mod entered;
mod query;
mod value;

pub use compare::{is_included_route, is_same_route};
pub use entered::{EnteredCallback, ViewInstance, ViewRegistry, handle_route_entered};
pub use query::{QueryStringifier, stringify_query};
pub use value::{Location, Route, START, create_route};
