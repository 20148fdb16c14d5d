mod normalize;

pub use normalize::{clean_path, normalize_route_path};
