use smallvec::SmallVec;

/// Opaque per-view-slot payload. The table never inspects it beyond the
/// string-identifier rejection at build time.
pub type Component = serde_json::Value;

/// Query dictionary of a location or route snapshot.
pub type Query = serde_json::Map<String, serde_json::Value>;

/// Extracted or caller-supplied path parameters.
pub type Params = serde_json::Map<String, serde_json::Value>;

/// Arbitrary key/value payload attached to a route (meta).
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Ordered parameter names of one compiled pattern.
pub type KeyList = SmallVec<[String; 4]>;

/// Key the catch-all wildcard captures under.
pub const PATH_MATCH_KEY: &str = "pathMatch";

/// View-slot name used when a route declares a single component.
pub const DEFAULT_SLOT: &str = "default";
