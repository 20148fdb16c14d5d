mod compiler;
mod error;
mod parser;

pub use compiler::{CompiledPattern, PatternFlags, PatternOptions, compile_route_pattern};
pub use error::{PatternError, PatternResult};
pub use parser::{RepeatMode, TemplateToken, parse_template};
