use super::{PatternError, PatternResult, TemplateToken, parse_template};
use crate::types::{KeyList, PATH_MATCH_KEY, Params};
use bitflags::bitflags;
use hashbrown::HashSet;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;
use std::fmt::Write as _;

/// Matching detail flags of a route declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternOptions {
    /// Literal segments match case-sensitively.
    pub sensitive: bool,
    /// A trailing slash is significant.
    pub strict: bool,
    /// The pattern must consume the whole path.
    pub end: bool,
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            sensitive: false,
            strict: false,
            end: true,
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PatternFlags: u8 {
        const SENSITIVE = 1 << 0;
        const STRICT = 1 << 1;
        const END = 1 << 2;
    }
}

impl From<&PatternOptions> for PatternFlags {
    fn from(options: &PatternOptions) -> Self {
        let mut flags = PatternFlags::empty();
        flags.set(PatternFlags::SENSITIVE, options.sensitive);
        flags.set(PatternFlags::STRICT, options.strict);
        flags.set(PatternFlags::END, options.end);
        flags
    }
}

/// Reusable matcher compiled from one path template. Capture groups carry
/// internal positional names (`p0`, `p1`, ...); `keys` maps them back to
/// the declared parameter names in order.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
    keys: KeyList,
    flags: PatternFlags,
}

impl CompiledPattern {
    /// Ordered parameter names extracted by this pattern.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, path: &str) -> bool {
        if self.flags.contains(PatternFlags::END) {
            return self.regex.is_match(path);
        }
        self.captures(path).is_some()
    }

    /// Tests `path` and extracts named parameters on a match. Without the
    /// END flag the match is a prefix and must stop at a `/` boundary or
    /// the end of the path.
    pub fn captures(&self, path: &str) -> Option<Params> {
        let caps = self.regex.captures(path)?;
        let whole = caps.get(0)?;
        if !self.flags.contains(PatternFlags::END) {
            let end = whole.end();
            let at_boundary = end == path.len()
                || path.as_bytes().get(end) == Some(&b'/')
                || (end > 0 && path.as_bytes().get(end - 1) == Some(&b'/'));
            if !at_boundary {
                return None;
            }
        }
        let mut params = Params::new();
        for (index, key) in self.keys.iter().enumerate() {
            if let Some(group) = caps.name(&group_name(index)) {
                params.insert(key.clone(), Value::String(group.as_str().to_string()));
            }
        }
        Some(params)
    }
}

fn group_name(index: usize) -> String {
    format!("p{index}")
}

/// Compiles a normalized route path into a reusable matcher.
///
/// Duplicate parameter names are tolerated with a warning; the last
/// occurrence wins at extraction time.
#[tracing::instrument(level = "trace", skip(options), fields(path = %path))]
pub fn compile_route_pattern(
    path: &str,
    options: &PatternOptions,
) -> PatternResult<CompiledPattern> {
    let tokens = parse_template(path)?;
    let mut keys: KeyList = SmallVec::new();
    let mut source = String::with_capacity(path.len() + 16);
    if !options.sensitive {
        source.push_str("(?i)");
    }
    source.push('^');

    let mut wildcards = 0usize;
    for token in &tokens {
        match token {
            TemplateToken::Literal(lit) => source.push_str(&regex::escape(lit)),
            TemplateToken::Param { name, repeat } => {
                // the preceding slash joins the group so optional params
                // absorb their separator
                let prefixed = source.ends_with('/');
                if prefixed {
                    source.pop();
                }
                let separator = if prefixed { "/" } else { "" };
                let body = if repeat.is_repeating() {
                    format!("(?P<{}>[^/]+(?:/[^/]+)*)", group_name(keys.len()))
                } else {
                    format!("(?P<{}>[^/]+)", group_name(keys.len()))
                };
                if repeat.is_optional() {
                    let _ = write!(source, "(?:{separator}{body})?");
                } else {
                    source.push_str(separator);
                    source.push_str(&body);
                }
                keys.push(name.clone());
            }
            TemplateToken::Wildcard => {
                let key = if wildcards == 0 {
                    PATH_MATCH_KEY.to_string()
                } else {
                    format!("{PATH_MATCH_KEY}{wildcards}")
                };
                wildcards += 1;
                let _ = write!(source, "(?P<{}>.*)", group_name(keys.len()));
                keys.push(key);
            }
        }
    }

    if !options.strict {
        if source.ends_with('/') {
            source.pop();
        }
        source.push_str("/?");
    }
    if options.end {
        source.push('$');
    }

    {
        let mut seen: HashSet<&str> = HashSet::with_capacity(keys.len());
        for key in &keys {
            if !seen.insert(key.as_str()) {
                tracing::warn!(path = %path, key = %key, "duplicate param keys in route pattern");
            }
        }
    }

    let regex = Regex::new(&source).map_err(|err| PatternError::RegexBuild {
        path: path.to_string(),
        source: err,
    })?;

    Ok(CompiledPattern {
        regex,
        keys,
        flags: PatternFlags::from(options),
    })
}
