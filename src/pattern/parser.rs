use super::{PatternError, PatternResult};

/// How often a parameter may repeat, read from its trailing modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatMode {
    One,
    ZeroOrOne,
    ZeroOrMore,
    OneOrMore,
}

impl RepeatMode {
    pub fn from_modifier(ch: Option<char>) -> Option<Self> {
        match ch {
            Some('?') => Some(Self::ZeroOrOne),
            Some('*') => Some(Self::ZeroOrMore),
            Some('+') => Some(Self::OneOrMore),
            _ => None,
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::ZeroOrOne | Self::ZeroOrMore)
    }

    pub fn is_repeating(&self) -> bool {
        matches!(self, Self::ZeroOrMore | Self::OneOrMore)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateToken {
    Literal(String),
    Param { name: String, repeat: RepeatMode },
    /// Catch-all matching any remaining suffix.
    Wildcard,
}

/// Splits a path template into literal, parameter, and wildcard tokens.
///
/// Parameter names start with an ASCII letter or underscore and continue
/// with alphanumerics or underscores; a trailing `?`, `*`, or `+` sets the
/// repeat mode. A bare `*` outside a parameter is the catch-all.
#[tracing::instrument(level = "trace", fields(path = %path))]
pub fn parse_template(path: &str) -> PatternResult<Vec<TemplateToken>> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut rest = path;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix(':') {
            let name: String = after
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect();
            if name.is_empty() {
                return Err(PatternError::ParameterMissingName {
                    path: path.to_string(),
                });
            }
            if let Some(first) = name.chars().next()
                && first.is_ascii_digit()
            {
                return Err(PatternError::ParameterInvalidStart {
                    path: path.to_string(),
                    found: first,
                });
            }
            flush_literal(&mut literal, &mut tokens);
            let mut consumed = 1 + name.len();
            let repeat = match RepeatMode::from_modifier(rest[consumed..].chars().next()) {
                Some(mode) => {
                    consumed += 1;
                    mode
                }
                None => RepeatMode::One,
            };
            tokens.push(TemplateToken::Param { name, repeat });
            rest = &rest[consumed..];
        } else if let Some(after) = rest.strip_prefix('*') {
            flush_literal(&mut literal, &mut tokens);
            tokens.push(TemplateToken::Wildcard);
            rest = after;
        } else if let Some(ch) = rest.chars().next() {
            literal.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }

    flush_literal(&mut literal, &mut tokens);
    Ok(tokens)
}

fn flush_literal(literal: &mut String, tokens: &mut Vec<TemplateToken>) {
    if !literal.is_empty() {
        tokens.push(TemplateToken::Literal(std::mem::take(literal)));
    }
}
