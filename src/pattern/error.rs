use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("parameter segment in '{path}' is missing a name")]
    ParameterMissingName { path: String },
    #[error(
        "parameter name in '{path}' must start with an alphabetic character or underscore (found '{found}')"
    )]
    ParameterInvalidStart { path: String, found: char },
    #[error("pattern for '{path}' did not compile to a valid expression: {source}")]
    RegexBuild {
        path: String,
        source: regex::Error,
    },
}

pub type PatternResult<T> = Result<T, PatternError>;
