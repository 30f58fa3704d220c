use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,
    #[error("pattern length {length} exceeds the limit of {limit}")]
    TooLong { length: usize, limit: usize },
    #[error("unsupported matcher '{kind}' in placeholder '{placeholder}'")]
    UnsupportedMatcher { kind: String, placeholder: String },
    #[error("matcher '{kind}' expects {expected} argument(s), got {args:?}")]
    MatcherArgument {
        kind: String,
        expected: &'static str,
        args: Vec<String>,
    },
    #[error("matcher '{kind}' requires a non-empty capture name")]
    EmptyCaptureName { kind: String },
    #[error("regex for capture '{name}' is invalid: {error}")]
    InvalidRegex { name: String, error: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
