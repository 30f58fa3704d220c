use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("route expression is empty")]
    EmptyExpression,
    #[error("route regex '{expr}' is invalid: {error}")]
    InvalidRegex { expr: String, error: String },
}

pub type RouteResult<T> = Result<T, RouteError>;
