use crate::pattern::PatternError;
use crate::route::RouteError;
use crate::router::RouterOptionsError;
use crate::trie::MergeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Merge(#[from] MergeError),
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error(transparent)]
    Options(#[from] RouterOptionsError),
}

pub type RouterResult<T> = Result<T, RouterError>;
