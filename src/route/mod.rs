mod error;
mod regexp;
mod table;

pub use error::{RouteError, RouteResult};
pub use regexp::RegexRoute;
pub use table::RouteTable;

use std::fmt;

use crate::pattern::{MatcherRegistry, PatternResult};
use crate::request::RequestPath;
use crate::trie::{EMPTY_PATH_FALLBACK, MatchOptions, MergeError, MergeResult, Trie, TrieMatch};

const TRIE_ROUTE: &str = "trie";
const REGEX_ROUTE: &str = "regex";

/// One entry of a dispatch table.
pub enum Route<T> {
    /// Path template compiled into a trie; tries merge with each other.
    Trie(Trie<T>),
    /// Full-path regular expression; never merges.
    Regex(RegexRoute<T>),
}

impl<T> Route<T> {
    pub fn path(pattern: &str, location: T) -> PatternResult<Self> {
        Trie::parse(pattern, location).map(Route::Trie)
    }

    pub fn path_with(pattern: &str, location: T, registry: &MatcherRegistry) -> PatternResult<Self> {
        Trie::parse_with(pattern, location, registry).map(Route::Trie)
    }

    pub fn regex(expr: &str, location: T) -> RouteResult<Self> {
        RegexRoute::new(expr, location).map(Route::Regex)
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Route::Trie(_) => TRIE_ROUTE,
            Route::Regex(_) => REGEX_ROUTE,
        }
    }

    pub fn as_trie(&self) -> Option<&Trie<T>> {
        match self {
            Route::Trie(trie) => Some(trie),
            Route::Regex(_) => None,
        }
    }

    /// Only two tries can be merged.
    pub fn can_merge(&self, other: &Route<T>) -> bool {
        matches!((self, other), (Route::Trie(_), Route::Trie(_)))
    }

    pub fn merge(&self, other: &Route<T>) -> MergeResult<Route<T>> {
        match (self, other) {
            (Route::Trie(left), Route::Trie(right)) => left.merge(right).map(Route::Trie),
            _ => Err(MergeError::TypeMismatch {
                left: self.kind_name(),
                right: other.kind_name(),
            }),
        }
    }

    pub fn find_with<R>(&self, request: &R, options: MatchOptions) -> Option<TrieMatch<'_, T>>
    where
        R: RequestPath + ?Sized,
    {
        match self {
            Route::Trie(trie) => trie.find_with(request, options),
            Route::Regex(route) => {
                let path = request.request_path();
                route.find(if path.is_empty() { EMPTY_PATH_FALLBACK } else { path })
            }
        }
    }

    /// Number of locations reachable through this entry.
    pub fn len(&self) -> usize {
        match self {
            Route::Trie(trie) => trie.len(),
            Route::Regex(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Clone for Route<T> {
    fn clone(&self) -> Self {
        match self {
            Route::Trie(trie) => Route::Trie(trie.clone()),
            Route::Regex(route) => Route::Regex(route.clone()),
        }
    }
}

impl<T> fmt::Debug for Route<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Trie(trie) => f.debug_tuple("Trie").field(trie).finish(),
            Route::Regex(route) => f.debug_tuple("Regex").field(route).finish(),
        }
    }
}
