use std::fmt;

use super::Route;
use crate::request::RequestPath;
use crate::trie::{MatchOptions, MergeResult, TrieMatch};

/// Ordered dispatch entries. Path tries are folded into the first trie entry,
/// so the table holds at most one trie; other routes keep registration order.
pub struct RouteTable<T> {
    routes: Vec<Route<T>>,
}

impl<T> RouteTable<T> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Returns a new table with `route` added; `self` is left as it was.
    pub fn with_route(&self, route: Route<T>) -> MergeResult<RouteTable<T>> {
        let mut routes = self.routes.clone();

        match routes.iter().position(|existing| existing.can_merge(&route)) {
            Some(index) => {
                let merged = routes[index].merge(&route)?;
                routes[index] = merged;
            }
            None => routes.push(route),
        }

        Ok(RouteTable { routes })
    }

    /// Folds every route in order; fails without a partial result.
    pub fn with_routes<I>(&self, routes: I) -> MergeResult<RouteTable<T>>
    where
        I: IntoIterator<Item = Route<T>>,
    {
        routes
            .into_iter()
            .try_fold(self.clone(), |table, route| table.with_route(route))
    }

    pub fn find_with<R>(&self, request: &R, options: MatchOptions) -> Option<TrieMatch<'_, T>>
    where
        R: RequestPath + ?Sized,
    {
        self.routes
            .iter()
            .find_map(|route| route.find_with(request, options))
    }

    pub fn routes(&self) -> &[Route<T>] {
        &self.routes
    }

    /// Number of locations in the table.
    pub fn len(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<T> Default for RouteTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RouteTable<T> {
    fn clone(&self) -> Self {
        Self {
            routes: self.routes.clone(),
        }
    }
}

impl<T> fmt::Debug for RouteTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &self.routes)
            .finish()
    }
}
