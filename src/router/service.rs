use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::sync::Arc;

use crate::pattern::MatcherRegistry;
use crate::request::RequestPath;
use crate::route::{Route, RouteTable};
use crate::router::{RouterOptions, RouterResult};
use crate::trie::Trie;
use crate::types::RouteMatch;

/// Owner of the live dispatch table.
///
/// Writers are serialized and never touch the published table: each update
/// builds a new table from the current one and swaps it in, so lookups always
/// see a complete table without taking a lock.
pub struct Router<T> {
    table: ArcSwap<RouteTable<T>>,
    writer: Mutex<()>,
    registry: MatcherRegistry,
    options: RouterOptions,
}

impl<T> Router<T> {
    /// Builds a router without validating `options`. With a zero
    /// `max_pattern_length` every later `add` fails with `TooLong`; use
    /// [`Router::try_new`] to reject such options up front.
    pub fn new(options: Option<RouterOptions>) -> Self {
        Self::with_registry(options, MatcherRegistry::builtin().clone())
    }

    /// Like [`Router::new`] but rejects invalid options.
    pub fn try_new(options: RouterOptions) -> RouterResult<Self> {
        options.validate()?;
        Ok(Self::new(Some(options)))
    }

    pub fn with_registry(options: Option<RouterOptions>, registry: MatcherRegistry) -> Self {
        Self {
            table: ArcSwap::from_pointee(RouteTable::new()),
            writer: Mutex::new(()),
            registry,
            options: options.unwrap_or_default(),
        }
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    pub fn registry(&self) -> &MatcherRegistry {
        &self.registry
    }

    /// Registers a path pattern. Nothing is published when parsing or
    /// merging fails.
    pub fn add(&self, pattern: &str, location: T) -> RouterResult<()> {
        tracing::event!(tracing::Level::TRACE, operation = "add", pattern = %pattern);

        let route = self.parse_route(pattern, location)?;

        let _guard = self.writer.lock();
        let next = self.table.load().with_route(route)?;
        self.install(next);
        Ok(())
    }

    /// Registers a full-path regular expression route.
    pub fn add_regex(&self, expr: &str, location: T) -> RouterResult<()> {
        tracing::event!(tracing::Level::TRACE, operation = "add_regex", expr = %expr);

        let route = Route::regex(expr, location)?;

        let _guard = self.writer.lock();
        let next = self.table.load().with_route(route)?;
        self.install(next);
        Ok(())
    }

    /// Registers several patterns as one update: either all of them are
    /// published together or none is.
    pub fn add_bulk<I, S>(&self, entries: I) -> RouterResult<usize>
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        let routes = entries
            .into_iter()
            .map(|(pattern, location)| self.parse_route(pattern.as_ref(), location))
            .collect::<RouterResult<Vec<Route<T>>>>()?;
        let count = routes.len();

        tracing::event!(tracing::Level::TRACE, operation = "add_bulk", count = count as u64);

        let _guard = self.writer.lock();
        let next = self.table.load().with_routes(routes)?;
        self.install(next);
        Ok(count)
    }

    /// Resolves `request` against the current table.
    pub fn find<R>(&self, request: &R) -> Option<RouteMatch<T>>
    where
        R: RequestPath + ?Sized,
    {
        let table = self.table.load();
        let found = table
            .find_with(request, self.options.match_options())
            .map(|m| RouteMatch {
                location: Arc::clone(m.location),
                params: m.params,
            });

        if self.options.debug {
            tracing::event!(
                tracing::Level::DEBUG,
                operation = "find",
                path = %request.request_path(),
                matched = found.is_some(),
                params = found.as_ref().map_or(0, |m| m.params.len()) as u64
            );
        }

        found
    }

    /// The table currently published to readers.
    pub fn snapshot(&self) -> Arc<RouteTable<T>> {
        self.table.load_full()
    }

    /// Publishes a table built elsewhere and returns the one it replaced.
    pub fn replace(&self, table: RouteTable<T>) -> Arc<RouteTable<T>> {
        let _guard = self.writer.lock();
        let routes = table.len();
        let previous = self.table.swap(Arc::new(table));
        tracing::event!(tracing::Level::DEBUG, operation = "replace", routes = routes as u64);
        previous
    }

    pub fn clear(&self) -> Arc<RouteTable<T>> {
        self.replace(RouteTable::new())
    }

    /// Number of registered locations.
    pub fn len(&self) -> usize {
        self.table.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn parse_route(&self, pattern: &str, location: T) -> RouterResult<Route<T>> {
        self.options.check_pattern(pattern)?;
        let trie = Trie::parse_with(pattern, location, &self.registry)?;
        Ok(Route::Trie(trie))
    }

    /// Caller must hold the writer lock.
    fn install(&self, table: RouteTable<T>) {
        let routes = table.len();
        self.table.store(Arc::new(table));
        tracing::event!(tracing::Level::DEBUG, operation = "install", routes = routes as u64);
    }
}

impl<T> std::fmt::Debug for Router<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.len())
            .field("registry", &self.registry)
            .field("options", &self.options)
            .finish()
    }
}
