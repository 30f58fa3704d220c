use smallvec::SmallVec;
use std::sync::Arc;

/// `(start, len)` of a captured value inside the request path.
pub type ParamOffset = (usize, usize);
pub type CapturedParam = (String, ParamOffset);
pub type CaptureList = SmallVec<[CapturedParam; 4]>;

/// Owned result of a router lookup.
#[derive(Debug, Clone)]
pub struct RouteMatch<T> {
    pub location: Arc<T>,
    pub params: CaptureList,
}

impl<T> RouteMatch<T> {
    /// Resolves a captured parameter against the path the match was produced from.
    pub fn param<'p>(&self, path: &'p str, name: &str) -> Option<&'p str> {
        let path = if path.is_empty() { "/" } else { path };
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, (start, len))| path.get(*start..*start + *len))
    }
}
