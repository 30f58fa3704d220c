use regex::Regex;
use std::fmt;
use std::sync::Arc;

use super::{RouteError, RouteResult};
use crate::trie::TrieMatch;
use crate::types::CaptureList;

/// Full-path regular expression route. Named groups become captures.
pub struct RegexRoute<T> {
    raw: Box<str>,
    compiled: Regex,
    location: Arc<T>,
}

impl<T> RegexRoute<T> {
    /// The expression is anchored at both ends of the path.
    pub fn new(expr: &str, location: T) -> RouteResult<Self> {
        if expr.is_empty() {
            return Err(RouteError::EmptyExpression);
        }
        let compiled = Regex::new(&format!("^(?:{})$", expr)).map_err(|err| {
            RouteError::InvalidRegex {
                expr: expr.to_string(),
                error: err.to_string(),
            }
        })?;
        Ok(Self {
            raw: expr.into(),
            compiled,
            location: Arc::new(location),
        })
    }

    pub fn expr(&self) -> &str {
        &self.raw
    }

    pub fn location(&self) -> &Arc<T> {
        &self.location
    }

    pub(crate) fn find(&self, path: &str) -> Option<TrieMatch<'_, T>> {
        let caps = self.compiled.captures(path)?;
        let mut params = CaptureList::new();
        for name in self.compiled.capture_names().flatten() {
            if let Some(m) = caps.name(name) {
                params.push((name.to_string(), (m.start(), m.len())));
            }
        }
        Some(TrieMatch {
            location: &self.location,
            params,
        })
    }
}

impl<T> Clone for RegexRoute<T> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            compiled: self.compiled.clone(),
            location: Arc::clone(&self.location),
        }
    }
}

impl<T> fmt::Debug for RegexRoute<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegexRoute").field("expr", &self.raw).finish()
    }
}
