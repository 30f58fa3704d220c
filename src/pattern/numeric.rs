use std::fmt;
use std::sync::Arc;

use super::PatternResult;
use super::matcher::{Captured, PatternMatcher, segment_span};
use super::segment::single_name;

pub const INT_KIND: &str = "int";

/// `<int:name>`: a segment made only of ASCII digits, at least one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntMatcher {
    name: String,
}

impl IntMatcher {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub(crate) fn construct(args: &[&str]) -> PatternResult<Arc<dyn PatternMatcher>> {
        let name = single_name(INT_KIND, args)?;
        Ok(Arc::new(Self::new(name)))
    }
}

impl PatternMatcher for IntMatcher {
    fn kind(&self) -> &str {
        INT_KIND
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn match_at<'p>(&self, offset: usize, path: &'p str) -> Option<Captured<'p>> {
        let span = segment_span(offset, path)?;
        if span.value.is_empty() || !span.value.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(span)
    }
}

impl fmt::Display for IntMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}:{}>", INT_KIND, self.name)
    }
}
