use std::fmt;
use std::sync::Arc;

use super::matcher::{Captured, PatternMatcher, segment_span};
use super::{PatternError, PatternResult};

pub const SEGMENT_KIND: &str = "string";

/// `<string:name>` / `<name>`: captures one path segment, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentMatcher {
    name: String,
}

impl SegmentMatcher {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub(crate) fn construct(args: &[&str]) -> PatternResult<Arc<dyn PatternMatcher>> {
        let name = single_name(SEGMENT_KIND, args)?;
        Ok(Arc::new(Self::new(name)))
    }
}

impl PatternMatcher for SegmentMatcher {
    fn kind(&self) -> &str {
        SEGMENT_KIND
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn match_at<'p>(&self, offset: usize, path: &'p str) -> Option<Captured<'p>> {
        segment_span(offset, path)
    }
}

impl fmt::Display for SegmentMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}:{}>", SEGMENT_KIND, self.name)
    }
}

/// Validates the `<kind:name>` arity shared by single-argument matchers.
pub(crate) fn single_name<'a>(kind: &str, args: &[&'a str]) -> PatternResult<&'a str> {
    match args {
        [name] if name.is_empty() => Err(PatternError::EmptyCaptureName {
            kind: kind.to_string(),
        }),
        [name] => Ok(*name),
        _ => Err(PatternError::MatcherArgument {
            kind: kind.to_string(),
            expected: "exactly 1",
            args: args.iter().map(|a| a.to_string()).collect(),
        }),
    }
}
