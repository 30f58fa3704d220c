use memchr::memchr;
use std::fmt;

pub const PATH_SEPARATOR: u8 = b'/';

/// Span consumed by a matcher: the captured value and the offset just past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Captured<'p> {
    pub value: &'p str,
    pub end: usize,
}

impl<'p> Captured<'p> {
    pub fn start(&self) -> usize {
        self.end - self.value.len()
    }
}

/// A placeholder edge in the trie.
///
/// Implementations consume a run of the path starting at `offset` and return
/// what they captured, or `None` when the span is not acceptable for the
/// variant. Display renders the placeholder back in pattern syntax.
pub trait PatternMatcher: fmt::Debug + fmt::Display + Send + Sync {
    /// Type name the matcher is registered under.
    fn kind(&self) -> &str;

    /// Capture name.
    fn name(&self) -> &str;

    fn match_at<'p>(&self, offset: usize, path: &'p str) -> Option<Captured<'p>>;

    /// Matchers are interchangeable in the trie when variant and capture name
    /// agree. Arguments beyond the name are not compared.
    fn equals(&self, other: &dyn PatternMatcher) -> bool {
        self.kind() == other.kind() && self.name() == other.name()
    }
}

/// Span from `offset` up to the next separator, or to the end of the path.
pub fn segment_span(offset: usize, path: &str) -> Option<Captured<'_>> {
    let rest = path.get(offset..)?;
    let end = match memchr(PATH_SEPARATOR, rest.as_bytes()) {
        Some(rel) => offset + rel,
        None => path.len(),
    };
    Some(Captured {
        value: &path[offset..end],
        end,
    })
}
