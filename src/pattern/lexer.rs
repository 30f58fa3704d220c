use memchr::memchr;
use smallvec::SmallVec;

use super::segment::SEGMENT_KIND;

pub const PLACEHOLDER_OPEN: u8 = b'<';
pub const PLACEHOLDER_CLOSE: u8 = b'>';
pub const ARGUMENT_SEPARATOR: char = ':';

/// A `<TYPE(:ARG)*>` token found in a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    pub kind: &'a str,
    pub args: SmallVec<[&'a str; 2]>,
    /// Byte offset just past the closing `>`.
    pub end: usize,
}

/// Recognizes a placeholder anchored at `offset`.
///
/// The body runs to the first `>` and must be non-empty without a path
/// separator; anything else is left to be read as literal characters.
/// A body with no `:` is shorthand for a `string` capture of that name.
pub fn scan_placeholder(pattern: &str, offset: usize) -> Option<Placeholder<'_>> {
    let bytes = pattern.as_bytes();
    if bytes.get(offset) != Some(&PLACEHOLDER_OPEN) {
        return None;
    }

    let body_start = offset + 1;
    let close = body_start + memchr(PLACEHOLDER_CLOSE, &bytes[body_start..])?;
    let body = &pattern[body_start..close];
    if body.is_empty() || body.contains('/') {
        return None;
    }

    let mut fields = body.split(ARGUMENT_SEPARATOR);
    let first = fields.next()?;
    let rest: SmallVec<[&str; 2]> = fields.collect();

    let (kind, args) = if rest.is_empty() {
        (SEGMENT_KIND, smallvec::smallvec![first])
    } else {
        (first, rest)
    };

    Some(Placeholder {
        kind,
        args,
        end: close + 1,
    })
}
