use std::sync::Arc;

use super::node::{NodeKind, TrieNode};
use crate::types::CaptureList;

/// Knobs for a single lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    pub case_sensitive: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

/// Location reached by a lookup together with the captures along the way.
#[derive(Debug)]
pub struct TrieMatch<'a, T> {
    pub location: &'a Arc<T>,
    pub params: CaptureList,
}

/// Depth-first walk, children tried in order. Pending branches live on a heap
/// stack together with the capture count to restore when they are resumed.
pub(crate) fn find_route<'a, T>(
    root: &'a TrieNode<T>,
    path: &str,
    options: MatchOptions,
) -> Option<TrieMatch<'a, T>> {
    let mut params = CaptureList::new();
    let mut pending: Vec<Branch<'a, T>> = vec![Branch {
        node: root,
        consumed: 0,
        checkpoint: 0,
    }];

    while let Some(branch) = pending.pop() {
        params.truncate(branch.checkpoint);

        let Some(consumed) = enter(branch.node, path, branch.consumed, options, &mut params)
        else {
            continue;
        };

        if let Some(location) = branch.node.location.as_ref() {
            if consumed == path.len() {
                return Some(TrieMatch { location, params });
            }
        }

        let checkpoint = params.len();
        pending.extend(branch.node.children.iter().rev().map(|child| Branch {
            node: &**child,
            consumed,
            checkpoint,
        }));
    }

    None
}

struct Branch<'a, T> {
    node: &'a TrieNode<T>,
    /// Path bytes consumed before entering `node`.
    consumed: usize,
    checkpoint: usize,
}

/// Applies `node` at `consumed`, returning the bytes consumed after it.
fn enter<T>(
    node: &TrieNode<T>,
    path: &str,
    consumed: usize,
    options: MatchOptions,
    params: &mut CaptureList,
) -> Option<usize> {
    match &node.kind {
        NodeKind::Root => Some(consumed),
        NodeKind::Literal(expected) => {
            let ch = path.get(consumed..)?.chars().next()?;
            if !chars_equal(ch, *expected, options.case_sensitive) {
                return None;
            }
            Some(consumed + ch.len_utf8())
        }
        NodeKind::Matcher(matcher) => {
            let captured = matcher.match_at(consumed, path)?;
            params.push((
                matcher.name().to_string(),
                (captured.start(), captured.value.len()),
            ));
            Some(captured.end)
        }
    }
}

#[inline]
fn chars_equal(actual: char, expected: char, case_sensitive: bool) -> bool {
    if case_sensitive {
        actual == expected
    } else {
        actual.eq_ignore_ascii_case(&expected)
    }
}
