use smallvec::{SmallVec, smallvec};
use std::sync::Arc;

use super::node::{NodeKind, TrieNode};
use super::tree::Trie;
use crate::pattern::{MatcherRegistry, PatternError, PatternResult, scan_placeholder};

/// Splits a pattern into one edge per literal character or placeholder.
pub(crate) fn tokenize(pattern: &str, registry: &MatcherRegistry) -> PatternResult<Vec<NodeKind>> {
    if pattern.is_empty() {
        return Err(PatternError::Empty);
    }

    let mut edges = Vec::with_capacity(pattern.len());
    let mut offset = 0usize;

    while offset < pattern.len() {
        if let Some(token) = scan_placeholder(pattern, offset) {
            let matcher = registry.build(token.kind, &token.args)?;
            edges.push(NodeKind::Matcher(matcher));
            offset = token.end;
            continue;
        }

        // offset always sits on a char boundary: it only advances by whole
        // chars or past an ASCII '>'
        let Some(ch) = pattern[offset..].chars().next() else {
            break;
        };
        edges.push(NodeKind::Literal(ch));
        offset += ch.len_utf8();
    }

    Ok(edges)
}

/// Builds the single-path trie for `pattern`, its last node carrying `location`.
#[tracing::instrument(level = "trace", skip_all, fields(pattern = %pattern))]
pub fn parse_pattern<T>(
    pattern: &str,
    location: T,
    registry: &MatcherRegistry,
) -> PatternResult<Trie<T>> {
    let edges = tokenize(pattern, registry)?;
    let location = Arc::new(location);

    // built from the leaf upwards since nodes are immutable once shared
    let mut edges = edges.into_iter().rev();
    let mut node = match edges.next() {
        Some(kind) => TrieNode::new(kind, Some(location), SmallVec::new()),
        None => return Err(PatternError::Empty),
    };
    for kind in edges {
        node = TrieNode::new(kind, None, smallvec![Arc::new(node)]);
    }

    tracing::event!(tracing::Level::TRACE, operation = "parse_pattern", pattern = %pattern);

    Ok(Trie::from_root(TrieNode::root(smallvec![Arc::new(node)])))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_edge_per_character() {
        let edges = tokenize("/ab", MatcherRegistry::builtin()).unwrap();
        assert_eq!(edges.len(), 3);
        assert!(matches!(edges[0], NodeKind::Literal('/')));
        assert!(matches!(edges[2], NodeKind::Literal('b')));
    }

    #[test]
    fn placeholder_is_one_edge() {
        let edges = tokenize("/u/<id>/x", MatcherRegistry::builtin()).unwrap();
        assert_eq!(edges.len(), 6);
        match &edges[3] {
            NodeKind::Matcher(m) => assert_eq!(m.name(), "id"),
            other => panic!("expected matcher edge, got {other:?}"),
        }
    }

    #[test]
    fn unterminated_bracket_is_literal() {
        let edges = tokenize("/<id", MatcherRegistry::builtin()).unwrap();
        assert_eq!(edges.len(), 4);
        assert!(matches!(edges[1], NodeKind::Literal('<')));
    }

    #[test]
    fn multibyte_characters_are_single_edges() {
        let edges = tokenize("/é", MatcherRegistry::builtin()).unwrap();
        assert_eq!(edges.len(), 2);
        assert!(matches!(edges[1], NodeKind::Literal('é')));
    }
}
