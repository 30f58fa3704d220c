use smallvec::SmallVec;
use std::mem;
use std::sync::Arc;

use super::node::{Children, NodeRef, TrieNode};
use super::{MergeError, MergeResult};

/// Unifies two structurally equal nodes into a fresh node.
///
/// Neither operand is modified. Children without a counterpart on the other
/// side are shared with their origin tree. The descent keeps its pending pairs
/// on the heap, so stack usage does not grow with pattern length.
pub(crate) fn merge_nodes<T>(left: &TrieNode<T>, right: &TrieNode<T>) -> MergeResult<TrieNode<T>> {
    let mut current = MergeFrame::open(left, right)?;
    let mut parents: Vec<MergeFrame<'_, T>> = Vec::new();

    loop {
        match current.advance() {
            Some((l, Some(r))) => {
                let child = MergeFrame::open(l, r)?;
                parents.push(mem::replace(&mut current, child));
            }
            Some((l, None)) => current.children.push(Arc::clone(l)),
            None => {
                let node = current.finish();
                match parents.pop() {
                    Some(mut parent) => {
                        parent.children.push(Arc::new(node));
                        current = parent;
                    }
                    None => return Ok(node),
                }
            }
        }
    }
}

/// One pair of equal nodes being merged.
///
/// Left children are visited in order, each folded with its counterpart from
/// the right when one exists; unmatched right children follow in their own
/// order once the left side is exhausted.
struct MergeFrame<'a, T> {
    left: &'a TrieNode<T>,
    right: &'a TrieNode<T>,
    location: Option<Arc<T>>,
    taken: SmallVec<[bool; 8]>,
    next_left: usize,
    children: Children<T>,
}

impl<'a, T> MergeFrame<'a, T> {
    fn open(left: &'a TrieNode<T>, right: &'a TrieNode<T>) -> MergeResult<Self> {
        if !left.kind.same_key(&right.kind) {
            return Err(MergeError::KeyMismatch {
                left: left.to_string(),
                right: right.to_string(),
            });
        }

        let location = match (&left.location, &right.location) {
            (Some(_), Some(_)) => {
                return Err(MergeError::DuplicateLeaf {
                    left: left.to_string(),
                    right: right.to_string(),
                });
            }
            (Some(location), None) | (None, Some(location)) => Some(Arc::clone(location)),
            (None, None) => None,
        };

        Ok(Self {
            left,
            right,
            location,
            taken: SmallVec::from_elem(false, right.children.len()),
            next_left: 0,
            children: SmallVec::with_capacity(left.children.len() + right.children.len()),
        })
    }

    /// Next left child and its unclaimed counterpart on the right, if any.
    fn advance(&mut self) -> Option<(&'a NodeRef<T>, Option<&'a NodeRef<T>>)> {
        let left: &'a TrieNode<T> = self.left;
        let right: &'a TrieNode<T> = self.right;

        let l = left.children.get(self.next_left)?;
        self.next_left += 1;

        let counterpart = right
            .children
            .iter()
            .enumerate()
            .find(|(j, r)| !self.taken[*j] && l.kind.same_key(&r.kind));

        match counterpart {
            Some((j, r)) => {
                self.taken[j] = true;
                Some((l, Some(r)))
            }
            None => Some((l, None)),
        }
    }

    fn finish(mut self) -> TrieNode<T> {
        for (j, r) in self.right.children.iter().enumerate() {
            if !self.taken[j] {
                self.children.push(Arc::clone(r));
            }
        }
        TrieNode::new(self.left.kind.clone(), self.location, self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::SegmentMatcher;
    use crate::trie::NodeKind;

    fn literal(ch: char, location: Option<&'static str>) -> TrieNode<&'static str> {
        TrieNode::new(NodeKind::Literal(ch), location.map(Arc::new), SmallVec::new())
    }

    #[test]
    fn different_characters_do_not_merge() {
        let err = merge_nodes(&literal('a', None), &literal('b', None)).unwrap_err();
        assert_eq!(
            err,
            MergeError::KeyMismatch {
                left: "node(a)".to_string(),
                right: "node(b)".to_string(),
            }
        );
    }

    #[test]
    fn literal_and_matcher_do_not_merge() {
        let matcher = TrieNode::new(
            NodeKind::Matcher(Arc::new(SegmentMatcher::new("a"))),
            None,
            SmallVec::new(),
        );
        let err = merge_nodes(&literal('a', None), &matcher).unwrap_err();
        assert!(matches!(err, MergeError::KeyMismatch { .. }));
    }

    #[test]
    fn leaf_payload_moves_onto_merged_node() {
        let merged = merge_nodes(&literal('a', None), &literal('a', Some("dest"))).unwrap();
        assert_eq!(merged.location().map(|l| **l), Some("dest"));
        assert!(merged.children().is_empty());
    }
}
