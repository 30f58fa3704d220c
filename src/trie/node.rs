use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

use crate::pattern::PatternMatcher;

pub type NodeRef<T> = Arc<TrieNode<T>>;
pub type Children<T> = SmallVec<[NodeRef<T>; 4]>;

/// What a node consumes from the path.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Entry point; consumes nothing.
    Root,
    Literal(char),
    Matcher(Arc<dyn PatternMatcher>),
}

impl NodeKind {
    /// Structural equality used to fold siblings during merge.
    pub fn same_key(&self, other: &NodeKind) -> bool {
        match (self, other) {
            (NodeKind::Root, NodeKind::Root) => true,
            (NodeKind::Literal(a), NodeKind::Literal(b)) => a == b,
            (NodeKind::Matcher(a), NodeKind::Matcher(b)) => a.equals(&**b),
            _ => false,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Root => f.write_str("root"),
            NodeKind::Literal(ch) => write!(f, "{ch}"),
            NodeKind::Matcher(m) => write!(f, "{m}"),
        }
    }
}

/// Immutable trie node. The location is orthogonal to the kind: a node can
/// terminate one route and continue longer routes sharing its prefix.
#[derive(Debug)]
pub struct TrieNode<T> {
    pub(crate) kind: NodeKind,
    pub(crate) location: Option<Arc<T>>,
    pub(crate) children: Children<T>,
}

impl<T> TrieNode<T> {
    pub(crate) fn new(kind: NodeKind, location: Option<Arc<T>>, children: Children<T>) -> Self {
        Self {
            kind,
            location,
            children,
        }
    }

    pub(crate) fn root(children: Children<T>) -> Self {
        Self::new(NodeKind::Root, None, children)
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn location(&self) -> Option<&Arc<T>> {
        self.location.as_ref()
    }

    pub fn children(&self) -> &[NodeRef<T>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.location.is_some()
    }

    pub fn is_root(&self) -> bool {
        matches!(self.kind, NodeKind::Root)
    }

    pub fn is_matcher(&self) -> bool {
        matches!(self.kind, NodeKind::Matcher(_))
    }
}

impl<T> Drop for TrieNode<T> {
    // unlinks uniquely owned descendants one at a time; a long single-child
    // chain would otherwise be released through one nested drop per level
    fn drop(&mut self) {
        let mut pending: Vec<NodeRef<T>> = self.children.drain(..).collect();
        while let Some(child) = pending.pop() {
            if let Ok(mut node) = Arc::try_unwrap(child) {
                pending.extend(node.children.drain(..));
            }
        }
    }
}

impl<T> fmt::Display for TrieNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_leaf() {
            write!(f, "leaf({})", self.kind)
        } else if self.is_root() {
            f.write_str("root")
        } else {
            write!(f, "node({})", self.kind)
        }
    }
}
