use std::fmt;
use std::sync::Arc;

use super::merge::merge_nodes;
use super::node::{NodeRef, TrieNode};
use super::parse::parse_pattern;
use super::walk::{MatchOptions, TrieMatch, find_route};
use super::MergeResult;
use crate::pattern::{MatcherRegistry, PatternResult};
use crate::request::RequestPath;

pub(crate) const EMPTY_PATH_FALLBACK: &str = "/";

/// Read-only route trie. Cloning is cheap and shares every node.
pub struct Trie<T> {
    root: NodeRef<T>,
}

impl<T> Clone for Trie<T> {
    fn clone(&self) -> Self {
        Self {
            root: Arc::clone(&self.root),
        }
    }
}

impl<T> Trie<T> {
    pub(crate) fn from_root(root: TrieNode<T>) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    /// Parses `pattern` with the built-in matcher kinds.
    pub fn parse(pattern: &str, location: T) -> PatternResult<Self> {
        parse_pattern(pattern, location, MatcherRegistry::builtin())
    }

    pub fn parse_with(
        pattern: &str,
        location: T,
        registry: &MatcherRegistry,
    ) -> PatternResult<Self> {
        parse_pattern(pattern, location, registry)
    }

    pub fn root(&self) -> &TrieNode<T> {
        &self.root
    }

    /// Builds a new trie holding the routes of both operands.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn merge(&self, other: &Trie<T>) -> MergeResult<Trie<T>> {
        let root = merge_nodes(&self.root, &other.root)?;
        Ok(Trie::from_root(root))
    }

    pub fn find<R>(&self, request: &R) -> Option<TrieMatch<'_, T>>
    where
        R: RequestPath + ?Sized,
    {
        self.find_with(request, MatchOptions::default())
    }

    pub fn find_with<R>(&self, request: &R, options: MatchOptions) -> Option<TrieMatch<'_, T>>
    where
        R: RequestPath + ?Sized,
    {
        let mut path = request.request_path();
        if path.is_empty() {
            path = EMPTY_PATH_FALLBACK;
        }
        find_route(&self.root, path, options)
    }

    /// Number of levels below the root on the longest branch.
    pub fn depth(&self) -> usize {
        let mut deepest = 0usize;
        let mut stack: Vec<(&TrieNode<T>, usize)> = vec![(&*self.root, 0)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children.iter().map(|c| (&**c, level + 1)));
        }
        deepest
    }

    /// Number of nodes carrying a location.
    pub fn len(&self) -> usize {
        let mut count = 0usize;
        let mut stack: Vec<&TrieNode<T>> = vec![&*self.root];
        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                count += 1;
            }
            stack.extend(node.children.iter().map(|c| &**c));
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when both handles point at the same root node.
    pub fn ptr_eq(&self, other: &Trie<T>) -> bool {
        Arc::ptr_eq(&self.root, &other.root)
    }
}

impl<T> fmt::Debug for Trie<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("depth", &self.depth())
            .field("routes", &self.len())
            .finish()
    }
}

impl<T> fmt::Display for Trie<T> {
    /// One node per line, indented by depth.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<(&TrieNode<T>, usize)> = vec![(&*self.root, 0)];
        while let Some((node, depth)) = stack.pop() {
            writeln!(f, "{:indent$}{}", "", node, indent = depth * 2)?;
            stack.extend(node.children.iter().rev().map(|c| (&**c, depth + 1)));
        }
        Ok(())
    }
}
