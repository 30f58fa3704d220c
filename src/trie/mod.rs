mod error;
mod merge;
pub mod node;
mod parse;
mod tree;
mod walk;

pub use error::{MergeError, MergeResult};
pub use node::{NodeKind, TrieNode};
pub use parse::parse_pattern;
pub use tree::Trie;
pub(crate) use tree::EMPTY_PATH_FALLBACK;
pub use walk::{MatchOptions, TrieMatch};
