pub mod pattern;
pub mod request;
pub mod route;
pub mod router;
pub mod trie;
pub mod types;

pub use pattern::{MatcherRegistry, PatternError, PatternMatcher};
pub use request::RequestPath;
pub use route::{RegexRoute, Route, RouteError, RouteTable};
pub use router::{Router, RouterError, RouterOptions, RouterOptionsBuilder, RouterResult};
pub use trie::{MergeError, NodeKind, Trie, TrieMatch, TrieNode};
pub use types::{CaptureList, CapturedParam, ParamOffset, RouteMatch};
