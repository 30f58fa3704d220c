mod constraint;
mod error;
mod lexer;
mod matcher;
mod numeric;
mod registry;
mod segment;

pub use constraint::{REGEX_KIND, RegexMatcher};
pub use error::{PatternError, PatternResult};
pub use lexer::{Placeholder, scan_placeholder};
pub use matcher::{Captured, PATH_SEPARATOR, PatternMatcher, segment_span};
pub use numeric::{INT_KIND, IntMatcher};
pub use registry::{MatcherConstructor, MatcherRegistry};
pub use segment::{SEGMENT_KIND, SegmentMatcher};
