use hashbrown::HashMap as FastHashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use super::constraint::{REGEX_KIND, RegexMatcher};
use super::matcher::PatternMatcher;
use super::numeric::{INT_KIND, IntMatcher};
use super::segment::{SEGMENT_KIND, SegmentMatcher};
use super::{PatternError, PatternResult};

/// Builds a matcher from the arguments following the type name.
pub type MatcherConstructor =
    Arc<dyn Fn(&[&str]) -> PatternResult<Arc<dyn PatternMatcher>> + Send + Sync>;

static BUILTIN: LazyLock<MatcherRegistry> = LazyLock::new(MatcherRegistry::default);

/// Placeholder type name to matcher constructor.
#[derive(Clone)]
pub struct MatcherRegistry {
    constructors: FastHashMap<Box<str>, MatcherConstructor>,
}

impl MatcherRegistry {
    /// Registry with no matcher kinds at all.
    pub fn empty() -> Self {
        Self {
            constructors: FastHashMap::new(),
        }
    }

    /// Shared registry holding the built-in kinds.
    pub fn builtin() -> &'static MatcherRegistry {
        &BUILTIN
    }

    /// Adds or replaces the constructor for `kind`.
    pub fn register<F>(&mut self, kind: &str, constructor: F) -> &mut Self
    where
        F: Fn(&[&str]) -> PatternResult<Arc<dyn PatternMatcher>> + Send + Sync + 'static,
    {
        self.constructors
            .insert(kind.to_owned().into_boxed_str(), Arc::new(constructor));
        self
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.constructors.contains_key(kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(|k| &**k)
    }

    pub fn build(&self, kind: &str, args: &[&str]) -> PatternResult<Arc<dyn PatternMatcher>> {
        match self.constructors.get(kind) {
            Some(constructor) => (**constructor)(args),
            None => {
                let mut placeholder = format!("<{}", kind);
                for arg in args {
                    placeholder.push(':');
                    placeholder.push_str(arg);
                }
                placeholder.push('>');
                Err(PatternError::UnsupportedMatcher {
                    kind: kind.to_string(),
                    placeholder,
                })
            }
        }
    }
}

impl Default for MatcherRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register(SEGMENT_KIND, SegmentMatcher::construct)
            .register(INT_KIND, IntMatcher::construct)
            .register(REGEX_KIND, RegexMatcher::construct);
        registry
    }
}

impl fmt::Debug for MatcherRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&str> = self.kinds().collect();
        kinds.sort_unstable();
        f.debug_struct("MatcherRegistry")
            .field("kinds", &kinds)
            .finish()
    }
}
