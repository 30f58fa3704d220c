use regex::Regex;
use std::fmt;
use std::sync::Arc;

use super::matcher::{Captured, PatternMatcher, segment_span};
use super::{PatternError, PatternResult};

pub const REGEX_KIND: &str = "regex";

/// `<regex:name:expr>`: a segment accepted only when it fully matches `expr`.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    name: String,
    raw: Box<str>,
    compiled: Regex,
}

impl RegexMatcher {
    pub fn new(name: impl Into<String>, raw: &str) -> PatternResult<Self> {
        let name = name.into();
        let compiled =
            Regex::new(&format!("^(?:{})$", raw)).map_err(|err| PatternError::InvalidRegex {
                name: name.clone(),
                error: err.to_string(),
            })?;
        Ok(Self {
            name,
            raw: raw.into(),
            compiled,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub(crate) fn construct(args: &[&str]) -> PatternResult<Arc<dyn PatternMatcher>> {
        // the expression itself may contain ':'
        let (name, rest) = match args {
            [name, rest @ ..] if !rest.is_empty() => (*name, rest.join(":")),
            _ => {
                return Err(PatternError::MatcherArgument {
                    kind: REGEX_KIND.to_string(),
                    expected: "at least 2",
                    args: args.iter().map(|a| a.to_string()).collect(),
                });
            }
        };
        if name.is_empty() {
            return Err(PatternError::EmptyCaptureName {
                kind: REGEX_KIND.to_string(),
            });
        }
        Ok(Arc::new(Self::new(name, &rest)?))
    }
}

impl PatternMatcher for RegexMatcher {
    fn kind(&self) -> &str {
        REGEX_KIND
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn match_at<'p>(&self, offset: usize, path: &'p str) -> Option<Captured<'p>> {
        let span = segment_span(offset, path)?;
        self.compiled.is_match(span.value).then_some(span)
    }
}

impl fmt::Display for RegexMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}:{}:{}>", REGEX_KIND, self.name, self.raw)
    }
}
