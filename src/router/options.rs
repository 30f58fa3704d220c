use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pattern::PatternError;
use crate::trie::MatchOptions;

pub const DEFAULT_MAX_PATTERN_LENGTH: usize = 4096;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterOptions {
    /// Literal characters compare exactly; when off, ASCII case is ignored.
    pub case_sensitive: bool,
    pub max_pattern_length: usize,
    /// Emit a DEBUG event for every lookup.
    pub debug: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            max_pattern_length: DEFAULT_MAX_PATTERN_LENGTH,
            debug: false,
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        if self.max_pattern_length == 0 {
            return Err(RouterOptionsError::MaxPatternLengthInvalid {
                provided: self.max_pattern_length,
            });
        }
        Ok(())
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            case_sensitive: self.case_sensitive,
        }
    }

    pub(crate) fn check_pattern(&self, pattern: &str) -> Result<(), PatternError> {
        if pattern.len() > self.max_pattern_length {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                limit: self.max_pattern_length,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.options.case_sensitive = value;
        self
    }

    pub fn max_pattern_length(mut self, value: usize) -> Self {
        self.options.max_pattern_length = value;
        self
    }

    pub fn debug(mut self, value: bool) -> Self {
        self.options.debug = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RouterOptionsError {
    #[error("max_pattern_length must be at least 1 (got {provided})")]
    MaxPatternLengthInvalid { provided: usize },
}
