//! Matching configuration
//!
//! A plain immutable value handed to the trie at construction. Fluent
//! setters live on [`MatchConfigBuilder`] and on
//! [`TrieBuilder`](crate::TrieBuilder).

use crate::error::{MatchError, Result};

/// What to do when the same keyword text is inserted more than once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DuplicatePolicy {
    /// Every insertion gets its own rank and fires separately
    #[default]
    Keep,
    /// Later insertions of an already known keyword are ignored
    Deduplicate,
}

/// Matching configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatchConfig {
    /// Report overlapping matches; when false, overlaps are resolved
    /// longest-first
    pub allow_overlaps: bool,
    /// Drop matches touching an alphabetic character on either side
    pub only_whole_words: bool,
    /// Fold ASCII letters before matching
    pub case_insensitive: bool,
    /// Handling of repeated keywords
    pub duplicates: DuplicatePolicy,
    /// Skip keywords longer than this many bytes (None = no limit)
    pub max_keyword_len: Option<usize>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            allow_overlaps: true,
            only_whole_words: false,
            case_insensitive: false,
            duplicates: DuplicatePolicy::Keep,
            max_keyword_len: None,
        }
    }
}

impl MatchConfig {
    /// Report every occurrence, overlaps included
    pub fn overlapping() -> Self {
        Self::default()
    }

    /// Resolve overlaps so that the longest match wins
    pub fn longest_non_overlapping() -> Self {
        Self {
            allow_overlaps: false,
            ..Default::default()
        }
    }

    /// Non-overlapping whole-word matching, ignoring ASCII case
    pub fn whole_words() -> Self {
        Self {
            allow_overlaps: false,
            only_whole_words: true,
            case_insensitive: true,
            ..Default::default()
        }
    }

    /// Create a configuration builder
    pub fn builder() -> MatchConfigBuilder {
        MatchConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_keyword_len == Some(0) {
            return Err(MatchError::InvalidConfiguration(
                "max_keyword_len must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Fluent builder for [`MatchConfig`]
#[derive(Debug, Default)]
pub struct MatchConfigBuilder {
    config: MatchConfig,
}

impl MatchConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard overlapping matches, keeping the longest
    pub fn remove_overlaps(mut self) -> Self {
        self.config.allow_overlaps = false;
        self
    }

    /// Only keep matches delimited by non-alphabetic characters
    pub fn only_whole_words(mut self) -> Self {
        self.config.only_whole_words = true;
        self
    }

    /// Ignore ASCII case
    pub fn case_insensitive(mut self) -> Self {
        self.config.case_insensitive = true;
        self
    }

    /// Set the duplicate keyword policy
    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.config.duplicates = policy;
        self
    }

    /// Set the maximum keyword length in bytes
    pub fn max_keyword_len(mut self, limit: Option<usize>) -> Self {
        self.config.max_keyword_len = limit;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<MatchConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allows_overlaps() {
        let config = MatchConfig::default();
        assert!(config.allow_overlaps);
        assert!(!config.only_whole_words);
        assert!(!config.case_insensitive);
        assert_eq!(config.duplicates, DuplicatePolicy::Keep);
        assert_eq!(config, MatchConfig::overlapping());
    }

    #[test]
    fn test_presets() {
        assert!(!MatchConfig::longest_non_overlapping().allow_overlaps);

        let words = MatchConfig::whole_words();
        assert!(!words.allow_overlaps);
        assert!(words.only_whole_words);
        assert!(words.case_insensitive);
    }

    #[test]
    fn test_builder_sets_flags() {
        let config = MatchConfig::builder()
            .remove_overlaps()
            .only_whole_words()
            .case_insensitive()
            .duplicates(DuplicatePolicy::Deduplicate)
            .max_keyword_len(Some(32))
            .build()
            .unwrap();
        assert!(!config.allow_overlaps);
        assert!(config.only_whole_words);
        assert!(config.case_insensitive);
        assert_eq!(config.duplicates, DuplicatePolicy::Deduplicate);
        assert_eq!(config.max_keyword_len, Some(32));
    }

    #[test]
    fn test_zero_keyword_limit_rejected() {
        let result = MatchConfig::builder().max_keyword_len(Some(0)).build();
        assert!(matches!(result, Err(MatchError::InvalidConfiguration(_))));
    }
}
