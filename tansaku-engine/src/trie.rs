//! Keyword trie and builder
//!
//! [`TrieBuilder`] collects keywords and settings, then inserts them and
//! builds failure links in one go. The resulting [`Trie`] is immutable, so
//! any number of threads can scan with it without further synchronization.

use crate::{
    config::{DuplicatePolicy, MatchConfig},
    error::Result,
    filter::retain_whole_words,
    token::{tokenize, Token},
};
use std::collections::HashSet;
use tansaku_core::{Automaton, BuiltAutomaton, Emit, IntervalTree, Intervalable};

/// Built keyword matcher
#[derive(Debug, Clone)]
pub struct Trie {
    automaton: BuiltAutomaton,
    config: MatchConfig,
}

impl Trie {
    /// Create a builder
    pub fn builder() -> TrieBuilder {
        TrieBuilder::new()
    }

    /// Build a trie with the default configuration
    pub fn with_keywords<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TrieBuilder::new().add_keywords(keywords).build()
    }

    /// The configuration this trie was built with
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The underlying automaton
    pub fn automaton(&self) -> &Automaton {
        self.automaton.automaton()
    }

    /// Number of keywords inserted (empty and skipped ones excluded)
    pub fn keyword_count(&self) -> usize {
        self.automaton().keyword_count()
    }

    /// Number of automaton states including the root
    pub fn state_count(&self) -> usize {
        self.automaton().state_count()
    }

    /// Find keyword occurrences in `text`
    ///
    /// The raw scan is reduced by the whole-word filter and overlap removal
    /// when enabled. The result is ordered by start, then end, then
    /// insertion rank.
    pub fn parse_text(&self, text: &str) -> Vec<Emit> {
        let mut emits = self.automaton.scan(text.bytes());
        let raw = emits.len();

        if self.config.only_whole_words {
            retain_whole_words(&mut emits, text);
        }

        if self.config.allow_overlaps {
            emits.sort_by_key(|emit| (emit.start(), emit.end()));
        } else {
            emits = IntervalTree::new(emits).remove_overlaps();
        }

        log::trace!(
            "scanned {} bytes: {} raw emits, {} kept",
            text.len(),
            raw,
            emits.len()
        );
        emits
    }

    /// Find keyword occurrences in raw bytes, which must be valid UTF-8
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<Emit>> {
        let text = std::str::from_utf8(bytes)?;
        Ok(self.parse_text(text))
    }

    /// The first occurrence in text order, after filtering
    pub fn first_match(&self, text: &str) -> Option<Emit> {
        self.parse_text(text).into_iter().next()
    }

    /// Whether any keyword occurs in `text`, after filtering
    pub fn contains_match(&self, text: &str) -> bool {
        !self.parse_text(text).is_empty()
    }

    /// Split `text` into fragment and match tokens covering all of it
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        tokenize(text, self.parse_text(text))
    }
}

/// Builder for [`Trie`]
///
/// Provides a fluent interface for configuring the matcher.
#[derive(Debug, Default)]
pub struct TrieBuilder {
    config: MatchConfig,
    keywords: Vec<String>,
}

impl TrieBuilder {
    /// Create a new builder with default settings and no keywords
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
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

    /// Add one keyword; empty keywords are accepted and ignored
    pub fn add_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// Add keywords in order
    pub fn add_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Insert all keywords and build failure links
    pub fn build(self) -> Result<Trie> {
        self.config.validate()?;

        let mut automaton = if self.config.case_insensitive {
            Automaton::case_insensitive()
        } else {
            Automaton::new()
        };

        let mut seen = HashSet::new();
        for keyword in &self.keywords {
            if let Some(limit) = self.config.max_keyword_len {
                if keyword.len() > limit {
                    log::warn!(
                        "skipping keyword of {} bytes (limit {})",
                        keyword.len(),
                        limit
                    );
                    continue;
                }
            }
            if self.config.duplicates == DuplicatePolicy::Deduplicate {
                let key = if self.config.case_insensitive {
                    keyword.to_ascii_lowercase()
                } else {
                    keyword.clone()
                };
                if !seen.insert(key) {
                    log::debug!("ignoring duplicate keyword {keyword:?}");
                    continue;
                }
            }
            automaton.insert(keyword);
        }
        let automaton = automaton.freeze();

        log::debug!(
            "built trie: {} keywords, {} states",
            automaton.automaton().keyword_count(),
            automaton.automaton().state_count()
        );

        Ok(Trie {
            automaton,
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchError;

    fn spans(emits: &[Emit]) -> Vec<(usize, usize, &str)> {
        emits
            .iter()
            .map(|e| (e.start(), e.end(), e.keyword()))
            .collect()
    }

    #[test]
    fn test_trie_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Trie>();
    }

    #[test]
    fn test_built_trie_scans_without_rebuild() {
        let trie = Trie::with_keywords(["he", "she"]).unwrap();
        assert!(trie.automaton().is_constructed());
        assert_eq!(spans(&trie.parse_text("she")), vec![(0, 2, "she"), (1, 2, "he")]);
        assert_eq!(
            trie.automaton().dump().to_string(),
            "root\n  h\n    e #0\n  s\n    h\n      e #1\n"
        );
    }

    #[test]
    fn test_duplicate_keywords_fire_twice() {
        let trie = Trie::with_keywords(["he", "she", "his", "he", "hers"]).unwrap();
        let emits = trie.parse_text("hehe");
        let ranked: Vec<(usize, usize, usize)> = emits
            .iter()
            .map(|e| (e.start(), e.end(), e.index()))
            .collect();
        assert_eq!(ranked, vec![(0, 1, 0), (0, 1, 3), (2, 3, 0), (2, 3, 3)]);
    }

    #[test]
    fn test_deduplicate_policy() {
        let trie = Trie::builder()
            .duplicates(DuplicatePolicy::Deduplicate)
            .add_keywords(["he", "she", "his", "he", "hers"])
            .build()
            .unwrap();
        assert_eq!(trie.keyword_count(), 4);
        assert_eq!(
            spans(&trie.parse_text("hehe")),
            vec![(0, 1, "he"), (2, 3, "he")]
        );
    }

    #[test]
    fn test_deduplicate_respects_case_folding() {
        let trie = Trie::builder()
            .case_insensitive()
            .duplicates(DuplicatePolicy::Deduplicate)
            .add_keywords(["Word", "word", "WORD"])
            .build()
            .unwrap();
        assert_eq!(trie.keyword_count(), 1);
        assert_eq!(spans(&trie.parse_text("a wOrD")), vec![(2, 5, "Word")]);
    }

    #[test]
    fn test_results_ordered_by_start() {
        let trie = Trie::with_keywords(["he", "she", "hers"]).unwrap();
        assert_eq!(
            spans(&trie.parse_text("ushers")),
            vec![(1, 3, "she"), (2, 3, "he"), (2, 5, "hers")]
        );
    }

    #[test]
    fn test_remove_overlaps_longest_wins() {
        // Equal lengths go to the later start: "bc" beats the leading "ab"
        let trie = Trie::builder()
            .remove_overlaps()
            .add_keywords(["a", "ab", "bab", "bc", "bca", "c", "caa"])
            .build()
            .unwrap();
        assert_eq!(
            spans(&trie.parse_text("abccab")),
            vec![(0, 0, "a"), (1, 2, "bc"), (3, 3, "c"), (4, 5, "ab")]
        );
    }

    #[test]
    fn test_whole_words() {
        let trie = Trie::builder()
            .only_whole_words()
            .add_keyword("cat")
            .build()
            .unwrap();
        assert!(trie.parse_text("concatenate").is_empty());
        assert_eq!(spans(&trie.parse_text("a cat!")), vec![(2, 4, "cat")]);
    }

    #[test]
    fn test_whole_words_before_overlap_removal() {
        // "catalog" would win on length but is not a whole word here
        let trie = Trie::builder()
            .only_whole_words()
            .remove_overlaps()
            .add_keywords(["cat", "catalog"])
            .build()
            .unwrap();
        assert!(trie.parse_text("catalogs").is_empty());
        assert_eq!(spans(&trie.parse_text("catalog")), vec![(0, 6, "catalog")]);
    }

    #[test]
    fn test_max_keyword_len_skips_long_keywords() {
        let config = MatchConfig {
            max_keyword_len: Some(3),
            ..Default::default()
        };
        let trie = Trie::builder()
            .config(config)
            .add_keywords(["abc", "abcd"])
            .build()
            .unwrap();
        assert_eq!(trie.keyword_count(), 1);
        assert_eq!(spans(&trie.parse_text("abcd")), vec![(0, 2, "abc")]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MatchConfig {
            max_keyword_len: Some(0),
            ..Default::default()
        };
        let result = Trie::builder().config(config).build();
        assert!(matches!(result, Err(MatchError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_parse_bytes_rejects_invalid_utf8() {
        let trie = Trie::with_keywords(["ab"]).unwrap();
        assert_eq!(trie.parse_bytes(b"xab").unwrap().len(), 1);
        assert!(matches!(
            trie.parse_bytes(&[0x61, 0xff]),
            Err(MatchError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_first_match_and_contains() {
        let trie = Trie::with_keywords(["lo", "hel"]).unwrap();
        assert_eq!(trie.first_match("hello").map(|e| e.start()), Some(0));
        assert!(trie.contains_match("yellow"));
        assert!(!trie.contains_match("world"));
        assert_eq!(trie.first_match("world"), None);
    }

    #[test]
    fn test_empty_keywords_and_empty_list() {
        let trie = Trie::with_keywords(["", ""]).unwrap();
        assert_eq!(trie.keyword_count(), 0);
        assert_eq!(trie.state_count(), 1);
        assert!(trie.parse_text("anything").is_empty());
        assert_eq!(trie.tokenize("anything"), vec![Token::Fragment("anything")]);
    }

    #[test]
    fn test_tokenize_with_matches() {
        let trie = Trie::builder()
            .remove_overlaps()
            .case_insensitive()
            .add_keywords(["hers", "his", "she", "he"])
            .build()
            .unwrap();
        let text = "Ushers and HIS hat";
        let tokens = trie.tokenize(text);
        let texts: Vec<&str> = tokens.iter().map(Token::text).collect();
        assert_eq!(texts, vec!["Us", "hers", " and ", "HIS", " hat"]);
        assert_eq!(tokens[1].emit().map(|e| e.keyword()), Some("hers"));
        assert_eq!(tokens[3].emit().map(|e| e.keyword()), Some("his"));
        assert_eq!(texts.concat(), text);
    }
}
