//! Keyword matching on top of an Aho-Corasick automaton
//!
//! This crate turns the raw automaton from `tansaku-core` into a matcher
//! with a configuration: optional whole-word filtering, longest-match overlap
//! removal, ASCII case folding, and tokenization of the input into fragment
//! and match slices.
//!
//! # Example
//!
//! ```rust
//! use tansaku_engine::{Token, Trie};
//!
//! let trie = Trie::builder()
//!     .remove_overlaps()
//!     .case_insensitive()
//!     .add_keywords(["hers", "his", "she", "he"])
//!     .build()
//!     .unwrap();
//!
//! let tokens = trie.tokenize("Ushers");
//! assert_eq!(tokens[0], Token::Fragment("Us"));
//! assert_eq!(tokens[1].text(), "hers");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod filter;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod token;
pub mod trie;

// Re-export key types
pub use config::{DuplicatePolicy, MatchConfig, MatchConfigBuilder};
pub use error::{MatchError, Result};
pub use token::Token;
pub use trie::{Trie, TrieBuilder};

// Re-export from core for convenience
pub use tansaku_core::{Emit, Interval, Intervalable};
