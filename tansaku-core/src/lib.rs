//! Aho-Corasick automaton for multi-keyword matching
//!
//! This crate holds the deterministic algorithmic core: a keyword trie with
//! breadth-first failure links, the linear-time scan over a byte sequence,
//! and a static interval tree used to reduce overlapping matches to a
//! non-overlapping subset. It has no required dependencies and performs no
//! I/O or logging; configuration and post-processing live in
//! `tansaku-engine`.
//!
//! # Example
//!
//! ```rust
//! use tansaku_core::{Automaton, Intervalable};
//!
//! let mut automaton = Automaton::new();
//! for keyword in ["he", "she", "his", "hers"] {
//!     automaton.insert(keyword);
//! }
//! automaton.build();
//!
//! let emits = automaton.scan("ushers".bytes()).unwrap();
//! let found: Vec<_> = emits.iter().map(|e| (e.start(), e.keyword())).collect();
//! assert_eq!(found, vec![(2, "he"), (1, "she"), (2, "hers")]);
//! ```

#![warn(missing_docs)]

pub mod automaton;
pub mod emit;
pub mod error;
pub mod interval;
pub mod interval_tree;
pub mod state;

pub use automaton::{Automaton, BuiltAutomaton, TrieDump};
pub use emit::Emit;
pub use error::{CoreError, Result};
pub use interval::{Interval, Intervalable};
pub use interval_tree::IntervalTree;
pub use state::{KeywordId, State, StateId};
