//! Output formatting module

use anyhow::Result;
use tansaku_engine::{Emit, Token};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single match found in `source`
    fn format_match(&mut self, source: &str, emit: &Emit, matched: &str) -> Result<()>;

    /// Format and output the number of matches found in `source`
    fn format_count(&mut self, source: &str, count: usize) -> Result<()>;

    /// Format and output the tokenization of one source
    fn format_tokens(&mut self, source: &str, tokens: &[Token<'_>]) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
