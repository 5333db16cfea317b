//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use tansaku_engine::{Emit, Intervalable, Token};

/// Plain text formatter
///
/// Matches print as `source:start..=end<TAB>keyword`, one per line, and
/// counts as `source:N`.
/// Tokenized sources print with each match wrapped in brackets.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_match(&mut self, source: &str, emit: &Emit, _matched: &str) -> Result<()> {
        writeln!(
            self.writer,
            "{source}:{}..={}\t{}",
            emit.start(),
            emit.end(),
            emit.keyword()
        )?;
        Ok(())
    }

    fn format_count(&mut self, source: &str, count: usize) -> Result<()> {
        writeln!(self.writer, "{source}:{count}")?;
        Ok(())
    }

    fn format_tokens(&mut self, source: &str, tokens: &[Token<'_>]) -> Result<()> {
        write!(self.writer, "{source}: ")?;
        for token in tokens {
            match token {
                Token::Fragment(text) => write!(self.writer, "{text}")?,
                Token::Match(text, _) => write!(self.writer, "[{text}]")?,
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
