//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tansaku_engine::{Emit, Intervalable, Token};

/// JSON formatter - collects records and writes one JSON array on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    matches: Vec<MatchData>,
    counts: Vec<CountData>,
    documents: Vec<TokenizedData>,
}

/// A single match
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchData {
    /// Source the match was found in
    pub source: String,
    /// Byte offset of the first matched byte
    pub start: usize,
    /// Byte offset of the last matched byte (inclusive)
    pub end: usize,
    /// The keyword as it was added
    pub keyword: String,
    /// Insertion rank of the keyword
    pub index: usize,
    /// The matched text as it appears in the source
    pub text: String,
}

/// Number of matches in one source
#[derive(Debug, Serialize, Deserialize)]
pub struct CountData {
    /// Source that was scanned
    pub source: String,
    /// Matches reported for it
    pub count: usize,
}

/// A tokenized source
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizedData {
    /// Source that was tokenized
    pub source: String,
    /// Tokens in text order
    pub tokens: Vec<TokenData>,
}

/// A single token
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenData {
    /// Token text
    pub text: String,
    /// Matched keyword, absent for fragments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            matches: Vec::new(),
            counts: Vec::new(),
            documents: Vec::new(),
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_match(&mut self, source: &str, emit: &Emit, matched: &str) -> Result<()> {
        self.matches.push(MatchData {
            source: source.to_string(),
            start: emit.start(),
            end: emit.end(),
            keyword: emit.keyword().to_string(),
            index: emit.index(),
            text: matched.to_string(),
        });
        Ok(())
    }

    fn format_count(&mut self, source: &str, count: usize) -> Result<()> {
        self.counts.push(CountData {
            source: source.to_string(),
            count,
        });
        Ok(())
    }

    fn format_tokens(&mut self, source: &str, tokens: &[Token<'_>]) -> Result<()> {
        self.documents.push(TokenizedData {
            source: source.to_string(),
            tokens: tokens
                .iter()
                .map(|token| TokenData {
                    text: token.text().to_string(),
                    keyword: token.emit().map(|emit| emit.keyword().to_string()),
                })
                .collect(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if !self.documents.is_empty() {
            let documents = std::mem::take(&mut self.documents);
            self.write_value(&documents)?;
        } else if !self.counts.is_empty() {
            let counts = std::mem::take(&mut self.counts);
            self.write_value(&counts)?;
        } else {
            let matches = std::mem::take(&mut self.matches);
            self.write_value(&matches)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
