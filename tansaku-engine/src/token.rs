//! Partitioning text into fragments and matches

use tansaku_core::{Emit, Intervalable};

/// A slice of the scanned text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text between matches
    Fragment(&'a str),
    /// Text covered by a match
    Match(&'a str, Emit),
}

impl<'a> Token<'a> {
    /// The text slice this token covers
    pub fn text(&self) -> &'a str {
        match self {
            Token::Fragment(text) | Token::Match(text, _) => *text,
        }
    }

    /// The emit behind a match token
    pub fn emit(&self) -> Option<&Emit> {
        match self {
            Token::Fragment(_) => None,
            Token::Match(_, emit) => Some(emit),
        }
    }

    /// Whether this token is a match
    pub fn is_match(&self) -> bool {
        matches!(self, Token::Match(..))
    }
}

/// Split `text` around `emits`, which must be sorted by ascending start
///
/// Concatenating the token texts reproduces `text` exactly. An emit that
/// starts inside an earlier match is skipped.
pub fn tokenize<'a>(text: &'a str, emits: Vec<Emit>) -> Vec<Token<'a>> {
    let mut tokens = Vec::with_capacity(emits.len() * 2 + 1);
    let mut next = 0;

    for emit in emits {
        if emit.start() < next {
            continue;
        }
        if emit.start() > next {
            tokens.push(Token::Fragment(&text[next..emit.start()]));
        }
        next = emit.end() + 1;
        tokens.push(Token::Match(&text[emit.range()], emit));
    }

    if next < text.len() {
        tokens.push(Token::Fragment(&text[next..]));
    }
    tokens
}
