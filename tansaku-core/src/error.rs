//! Core error types (deterministic only)

use std::fmt;

/// Core algorithm errors (no I/O, no external failures)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Scan attempted before failure links were built
    NotConstructed,
    /// Interval whose start lies after its end
    InvertedInterval {
        /// Requested start position
        start: usize,
        /// Requested end position
        end: usize,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::NotConstructed => write!(f, "automaton failure links have not been built"),
            CoreError::InvertedInterval { start, end } => {
                write!(f, "interval start {start} is after end {end}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            CoreError::NotConstructed.to_string(),
            "automaton failure links have not been built"
        );
        assert_eq!(
            CoreError::InvertedInterval { start: 4, end: 2 }.to_string(),
            "interval start 4 is after end 2"
        );
    }
}
