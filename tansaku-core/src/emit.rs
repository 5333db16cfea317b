//! Keyword occurrences reported by a scan

use crate::interval::{Interval, Intervalable};
use std::fmt;

/// A keyword occurrence at a closed byte range of the scanned text
///
/// `index` is the keyword's insertion rank, so two identical keywords
/// inserted twice yield two distinct emits at the same position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Emit {
    interval: Interval,
    keyword: String,
    index: usize,
}

impl Emit {
    /// Create a new emit covering `[start, end]`
    pub fn new(start: usize, end: usize, keyword: impl Into<String>, index: usize) -> Self {
        Self {
            interval: Interval::new(start, end),
            keyword: keyword.into(),
            index,
        }
    }

    /// The matched keyword as inserted
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Insertion rank of the matched keyword
    pub fn index(&self) -> usize {
        self.index
    }

    /// The covered range
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Byte range usable for slicing the scanned text
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start()..self.end() + 1
    }
}

impl Intervalable for Emit {
    fn start(&self) -> usize {
        self.interval.start()
    }

    fn end(&self) -> usize {
        self.interval.end()
    }
}

impl fmt::Display for Emit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}={}", self.start(), self.end(), self.keyword)
    }
}
