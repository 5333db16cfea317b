//! Closed position ranges over a text

use crate::error::{CoreError, Result};
use std::cmp::Ordering;

/// Anything that occupies a closed range `[start, end]` of text positions
///
/// The interval tree is generic over this trait so it can index plain
/// intervals as well as matches carrying a keyword payload.
pub trait Intervalable {
    /// First position covered (inclusive)
    fn start(&self) -> usize;

    /// Last position covered (inclusive)
    fn end(&self) -> usize;

    /// Number of positions covered
    fn size(&self) -> usize {
        self.end() - self.start() + 1
    }

    /// Whether the two ranges share at least one position
    fn overlaps_with<I: Intervalable + ?Sized>(&self, other: &I) -> bool {
        self.start() <= other.end() && self.end() >= other.start()
    }

    /// Whether `point` lies inside the range
    fn overlaps_with_point(&self, point: usize) -> bool {
        self.start() <= point && point <= self.end()
    }
}

/// Immutable closed interval `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    start: usize,
    end: usize,
}

impl Interval {
    /// Create a new interval
    ///
    /// The caller guarantees `start <= end`; use [`Interval::try_new`] for
    /// untrusted input.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "interval start must not exceed end");
        Self { start, end }
    }

    /// Create a new interval, rejecting `start > end`
    pub fn try_new(start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(CoreError::InvertedInterval { start, end });
        }
        Ok(Self { start, end })
    }
}

impl Intervalable for Interval {
    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }
}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Interval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_is_inclusive() {
        assert_eq!(Interval::new(0, 0).size(), 1);
        assert_eq!(Interval::new(3, 7).size(), 5);
    }

    #[test]
    fn test_try_new_rejects_inverted() {
        assert_eq!(
            Interval::try_new(5, 2),
            Err(CoreError::InvertedInterval { start: 5, end: 2 })
        );
        assert!(Interval::try_new(2, 2).is_ok());
    }

    #[test]
    fn test_overlap_predicates() {
        let a = Interval::new(1, 3);
        assert!(a.overlaps_with(&Interval::new(3, 5)));
        assert!(a.overlaps_with(&Interval::new(0, 1)));
        assert!(a.overlaps_with(&Interval::new(2, 2)));
        assert!(!a.overlaps_with(&Interval::new(4, 6)));

        assert!(a.overlaps_with_point(1));
        assert!(a.overlaps_with_point(3));
        assert!(!a.overlaps_with_point(0));
        assert!(!a.overlaps_with_point(4));
    }

    #[test]
    fn test_ordering_by_start_then_end() {
        let mut intervals = vec![
            Interval::new(4, 5),
            Interval::new(1, 9),
            Interval::new(1, 2),
        ];
        intervals.sort();
        assert_eq!(
            intervals,
            vec![
                Interval::new(1, 2),
                Interval::new(1, 9),
                Interval::new(4, 5)
            ]
        );
    }
}
