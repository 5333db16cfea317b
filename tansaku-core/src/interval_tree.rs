//! Static median-split interval tree
//!
//! [`IntervalTree`] is built once from a fixed collection and answers
//! "which intervals overlap X" queries. Each node holds the intervals that
//! cover its median point; intervals entirely left or right of the median
//! are pushed into the corresponding subtree.
//!
//! Intervals are identified by their position in the collection the tree was
//! built from, so structurally equal items (for example the same keyword
//! inserted twice) stay distinguishable.

use crate::interval::Intervalable;

#[derive(Debug)]
struct Node {
    median: usize,
    /// Indices of intervals covering `median`
    at_median: Vec<usize>,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn build<T: Intervalable>(items: &[T], indices: Vec<usize>) -> Option<Box<Node>> {
        if indices.is_empty() {
            return None;
        }

        let median = determine_median(items, &indices);
        let mut at_median = Vec::new();
        let mut to_left = Vec::new();
        let mut to_right = Vec::new();

        for idx in indices {
            let item = &items[idx];
            if item.end() < median {
                to_left.push(idx);
            } else if item.start() > median {
                to_right.push(idx);
            } else {
                at_median.push(idx);
            }
        }

        Some(Box::new(Node {
            median,
            at_median,
            left: Node::build(items, to_left),
            right: Node::build(items, to_right),
        }))
    }

    fn collect_overlaps<T: Intervalable, Q: Intervalable + ?Sized>(
        &self,
        items: &[T],
        query: &Q,
        out: &mut Vec<usize>,
    ) {
        if self.median < query.start() {
            // Only intervals at the median reaching past query.start can overlap
            if let Some(right) = &self.right {
                right.collect_overlaps(items, query, out);
            }
        } else if self.median > query.end() {
            if let Some(left) = &self.left {
                left.collect_overlaps(items, query, out);
            }
        } else {
            if let Some(left) = &self.left {
                left.collect_overlaps(items, query, out);
            }
            if let Some(right) = &self.right {
                right.collect_overlaps(items, query, out);
            }
        }

        out.extend(
            self.at_median
                .iter()
                .copied()
                .filter(|&idx| items[idx].overlaps_with(query)),
        );
    }
}

/// Midpoint of the span covered by the given intervals
fn determine_median<T: Intervalable>(items: &[T], indices: &[usize]) -> usize {
    let lowest = indices
        .iter()
        .map(|&idx| items[idx].start())
        .min()
        .unwrap_or(0);
    let highest = indices
        .iter()
        .map(|&idx| items[idx].end())
        .max()
        .unwrap_or(0);
    lowest + (highest - lowest) / 2
}

/// A static interval tree over an owned collection
#[derive(Debug)]
pub struct IntervalTree<T> {
    items: Vec<T>,
    root: Option<Box<Node>>,
}

impl<T: Intervalable> IntervalTree<T> {
    /// Build the tree from a collection of intervals
    pub fn new(items: Vec<T>) -> Self {
        let indices = (0..items.len()).collect();
        let root = Node::build(&items, indices);
        Self { items, root }
    }

    /// Number of intervals in the tree
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the tree contains no intervals
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All intervals overlapping `query`, in collection order
    pub fn find_overlaps<Q: Intervalable + ?Sized>(&self, query: &Q) -> Vec<&T> {
        self.overlapping_indices(query)
            .into_iter()
            .map(|idx| &self.items[idx])
            .collect()
    }

    fn overlapping_indices<Q: Intervalable + ?Sized>(&self, query: &Q) -> Vec<usize> {
        let mut found = Vec::new();
        if let Some(root) = &self.root {
            root.collect_overlaps(&self.items, query, &mut found);
        }
        found.sort_unstable();
        found
    }

    /// Reduce the collection to a pairwise non-overlapping subset
    ///
    /// Intervals are visited longest first; among equal sizes the one
    /// starting later goes first. Every surviving interval removes all others
    /// overlapping it. The result is ordered by ascending start.
    pub fn remove_overlaps(self) -> Vec<T> {
        let count = self.items.len();
        let mut order: Vec<usize> = (0..count).collect();
        order.sort_by(|&a, &b| {
            let (a, b) = (&self.items[a], &self.items[b]);
            b.size()
                .cmp(&a.size())
                .then_with(|| b.start().cmp(&a.start()))
        });

        let mut removed = vec![false; count];
        for idx in order {
            if removed[idx] {
                continue;
            }
            for other in self.overlapping_indices(&self.items[idx]) {
                if other != idx {
                    removed[other] = true;
                }
            }
        }

        let mut survivors: Vec<T> = self
            .items
            .into_iter()
            .zip(removed)
            .filter_map(|(item, removed)| (!removed).then_some(item))
            .collect();
        survivors.sort_by_key(|item| item.start());
        survivors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Interval;

    fn iv(start: usize, end: usize) -> Interval {
        Interval::new(start, end)
    }

    #[test]
    fn test_empty_tree() {
        let tree: IntervalTree<Interval> = IntervalTree::new(Vec::new());
        assert!(tree.is_empty());
        assert!(tree.find_overlaps(&iv(0, 10)).is_empty());
        assert!(tree.remove_overlaps().is_empty());
    }

    #[test]
    fn test_find_overlaps() {
        let tree = IntervalTree::new(vec![
            iv(0, 2),
            iv(1, 3),
            iv(2, 4),
            iv(3, 5),
            iv(4, 6),
            iv(5, 7),
        ]);
        assert_eq!(tree.len(), 6);

        let overlaps = tree.find_overlaps(&iv(1, 3));
        assert_eq!(overlaps, vec![&iv(0, 2), &iv(1, 3), &iv(2, 4), &iv(3, 5)]);

        let overlaps = tree.find_overlaps(&iv(7, 9));
        assert_eq!(overlaps, vec![&iv(5, 7)]);

        assert!(tree.find_overlaps(&iv(8, 9)).is_empty());
    }

    #[test]
    fn test_disjoint_halves_split_around_empty_median() {
        let tree = IntervalTree::new(vec![iv(0, 0), iv(10, 10)]);
        assert_eq!(tree.find_overlaps(&iv(0, 0)), vec![&iv(0, 0)]);
        assert_eq!(tree.find_overlaps(&iv(9, 12)), vec![&iv(10, 10)]);
        assert!(tree.find_overlaps(&iv(3, 7)).is_empty());
    }

    #[test]
    fn test_remove_overlaps_prefers_longer() {
        let tree = IntervalTree::new(vec![iv(0, 2), iv(4, 5), iv(2, 3)]);
        assert_eq!(tree.remove_overlaps(), vec![iv(0, 2), iv(4, 5)]);
    }

    #[test]
    fn test_remove_overlaps_equal_size_prefers_later_start() {
        let tree = IntervalTree::new(vec![iv(0, 1), iv(1, 2)]);
        assert_eq!(tree.remove_overlaps(), vec![iv(1, 2)]);
    }

    #[test]
    fn test_remove_overlaps_keeps_first_of_identical() {
        let tree = IntervalTree::new(vec![iv(3, 4), iv(3, 4)]);
        assert_eq!(tree.remove_overlaps(), vec![iv(3, 4)]);
    }

    #[test]
    fn test_remove_overlaps_nested() {
        let tree = IntervalTree::new(vec![iv(2, 3), iv(0, 9), iv(5, 5)]);
        assert_eq!(tree.remove_overlaps(), vec![iv(0, 9)]);
    }
}
