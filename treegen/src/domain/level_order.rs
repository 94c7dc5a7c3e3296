//! Level-order enumeration of an implicit complete n-ary tree
//!
//! Nodes are numbered 1, 2, 3, ... in level order, root first. Level `L` holds
//! `n^L` contiguous indices starting at `1 + sum(n^k for k in 0..L)`. Nothing
//! is materialized: both level boundaries and child placement are computed
//! from `(level, n)`.
//!
//! ```
//! use treegen::domain::{level_order_edges, Edge};
//!
//! let edges: Vec<Edge> = level_order_edges(2, 3).unwrap().collect();
//! assert_eq!(edges, vec![Edge::new(1, 2), Edge::new(1, 3), Edge::new(2, 4)]);
//! ```

use std::iter::FusedIterator;
use std::num::NonZeroU64;

use tracing::trace;

use crate::domain::{DomainError, Edge};

/// Uniform branching factor of the tree (number of children per node).
///
/// All level arithmetic saturates at `u64::MAX`; the saturated values are
/// only ever used as loop bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Branching(NonZeroU64);

impl Branching {
    /// Rejects a zero branching factor.
    pub fn new(n: u64) -> Result<Self, DomainError> {
        NonZeroU64::new(n)
            .map(Self)
            .ok_or_else(|| DomainError::invalid_argument("n", "branching factor must be at least 1"))
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// Number of nodes on `level`: `n^level`.
    pub fn level_len(self, level: u32) -> u64 {
        self.get().saturating_pow(level)
    }

    /// First index of `level`: `1 + sum(n^k for k in 0..level)`.
    pub fn level_start(self, level: u32) -> u64 {
        let n = self.get();
        if n == 1 {
            return 1 + u64::from(level);
        }
        // geometric series: (n^L - 1) / (n - 1)
        let n = u128::from(n);
        n.checked_pow(level)
            .and_then(|pow| u64::try_from((pow - 1) / (n - 1) + 1).ok())
            .unwrap_or(u64::MAX)
    }

    /// Last index of `level` (inclusive).
    pub fn level_end(self, level: u32) -> u64 {
        self.level_start(level)
            .saturating_add(self.level_len(level) - 1)
    }

    /// Level containing `index`, `None` for the invalid index 0.
    ///
    /// With `n == 1` every index is its own level, so indices beyond level
    /// `u32::MAX` also give `None`.
    pub fn level_of(self, index: u64) -> Option<u32> {
        if index == 0 {
            return None;
        }
        if self.get() == 1 {
            return u32::try_from(index - 1).ok();
        }
        let mut level = 0;
        while self.level_end(level) < index {
            level += 1;
        }
        Some(level)
    }

    /// Parent of `child`, `None` for the root and the invalid index 0.
    ///
    /// Children are handed out `n` at a time to parents in index order, so the
    /// k-th non-root node (0-based) belongs to parent `k / n + 1`.
    pub fn parent_of(self, child: u64) -> Option<u64> {
        (child >= 2).then(|| (child - 2) / self.get() + 1)
    }
}

impl TryFrom<u64> for Branching {
    type Error = DomainError;

    fn try_from(n: u64) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

/// Lazy stream of `(parent, child)` edges in level order, bounded by an edge budget.
///
/// Holds only the current and next level boundaries plus a cursor, so memory
/// use is constant regardless of how deep the enumeration goes.
#[derive(Debug, Clone)]
pub struct LevelOrderEdges {
    branching: Branching,
    budget: u64,
    emitted: u64,
    level: u32,
    cur_end: u64,
    next_start: u64,
    next_end: u64,
    parent: u64,
    // children already emitted for `parent`
    rank: u64,
    // children already emitted on the next level
    offset: u64,
}

impl LevelOrderEdges {
    /// Start a fresh enumeration from the root.
    ///
    /// `budget` is the maximum number of edges (not nodes) to emit.
    pub fn new(branching: u64, budget: u64) -> Result<Self, DomainError> {
        let branching = Branching::new(branching)?;
        let (next_start, next_end) = next_level_bounds(branching, 0, 1);
        Ok(Self {
            branching,
            budget,
            emitted: 0,
            level: 0,
            cur_end: 1,
            next_start,
            next_end,
            parent: 1,
            rank: 0,
            offset: 0,
        })
    }

    pub fn branching(&self) -> Branching {
        self.branching
    }

    /// Level of the parent side of the next edge.
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    pub fn remaining(&self) -> u64 {
        self.budget - self.emitted
    }

    fn advance_level(&mut self) {
        self.level += 1;
        self.parent = self.next_start;
        self.cur_end = self.next_end;
        self.offset = 0;
        let (next_start, next_end) = next_level_bounds(self.branching, self.level, self.cur_end);
        self.next_start = next_start;
        self.next_end = next_end;
        trace!(
            level = self.level,
            start = self.parent,
            end = self.cur_end,
            "advance level"
        );
    }
}

/// Index range of level `level + 1`, given the last index of `level`.
fn next_level_bounds(branching: Branching, level: u32, cur_end: u64) -> (u64, u64) {
    let next_start = cur_end.saturating_add(1);
    let next_end = next_start.saturating_add(branching.level_len(level + 1) - 1);
    (next_start, next_end)
}

impl Iterator for LevelOrderEdges {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        if self.emitted >= self.budget {
            return None;
        }
        if self.rank == self.branching.get() {
            self.rank = 0;
            self.parent += 1;
            if self.parent > self.cur_end {
                self.advance_level();
            }
        }

        let edge = Edge::new(self.parent, self.next_start + self.offset);
        self.offset += 1;
        self.rank += 1;
        self.emitted += 1;
        Some(edge)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for LevelOrderEdges {}

/// Enumerate at most `n_nodes` edges of the complete `n`-ary tree.
pub fn level_order_edges(n: u64, n_nodes: u64) -> Result<LevelOrderEdges, DomainError> {
    LevelOrderEdges::new(n, n_nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pairs(n: u64, n_nodes: u64) -> Vec<(u64, u64)> {
        level_order_edges(n, n_nodes)
            .expect("valid branching")
            .map(Into::into)
            .collect()
    }

    #[rstest]
    #[case(2, 3, vec![(1, 2), (1, 3), (2, 4)])]
    #[case(3, 4, vec![(1, 2), (1, 3), (1, 4), (2, 5)])]
    #[case(1, 3, vec![(1, 2), (2, 3), (3, 4)])]
    #[case(2, 0, vec![])]
    #[case(2, 6, vec![(1, 2), (1, 3), (2, 4), (2, 5), (3, 6), (3, 7)])]
    fn given_branching_and_budget_when_enumerating_then_yields_expected_edges(
        #[case] n: u64,
        #[case] n_nodes: u64,
        #[case] expected: Vec<(u64, u64)>,
    ) {
        assert_eq!(pairs(n, n_nodes), expected);
    }

    #[test]
    fn given_zero_branching_when_enumerating_then_invalid_argument() {
        let err = level_order_edges(0, 10).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument { name: "n", .. }));
    }

    #[test]
    fn given_budget_when_enumerating_then_size_hint_counts_down() {
        let mut edges = level_order_edges(3, 5).unwrap();
        assert_eq!(edges.size_hint(), (5, Some(5)));
        edges.next();
        edges.next();
        assert_eq!(edges.size_hint(), (3, Some(3)));
        assert_eq!(edges.remaining(), 3);
        assert_eq!(edges.by_ref().count(), 3);
        assert_eq!(edges.next(), None);
        assert_eq!(edges.emitted(), 5);
    }

    #[test]
    fn given_full_level_when_enumerating_then_level_advances() {
        let mut edges = level_order_edges(2, 100).unwrap();
        assert_eq!(edges.level(), 0);
        edges.by_ref().take(2).for_each(drop);
        assert_eq!(edges.level(), 0);
        edges.next();
        assert_eq!(edges.level(), 1);
    }

    #[rstest]
    #[case(1, &[1, 2, 3, 4, 5])]
    #[case(2, &[1, 2, 4, 8, 16])]
    #[case(3, &[1, 2, 5, 14, 41])]
    #[case(10, &[1, 2, 12, 112, 1112])]
    fn given_branching_when_level_start_then_matches_geometric_sum(
        #[case] n: u64,
        #[case] starts: &[u64],
    ) {
        let b = Branching::new(n).unwrap();
        for (level, expected) in starts.iter().enumerate() {
            assert_eq!(b.level_start(level as u32), *expected, "level {}", level);
        }
    }

    #[test]
    fn given_huge_level_when_level_start_then_saturates() {
        let b = Branching::new(1 << 40).unwrap();
        assert_eq!(b.level_start(2), (1 << 40) + 2);
        assert_eq!(b.level_start(3), u64::MAX);
        assert_eq!(b.level_end(5), u64::MAX);
    }

    #[rstest]
    #[case(2, 1, Some(0))]
    #[case(2, 3, Some(1))]
    #[case(2, 4, Some(2))]
    #[case(3, 13, Some(2))]
    #[case(3, 14, Some(3))]
    #[case(1, 7, Some(6))]
    #[case(1, u32::MAX as u64 + 1, Some(u32::MAX))]
    #[case(1, u32::MAX as u64 + 2, None)]
    #[case(2, u64::MAX, Some(63))]
    #[case(4, 0, None)]
    fn given_index_when_level_of_then_returns_level(
        #[case] n: u64,
        #[case] index: u64,
        #[case] expected: Option<u32>,
    ) {
        assert_eq!(Branching::new(n).unwrap().level_of(index), expected);
    }

    #[test]
    fn given_enumerated_edges_when_checking_parent_of_then_consistent() {
        for n in 1..=5 {
            let b = Branching::new(n).unwrap();
            assert_eq!(b.parent_of(1), None);
            for edge in level_order_edges(n, 200).unwrap() {
                assert_eq!(b.parent_of(edge.child), Some(edge.parent), "n={}", n);
            }
        }
    }
}
