//! Per-edge candidate bookkeeping.

use crate::geometry::Point;

/// A point filed against one edge, with its position along that edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub point: Point,
    /// `dot(unit_dir, point − edge_start)`; sort key only.
    pub along: f64,
}

/// Candidates of one edge, ascending by `along`.
#[derive(Clone, Debug, Default)]
pub struct EdgeCandidates {
    entries: Vec<Candidate>,
}

impl EdgeCandidates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert before the first entry whose `along` is not smaller, so a newer
    /// candidate lands ahead of older ones with the same key.
    ///
    /// Returns `false` (and inserts nothing) when an equal point is already
    /// filed; equal points always carry equal keys, so only that run is scanned.
    pub fn insert_sorted(&mut self, cand: Candidate) -> bool {
        let k = self.entries.partition_point(|e| e.along < cand.along);
        let duplicate = self.entries[k..]
            .iter()
            .take_while(|e| e.along == cand.along)
            .any(|e| e.point == cand.point);
        if duplicate {
            return false;
        }
        self.entries.insert(k, cand);
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Candidate] {
        &self.entries
    }
}
