//! Concavity elimination on one edge's candidate chain.
//!
//! The chain is `start, c_0, …, c_{k-1}, end` with candidates sorted along the
//! edge. Vertices are visited from the one before `end` back toward `start`.
//! A vertex turning clockwise against its neighbours is removed, and the
//! vertex that slides into its place (the old forward neighbour) is examined
//! again against the same backward neighbour; when that neighbour is `end`
//! itself the walk just moves back. The surviving forward part is kept on a
//! stack, so every candidate is pushed and popped at most once.

use super::types::Candidate;
use crate::geometry::{turn, Point};

/// Candidates of one edge that lie on the final hull, in order along the edge.
///
/// A single candidate is always on the hull and returned without a test.
pub fn refine_chain(start: Point, candidates: &[Candidate], end: Point) -> Vec<Point> {
    match candidates {
        [] => return Vec::new(),
        [only] => return vec![only.point],
        _ => {}
    }
    let prev_of = |i: usize| if i == 0 { start } else { candidates[i - 1].point };

    // Reversed suffix of the chain; `end` stays at the bottom.
    let mut kept: Vec<Point> = Vec::with_capacity(candidates.len() + 1);
    kept.push(end);
    for i in (0..candidates.len()).rev() {
        let prev = prev_of(i);
        let mut cur = candidates[i].point;
        loop {
            let next = kept[kept.len() - 1];
            if turn(&prev, &cur, &next) >= 0.0 {
                kept.push(cur);
                break;
            }
            // `end` at the bottom is never popped.
            if kept.len() == 1 {
                break;
            }
            // `cur` dropped; its forward neighbour is re-examined.
            let Some(top) = kept.pop() else { break };
            cur = top;
        }
    }
    kept.into_iter().skip(1).rev().collect()
}

/// Insert the refined candidates of edge `edge` right after its start vertex.
///
/// Edges must be spliced from the last one back to the first so that the
/// indices of edges still to be processed do not move.
pub fn splice_edge(hull: &mut Vec<Point>, edge: usize, survivors: Vec<Point>) {
    let at = edge + 1;
    hull.splice(at..at, survivors);
}
