//! Filing pooled points under the octagon edge they lie outside of.

use nalgebra::Vector2;

use super::types::{Candidate, EdgeCandidates};
use crate::geometry::{cross, dot, Point};

/// File each pooled point under the first edge (in hull order) it lies on or
/// outside of, keeping every edge's list sorted by position along the edge.
///
/// - `hull` is the octagon, `dirs[j]` the unit direction of edge `j → j+1`.
/// - A point strictly on the clockwise side of edge `j` is filed there.
/// - A point on the line of edge `j` is filed there only if it lies between
///   the edge's endpoints; past either end it is tested against later edges.
/// - Points on the inner side of every edge are interior and dropped.
/// - Copies of any octagon vertex, and of a point already filed on the same
///   edge, are dropped too.
///
/// A two-vertex octagon has both edges over the same segment. Points on that
/// segment go to the edge with no outside candidates, edge 0 when both or
/// neither have some.
///
/// The side test uses the raw edge vector, which has the sign of
/// `cross(dirs[j], p − hull[j])` without the rounding of the unit direction.
pub fn classify_candidates(
    pool: &[Point],
    hull: &[Point],
    dirs: &[Vector2<f64>],
) -> Vec<EdgeCandidates> {
    let n = hull.len();
    debug_assert_eq!(dirs.len(), n);
    let mut lists = vec![EdgeCandidates::new(); n];
    let mut on_segment: Vec<Point> = Vec::new();
    for p in pool {
        if hull.contains(p) {
            continue;
        }
        if n == 2 && edge_position(hull, 0, p) == (0.0, true) {
            on_segment.push(*p);
            continue;
        }
        if let Some(j) = (0..n).find(|&j| on_or_outside(hull, j, p)) {
            file(&mut lists[j], hull[j], dirs[j], p);
        }
    }
    if !on_segment.is_empty() {
        let j = if !lists[0].is_empty() && lists[1].is_empty() { 1 } else { 0 };
        for p in &on_segment {
            file(&mut lists[j], hull[j], dirs[j], p);
        }
    }
    lists
}

fn file(list: &mut EdgeCandidates, start: Point, dir: Vector2<f64>, p: &Point) {
    list.insert_sorted(Candidate {
        point: *p,
        along: dot(dir, p - start),
    });
}

/// Signed side of `p` against edge `j` (negative: outside) and whether its
/// projection falls between the edge's endpoints.
fn edge_position(hull: &[Point], j: usize, p: &Point) -> (f64, bool) {
    let edge = hull[(j + 1) % hull.len()] - hull[j];
    let b = p - hull[j];
    let t = dot(edge, b);
    (cross(edge, b), 0.0 <= t && t <= dot(edge, edge))
}

fn on_or_outside(hull: &[Point], j: usize, p: &Point) -> bool {
    let (side, within) = edge_position(hull, j, p);
    side < 0.0 || (side == 0.0 && within)
}
