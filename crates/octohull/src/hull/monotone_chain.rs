//! Baseline hull for cross-checking and benchmarking the octagon path.

use std::cmp::Ordering;

use crate::geometry::{turn, Point};

/// Hull by Andrew's algorithm: lower then upper chain over the points sorted
/// by `(x, y)`, counterclockwise from the lexicographically smallest point.
///
/// Exact duplicates are merged and collinear boundary points dropped, so on
/// inputs without collinear boundary points it returns the same cycle as
/// `find_hull`.
pub fn monotone_chain(points: &[Point]) -> Vec<Point> {
    let mut sorted: Vec<Point> = points.to_vec();
    sorted.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(Ordering::Equal)
            .then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
    });
    sorted.dedup();
    if sorted.len() < 3 {
        return sorted;
    }
    let mut hull = half_chain(sorted.iter());
    hull.extend(half_chain(sorted.iter().rev()));
    hull
}

/// Left-turning chain over `points`, without its last point (the first point
/// of the opposite chain).
fn half_chain<'a>(points: impl Iterator<Item = &'a Point>) -> Vec<Point> {
    let mut chain: Vec<Point> = Vec::new();
    for &p in points {
        while let [.., a, b] = chain.as_slice() {
            if turn(a, b, &p) > 0.0 {
                break;
            }
            chain.pop();
        }
        chain.push(p);
    }
    chain.pop();
    chain
}
