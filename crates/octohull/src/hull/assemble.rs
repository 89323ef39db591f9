//! Drives the hull phases; table adapters and the checked entry point.

use nalgebra::MatrixXx2;

use super::classify::classify_candidates;
use super::extremes::{find_extremes, Octagon};
use super::frame::edge_frame;
use super::refine::{refine_chain, splice_edge};
use super::verify::polygon_area;
use crate::error::HullError;
use crate::geometry::{points_from_rows, rows_from_points, Point};

/// Convex hull of `points`, counterclockwise, starting at the min-X extreme.
///
/// Pre: none; duplicates and any order are fine. The input is not modified.
/// Post: no clockwise turn, no repeated vertex, and every input point is a
/// hull vertex, on the hull boundary, or strictly inside. Input points lying
/// on a hull side are kept as collinear vertices.
///
/// Degenerate input: two distinct extrema still form a two-edge octagon and
/// are refined like any other; with fewer (empty input, all points equal) the
/// octagon is returned as is. Non-finite coordinates are not reported; use
/// [`try_find_hull`] for that.
pub fn find_hull(points: &[Point]) -> Vec<Point> {
    let Octagon { mut hull, pool } = find_extremes(points);
    if hull.len() < 2 {
        tracing::debug!(input = points.len(), vertices = hull.len(), "degenerate octagon");
        return hull;
    }
    let octagon = hull.len();
    let dirs = edge_frame(&hull);
    let lists = classify_candidates(&pool, &hull, &dirs);
    let candidates: usize = lists.iter().map(|l| l.len()).sum();

    // Last edge first: splicing after edge j never moves vertices 0..=j.
    for j in (0..octagon).rev() {
        let list = &lists[j];
        if list.is_empty() {
            continue;
        }
        let start = hull[j];
        let end = hull[(j + 1) % octagon];
        let survivors = refine_chain(start, list.as_slice(), end);
        splice_edge(&mut hull, j, survivors);
    }
    tracing::debug!(
        input = points.len(),
        octagon,
        candidates,
        vertices = hull.len(),
        "find_hull"
    );
    hull
}

/// [`find_hull`] over an N×2 table (column 0 = x, column 1 = y).
pub fn find_hull_table(table: &MatrixXx2<f64>) -> MatrixXx2<f64> {
    let points: Vec<Point> = table
        .row_iter()
        .map(|row| Point::new(row[0], row[1]))
        .collect();
    let hull = find_hull(&points);
    MatrixXx2::from_fn(hull.len(), |r, c| hull[r][c])
}

/// [`find_hull`] over `[x, y]` rows.
pub fn find_hull_rows(rows: &[[f64; 2]]) -> Vec<[f64; 2]> {
    rows_from_points(&find_hull(&points_from_rows(rows)))
}

/// Checked [`find_hull`]: rejects non-finite coordinates, fewer than 3
/// distinct points, and collinear inputs whose hull has no area.
pub fn try_find_hull(points: &[Point]) -> Result<Vec<Point>, HullError> {
    if let Some((index, p)) = points
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFinite {
            index,
            x: p.x,
            y: p.y,
        });
    }
    let distinct = count_distinct(points, 3);
    if distinct < 3 {
        return Err(HullError::TooFewPoints { distinct });
    }
    let hull = find_hull(points);
    if hull.len() < 3 || polygon_area(&hull) <= 0.0 {
        return Err(HullError::Degenerate {
            vertices: hull.len(),
        });
    }
    Ok(hull)
}

/// Number of distinct points, counting stops at `cap`.
fn count_distinct(points: &[Point], cap: usize) -> usize {
    let mut seen: Vec<Point> = Vec::with_capacity(cap);
    for p in points {
        if !seen.contains(p) {
            seen.push(*p);
            if seen.len() == cap {
                break;
            }
        }
    }
    seen.len()
}
