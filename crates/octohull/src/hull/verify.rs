//! Post-hoc checks on a hull: orientation, convexity, coverage, area.
//!
//! Used by the test-suite and by the CLI `--verify` flag; nothing here is on
//! the `find_hull` path except `polygon_area` (for `try_find_hull`).

use crate::error::HullError;
use crate::geometry::{cross, turn, Point};

/// Shoelace area; positive for counterclockwise order.
pub fn polygon_area(hull: &[Point]) -> f64 {
    let n = hull.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| {
            let p = hull[i];
            let q = hull[(i + 1) % n];
            p.x * q.y - q.x * p.y
        })
        .sum();
    0.5 * twice
}

/// First vertex `i` where the path `v[i-1] → v[i] → v[i+1]` (cyclic) turns
/// clockwise, if any.
pub fn first_clockwise_turn(hull: &[Point]) -> Option<usize> {
    let n = hull.len();
    if n < 3 {
        return None;
    }
    (0..n).find(|&i| turn(&hull[(i + n - 1) % n], &hull[i], &hull[(i + 1) % n]) < 0.0)
}

#[inline]
pub fn is_convex_ccw(hull: &[Point]) -> bool {
    first_clockwise_turn(hull).is_none()
}

/// Whether `p` lies in the closed hull, allowing `eps` of distance outside.
///
/// Hulls with fewer than 3 vertices are treated as a point or a segment.
pub fn contains(hull: &[Point], p: &Point, eps: f64) -> bool {
    match hull {
        [] => false,
        [a] => (p - a).norm() <= eps,
        [a, b] => {
            let ab = b - a;
            let len2 = ab.norm_squared();
            if len2 == 0.0 {
                return (p - a).norm() <= eps;
            }
            let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
            (p - (a + ab * t)).norm() <= eps
        }
        _ => {
            let n = hull.len();
            (0..n).all(|i| {
                let e = hull[(i + 1) % n] - hull[i];
                let len = e.norm();
                // Coincident consecutive vertices carry no half-plane.
                len == 0.0 || cross(e, p - hull[i]) / len >= -eps
            })
        }
    }
}

/// Check that `hull` is convex and counterclockwise and covers every point.
pub fn verify_hull(points: &[Point], hull: &[Point], eps: f64) -> Result<(), HullError> {
    if let Some(index) = first_clockwise_turn(hull) {
        return Err(HullError::NotConvex { index });
    }
    match points.iter().position(|p| !contains(hull, p, eps)) {
        Some(index) => Err(HullError::Uncovered { index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn area_sign_follows_orientation() {
        let sq = unit_square();
        assert!((polygon_area(&sq) - 1.0).abs() < 1e-12);
        let cw: Vec<Point> = sq.iter().rev().copied().collect();
        assert!((polygon_area(&cw) + 1.0).abs() < 1e-12);
        assert_eq!(polygon_area(&sq[..2]), 0.0);
    }

    #[test]
    fn clockwise_order_is_flagged() {
        let sq = unit_square();
        assert!(is_convex_ccw(&sq));
        let cw: Vec<Point> = sq.iter().rev().copied().collect();
        assert_eq!(first_clockwise_turn(&cw), Some(0));
    }

    #[test]
    fn containment_with_tolerance() {
        let sq = unit_square();
        assert!(contains(&sq, &Point::new(0.5, 0.5), 0.0));
        assert!(contains(&sq, &Point::new(1.0, 0.5), 0.0));
        assert!(!contains(&sq, &Point::new(1.1, 0.5), 1e-9));
        assert!(contains(&sq, &Point::new(1.0 + 1e-12, 0.5), 1e-9));
    }

    #[test]
    fn containment_in_segment_and_point_hulls() {
        let seg = [Point::new(0.0, 0.0), Point::new(2.0, 0.0)];
        assert!(contains(&seg, &Point::new(1.0, 0.0), 1e-12));
        assert!(!contains(&seg, &Point::new(3.0, 0.0), 1e-12));
        assert!(contains(&seg[..1], &Point::new(0.0, 0.0), 0.0));
        assert!(!contains(&[], &Point::new(0.0, 0.0), 1.0));
    }

    #[test]
    fn verify_reports_uncovered_point() {
        let sq = unit_square();
        let pts = [Point::new(0.5, 0.5), Point::new(2.0, 2.0)];
        assert_eq!(
            verify_hull(&pts, &sq, 1e-9),
            Err(HullError::Uncovered { index: 1 })
        );
        assert_eq!(verify_hull(&pts[..1], &sq, 1e-9), Ok(()));
    }
}
