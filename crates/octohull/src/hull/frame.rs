//! Per-edge unit directions of the octagon.

use nalgebra::Vector2;

use crate::geometry::Point;

/// Unit direction of every hull edge `v[i] → v[i+1]`, wrapping last → first.
///
/// A zero-length edge divides by zero and yields a non-finite direction. The
/// octagon never has one, since equal extrema collapse into one vertex.
pub fn edge_frame(hull: &[Point]) -> Vec<Vector2<f64>> {
    let n = hull.len();
    (0..n)
        .map(|i| {
            let d = hull[(i + 1) % n] - hull[i];
            d / d.norm()
        })
        .collect()
}
