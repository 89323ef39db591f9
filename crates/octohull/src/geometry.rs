//! Planar point type and the two products every hull phase is built on.

use nalgebra::{Point2, Vector2};

/// A point in the plane. Equality is by value.
pub type Point = Point2<f64>;

/// Scalar z-component of `a × b`.
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Dot product; used as the position of an offset along a unit edge direction.
#[inline]
pub fn dot(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Turn at `b` along the path a → b → c: `cross(b − a, c − b)`.
/// Non-negative means the path does not turn clockwise.
#[inline]
pub fn turn(a: &Point, b: &Point, c: &Point) -> f64 {
    cross(b - a, c - b)
}

/// Build a point list from `[x, y]` rows.
pub fn points_from_rows(rows: &[[f64; 2]]) -> Vec<Point> {
    rows.iter().map(|&[x, y]| Point::new(x, y)).collect()
}

/// Inverse of [`points_from_rows`].
pub fn rows_from_points(points: &[Point]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}
