//! Eight directional extrema (the Akl–Toussaint octagon).

use crate::geometry::Point;

/// Extreme directions in circular, counterclockwise order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Extreme {
    MinX,
    MinSum,
    MinY,
    MaxDiff,
    MaxX,
    MaxSum,
    MaxY,
    MinDiff,
}

impl Extreme {
    /// Slot order of the octagon; slot 0 starts the output hull.
    pub const ALL: [Extreme; 8] = [
        Extreme::MinX,
        Extreme::MinSum,
        Extreme::MinY,
        Extreme::MaxDiff,
        Extreme::MaxX,
        Extreme::MaxSum,
        Extreme::MaxY,
        Extreme::MinDiff,
    ];

    /// Functional minimized by this extreme. Maxima are negated, which is exact,
    /// so a strict `<` on the score is a strict `>` on the original value.
    #[inline]
    pub fn score(self, p: &Point) -> f64 {
        match self {
            Extreme::MinX => p.x,
            Extreme::MinSum => p.x + p.y,
            Extreme::MinY => p.y,
            Extreme::MaxDiff => -(p.x - p.y),
            Extreme::MaxX => -p.x,
            Extreme::MaxSum => -(p.x + p.y),
            Extreme::MaxY => -p.y,
            Extreme::MinDiff => p.x - p.y,
        }
    }
}

/// Result of the extreme-point pass.
#[derive(Clone, Debug, Default)]
pub struct Octagon {
    /// Distinct extreme points, counterclockwise, starting at the min-X slot.
    pub hull: Vec<Point>,
    /// Every input point that was not taken as an extreme, in input order.
    pub pool: Vec<Point>,
}

/// Index of the winning point per slot; `None` when no point scores below +∞
/// (empty input, or NaN/infinite coordinates throughout).
///
/// The scan runs from the last input point to the first with strict
/// comparisons, so on ties the point with the highest input index wins.
pub fn extreme_slots(points: &[Point]) -> [Option<usize>; 8] {
    let mut best = [f64::INFINITY; 8];
    let mut slots = [None; 8];
    for (i, p) in points.iter().enumerate().rev() {
        for (k, dir) in Extreme::ALL.iter().enumerate() {
            let s = dir.score(p);
            if s < best[k] {
                best[k] = s;
                slots[k] = Some(i);
            }
        }
    }
    slots
}

/// Split `points` into the octagon hull and the remaining pool.
///
/// Slots holding equal points collapse into one hull entry, and each selected
/// point leaves the pool exactly once. Other copies of a selected coordinate
/// stay in the pool.
pub fn find_extremes(points: &[Point]) -> Octagon {
    let slots = extreme_slots(points);
    let mut hull: Vec<Point> = Vec::with_capacity(8);
    let mut taken = vec![false; points.len()];
    for i in slots.into_iter().flatten() {
        let p = points[i];
        if !hull.contains(&p) {
            hull.push(p);
            taken[i] = true;
        }
    }
    let pool = points
        .iter()
        .zip(&taken)
        .filter(|(_, &t)| !t)
        .map(|(p, _)| *p)
        .collect();
    Octagon { hull, pool }
}
