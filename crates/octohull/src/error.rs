use thiserror::Error;

/// Failures reported by the checked entry points (`try_find_hull`, `verify_hull`).
///
/// The plain `find_hull` never fails; it returns whatever degenerate hull the
/// arithmetic produces.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HullError {
    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    NonFinite { index: usize, x: f64, y: f64 },

    #[error("need at least 3 distinct points, got {distinct}")]
    TooFewPoints { distinct: usize },

    #[error("all points are collinear; hull has {vertices} vertices and zero area")]
    Degenerate { vertices: usize },

    #[error("hull turns clockwise at vertex {index}")]
    NotConvex { index: usize },

    #[error("input point {index} lies outside the hull")]
    Uncovered { index: usize },
}
