//! Planar convex hulls with Akl–Toussaint octagon pruning.
//!
//! `find_hull` takes an unordered point set and returns the hull vertices in
//! counterclockwise order, starting at the minimum-X extreme. One O(N) pass
//! picks up to eight extreme points; every other point is then either dropped
//! as interior or filed against exactly one octagon edge, and each edge's
//! candidates are reduced to their convex chain.
//!
//! Modules
//! - `geometry`: `Point` and the cross/dot/turn primitives.
//! - `hull`: the algorithm, table adapters, checked entry and verification.
//! - `cloud`: reproducible random point clouds.
//! - `error`: `HullError` for the checked entry points.

pub mod cloud;
pub mod error;
pub mod geometry;
pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::HullError;
pub use geometry::Point;
pub use hull::{find_hull, find_hull_rows, find_hull_table, try_find_hull};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cloud::{regular_polygon, sample_cloud, CloudCfg, CloudShape, ReplayToken};
    pub use crate::geometry::{cross, dot, turn, Point};
    pub use crate::hull::{
        contains, find_hull, find_hull_rows, find_hull_table, is_convex_ccw, polygon_area,
        try_find_hull, verify_hull,
    };
    pub use crate::HullError;
    pub use nalgebra::{MatrixXx2, Vector2};
}
