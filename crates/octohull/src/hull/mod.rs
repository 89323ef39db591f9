//! Planar convex hull: Akl–Toussaint octagon pruning + per-edge refinement.
//!
//! Purpose
//! - Return the hull of an unordered point set as a counterclockwise vertex
//!   list starting at the minimum-X extreme.
//! - Keep the hot path allocation-light: one pool copy, one sorted candidate
//!   list per octagon edge, one splice per edge.
//!
//! Phases
//! - `extremes`: one pass for the eight directional extrema (≤ 8 vertices).
//! - `frame`: unit direction per octagon edge, fixed for the rest of the run.
//! - `classify`: file every pooled point under the first edge it lies outside
//!   of, sorted by position along that edge; inside points are dropped.
//! - `refine`: remove concave candidates per edge and splice survivors in.
//! - `assemble`: drives the phases; table adapters and the checked variant.
//!
//! Code cross-refs: `geometry::{Point, cross, dot, turn}`, `HullError`.

mod assemble;
mod classify;
mod extremes;
mod frame;
mod monotone_chain;
mod refine;
mod types;
pub mod verify;

pub use assemble::{find_hull, find_hull_rows, find_hull_table, try_find_hull};
pub use classify::classify_candidates;
pub use extremes::{find_extremes, Extreme, Octagon};
pub use frame::edge_frame;
pub use monotone_chain::monotone_chain;
pub use refine::{refine_chain, splice_edge};
pub use types::{Candidate, EdgeCandidates};
pub use verify::{contains, first_clockwise_turn, is_convex_ccw, polygon_area, verify_hull};
