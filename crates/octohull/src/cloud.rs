//! Random planar point clouds (replay tokens + a few reference shapes).
//!
//! Purpose
//! - Deterministic inputs for tests, benchmarks and the CLI `sample` command.
//!   Every draw is fixed by a `(seed, index)` replay token.
//!
//! Model
//! - `Square`, `Disk`: uniform in the shape; the hull is small (O(log n) and
//!   O(n^{1/3}) vertices in expectation).
//! - `Circle`: every point on the unit circle, so every point is a hull vertex.
//! - `Polygon`: a regular n-gon's vertices plus interior points kept away from
//!   the boundary; the hull is exactly the n-gon.

use std::f64::consts::{PI, TAU};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::geometry::Point;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Shape the cloud is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudShape {
    Square,
    Disk,
    Circle,
    /// Regular polygon with `sides` vertices (clamped to ≥ 3).
    Polygon { sides: usize },
}

/// Point cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub shape: CloudShape,
    /// Total number of points. For `Polygon` the vertices are part of it; at
    /// least `sides` points are returned.
    pub count: usize,
    /// Half-width of the square, radius of disk, circle and polygon.
    pub scale: f64,
    /// Centre of the cloud.
    pub center: Point,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            shape: CloudShape::Disk,
            count: 1000,
            scale: 1.0,
            center: Point::origin(),
        }
    }
}

/// Vertices of a regular polygon, counterclockwise from angle `phase`.
pub fn regular_polygon(sides: usize, radius: f64, phase: f64) -> Vec<Point> {
    let n = sides.max(3);
    (0..n)
        .map(|k| {
            let th = phase + TAU * (k as f64) / (n as f64);
            Point::new(radius * th.cos(), radius * th.sin())
        })
        .collect()
}

#[inline]
fn in_disk<R: Rng>(rng: &mut R, radius: f64) -> Point {
    let r = radius * rng.gen::<f64>().sqrt();
    let th = rng.gen::<f64>() * TAU;
    Point::new(r * th.cos(), r * th.sin())
}

/// Draw a cloud. Point order is shuffled, so hull vertices are not grouped.
pub fn sample_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let s = cfg.scale;
    let mut pts: Vec<Point> = match cfg.shape {
        CloudShape::Square => (0..cfg.count)
            .map(|_| Point::new(rng.gen_range(-s..=s), rng.gen_range(-s..=s)))
            .collect(),
        CloudShape::Disk => (0..cfg.count).map(|_| in_disk(&mut rng, s)).collect(),
        CloudShape::Circle => (0..cfg.count)
            .map(|_| {
                let th = rng.gen::<f64>() * TAU;
                Point::new(s * th.cos(), s * th.sin())
            })
            .collect(),
        CloudShape::Polygon { sides } => {
            let n = sides.max(3);
            let phase = rng.gen::<f64>() * TAU;
            let mut v = regular_polygon(n, s, phase);
            // Interior points stay inside 95% of the inradius.
            let r_in = 0.95 * s * (PI / n as f64).cos();
            let extra = cfg.count.saturating_sub(n);
            v.extend((0..extra).map(|_| in_disk(&mut rng, r_in)));
            v
        }
    };
    pts.shuffle(&mut rng);
    for p in &mut pts {
        *p += cfg.center.coords;
    }
    pts
}
