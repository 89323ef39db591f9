//! Print hull sizes for the sampler shapes, for a quick sanity check on counts.
//!
//! Usage:
//!   cargo run -p octohull --example hull_stats -- 10000
//!
//! Prints, per shape, the octagon-refined hull size next to monotone chain.

use octohull::cloud::{sample_cloud, CloudCfg, CloudShape, ReplayToken};
use octohull::hull::{find_hull, monotone_chain, polygon_area};

fn main() {
    let n = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10_000);
    for shape in [
        CloudShape::Square,
        CloudShape::Disk,
        CloudShape::Circle,
        CloudShape::Polygon { sides: 16 },
    ] {
        let cfg = CloudCfg {
            shape,
            count: n,
            ..CloudCfg::default()
        };
        let pts = sample_cloud(cfg, ReplayToken { seed: 2025, index: 0 });
        let hull = find_hull(&pts);
        let reference = monotone_chain(&pts);
        println!(
            "{shape:?}: n={n} hull={} monotone={} area={:.6}",
            hull.len(),
            reference.len(),
            polygon_area(&hull)
        );
    }
}
