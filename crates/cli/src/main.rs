use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use octohull::cloud::{sample_cloud, CloudCfg, CloudShape, ReplayToken};
use octohull::hull::{find_hull, polygon_area, try_find_hull, verify_hull};
use octohull::Point;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

use provenance::{write_sidecar, Build};

#[derive(Parser)]
#[command(name = "octohull")]
#[command(about = "Planar convex hulls over x,y CSV point tables")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a point table and write it (plus a provenance sidecar)
    Hull(HullArgs),
    /// Write a reproducible random point cloud
    Sample(SampleArgs),
    /// Print the build provenance as JSON
    Report,
}

#[derive(Args, Debug)]
struct HullArgs {
    /// CSV with `x` and `y` columns
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// Reject non-finite, too-small or collinear inputs instead of returning a degenerate hull
    #[arg(long)]
    strict: bool,
    /// Check convexity and coverage of the result before writing it
    #[arg(long)]
    verify: bool,
}

#[derive(Args, Debug, Serialize)]
struct SampleArgs {
    #[arg(long, value_enum, default_value_t = Shape::Disk)]
    shape: Shape,
    /// Vertex count for `--shape polygon`
    #[arg(long, default_value_t = 8)]
    sides: usize,
    #[arg(long, default_value_t = 1000)]
    count: usize,
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    index: u64,
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
enum Shape {
    Square,
    Disk,
    Circle,
    Polygon,
}

/// Parameters and result sizes recorded in the hull sidecar.
#[derive(Debug, Serialize)]
struct HullSummary {
    input: String,
    points: usize,
    vertices: usize,
    area: f64,
    strict: bool,
    verified: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull(args) => hull(args).map(|_| ()),
        Action::Sample(args) => sample(args),
        Action::Report => report(),
    }
}

fn hull(args: HullArgs) -> Result<HullSummary> {
    tracing::info!(input = %args.input.display(), out = %args.out.display(), strict = args.strict, "hull");
    let points = table::read_points(&args.input)?;
    let hull = if args.strict {
        try_find_hull(&points).with_context(|| format!("hull of {}", args.input.display()))?
    } else {
        find_hull(&points)
    };
    if args.verify {
        verify_hull(&points, &hull, verify_eps(&points))
            .with_context(|| format!("verifying hull of {}", args.input.display()))?;
    }
    let summary = HullSummary {
        input: args.input.to_string_lossy().into_owned(),
        points: points.len(),
        vertices: hull.len(),
        area: polygon_area(&hull),
        strict: args.strict,
        verified: args.verify,
    };
    tracing::info!(points = summary.points, vertices = summary.vertices, area = summary.area, "hull_done");

    table::write_points(&args.out, &hull)?;
    write_sidecar(&args.out, "hull", &summary)?;
    Ok(summary)
}

/// Absolute tolerance scaled to the largest coordinate magnitude.
fn verify_eps(points: &[Point]) -> f64 {
    let scale = points
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(1.0, f64::max);
    1e-9 * scale
}

fn sample(args: SampleArgs) -> Result<()> {
    tracing::info!(shape = ?args.shape, count = args.count, seed = args.seed, index = args.index, "sample");
    let shape = match args.shape {
        Shape::Square => CloudShape::Square,
        Shape::Disk => CloudShape::Disk,
        Shape::Circle => CloudShape::Circle,
        Shape::Polygon => CloudShape::Polygon { sides: args.sides },
    };
    let cfg = CloudCfg {
        shape,
        count: args.count,
        scale: args.scale,
        ..CloudCfg::default()
    };
    let tok = ReplayToken {
        seed: args.seed,
        index: args.index,
    };
    let points = sample_cloud(cfg, tok);
    table::write_points(&args.out, &points)?;
    write_sidecar(&args.out, "sample", &args)?;
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&Build::current())?);
    Ok(())
}
