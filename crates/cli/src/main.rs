use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hullmerge::rand::{draw_points, PointCloud, ReplayToken};
use hullmerge::{
    compute_hull_with, lex_cmp, polygon_edges, HullCfg, HullEvent, HullObserver, Paced, Point,
    Recorder, Tangent, TangentKind, TracingObserver,
};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Divide-and-conquer convex hull runner")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of an x,y CSV file and write it as JSON
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Delay after each tangent and merge, for step-by-step viewing
        #[arg(long, default_value_t = 0)]
        pause_ms: u64,
        /// Include every tangent and intermediate hull in the output
        #[arg(long)]
        steps: bool,
    },
    /// Write a seeded random point cloud as x,y CSV
    Sample {
        #[arg(long)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, value_enum, default_value_t = Shape::Square)]
        shape: Shape,
        /// Half width, radius, or lattice half width depending on the shape
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    Square,
    Disk,
    Lattice,
    Circle,
}

impl Shape {
    fn cloud(self, scale: f64) -> PointCloud {
        match self {
            Shape::Square => PointCloud::Square { half_width: scale },
            Shape::Disk => PointCloud::Disk { radius: scale },
            Shape::Lattice => PointCloud::Lattice {
                half_width: scale.round() as i32,
            },
            Shape::Circle => PointCloud::Circle { radius: scale },
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            out,
            pause_ms,
            steps,
        } => hull(&input, &out, pause_ms, steps, cmd.tag),
        Action::Sample {
            n,
            seed,
            index,
            shape,
            scale,
            out,
        } => sample(n, ReplayToken::new(seed, index), shape, scale, &out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

/// Logs through `tracing` and records for the optional step dump.
#[derive(Default)]
struct Tee {
    log: TracingObserver,
    rec: Recorder,
}

impl HullObserver for Tee {
    fn on_tangent_found(&mut self, tangent: Tangent) {
        self.log.on_tangent_found(tangent);
        self.rec.on_tangent_found(tangent);
    }
    fn on_hull_merged(&mut self, hull: &[Point]) {
        self.log.on_hull_merged(hull);
        self.rec.on_hull_merged(hull);
    }
    fn on_progress(&mut self, message: &str) {
        self.log.on_progress(message);
        self.rec.on_progress(message);
    }
}

type Xy = [f64; 2];

fn xy(p: &Point) -> Xy {
    [p.x, p.y]
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Step {
    Tangent { kind: &'static str, left: Xy, right: Xy },
    Merged { hull: Vec<Xy> },
    Progress { message: String },
}

impl From<&HullEvent> for Step {
    fn from(e: &HullEvent) -> Self {
        match e {
            HullEvent::TangentFound(t) => Step::Tangent {
                kind: match t.kind {
                    TangentKind::Upper => "upper",
                    TangentKind::Lower => "lower",
                },
                left: xy(&t.left),
                right: xy(&t.right),
            },
            HullEvent::HullMerged(h) => Step::Merged {
                hull: h.iter().map(xy).collect(),
            },
            HullEvent::Progress(m) => Step::Progress { message: m.clone() },
        }
    }
}

#[derive(Serialize)]
struct HullOutput {
    points: usize,
    hull: Vec<Xy>,
    edges: Vec<[Xy; 2]>,
    elapsed_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<Vec<Step>>,
}

fn hull(input: &Path, out: &Path, pause_ms: u64, steps: bool, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), pause_ms, steps, tag = ?tag, "hull");
    let mut points = io::read_points_csv(input)?;
    io::validate_points(&points)?;
    points.sort_by(lex_cmp);

    let mut tee = Tee::default();
    let t0 = Instant::now();
    let hull = {
        let mut paced = Paced::new(&mut tee, Duration::from_millis(pause_ms));
        compute_hull_with(&points, &HullCfg::default(), &mut paced)
            .with_context(|| format!("computing hull of {}", input.display()))?
    };
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;
    tracing::info!(points = points.len(), hull = hull.len(), elapsed_ms, "hull_done");

    let output = HullOutput {
        points: points.len(),
        hull: hull.iter().map(xy).collect(),
        edges: polygon_edges(&hull)
            .iter()
            .map(|s| [xy(&s.a), xy(&s.b)])
            .collect(),
        elapsed_ms,
        steps: steps.then(|| tee.rec.events.iter().map(Step::from).collect()),
    };
    io::create_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&output)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = Payload::new(json!({
        "input": input.to_string_lossy(),
        "points": points.len(),
        "hull_points": hull.len(),
        "pause_ms": pause_ms,
        "steps": steps
    }))
    .with_tag(tag);
    write_sidecar(out, payload)?;
    Ok(())
}

fn sample(
    n: usize,
    tok: ReplayToken,
    shape: Shape,
    scale: f64,
    out: &Path,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(n, seed = tok.seed, index = tok.index, shape = ?shape, scale, out = %out.display(), "sample");
    let points = draw_points(shape.cloud(scale), n, tok);
    io::write_points_csv(out, &points)?;
    let payload = Payload::new(json!({
        "n": n,
        "seed": tok.seed,
        "index": tok.index,
        "shape": format!("{shape:?}"),
        "scale": scale
    }))
    .with_tag(tag);
    write_sidecar(out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&provenance::summary(tag))?
    );
    Ok(())
}
