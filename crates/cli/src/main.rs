use anyhow::{Context, Result};
use astaroids::prelude::*;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::fmt::SubscriberBuilder;

mod svg;

use svg::SvgRenderer;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Headless host for the star field simulation")]
struct Cmd {
    /// RNG seed; defaults to the current time in seconds
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Number of stars to place
    #[arg(long, global = true, default_value_t = 50)]
    stars: usize,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Step the field and write the last frame and a summary
    Run {
        #[arg(long, default_value_t = 1000)]
        ticks: u64,
        /// Start in fill mode instead of outlines
        #[arg(long)]
        fill: bool,
        /// Toggle fill/outline every K ticks (0 = never)
        #[arg(long, default_value_t = 0)]
        toggle_every: u64,
        /// Re-place every star every K ticks (0 = never)
        #[arg(long, default_value_t = 0)]
        reset_every: u64,
        /// SVG output for the final frame
        #[arg(long)]
        svg: Option<PathBuf>,
        /// Edge length of the SVG in pixels
        #[arg(long, default_value_t = 600)]
        size: u32,
        /// JSON summary output (stdout when absent)
        #[arg(long)]
        summary: Option<PathBuf>,
    },
    /// Print the initial placement as JSON
    Place,
}

/// Options of one headless run.
#[derive(Clone, Debug)]
struct RunOpts {
    ticks: u64,
    mode: DrawMode,
    toggle_every: u64,
    reset_every: u64,
    size: u32,
}

#[derive(Debug, Default, Serialize)]
struct RunSummary {
    seed: u64,
    stars: usize,
    ticks: u64,
    resets: u64,
    collisions: usize,
    escaped: usize,
    live: usize,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct PlacedStar {
    position: [f64; 2],
    scale: f64,
    rotation_speed: f64,
    velocity: [f64; 2],
    color: [f64; 3],
}

impl From<&Star> for PlacedStar {
    fn from(s: &Star) -> Self {
        let t = s.traits();
        let p = s.position();
        Self {
            position: [p.x, p.y],
            scale: s.scale(),
            rotation_speed: t.rotation_speed,
            velocity: [t.velocity.x, t.velocity.y],
            color: [t.color.r, t.color.g, t.color.b],
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let seed = cmd.seed.unwrap_or_else(clock_seed);
    let cfg = FieldCfg {
        star_count: cmd.stars,
        ..FieldCfg::default()
    };
    match cmd.action {
        Action::Run {
            ticks,
            fill,
            toggle_every,
            reset_every,
            svg,
            size,
            summary,
        } => {
            let mode = if fill {
                DrawMode::Fill
            } else {
                DrawMode::Outline
            };
            let opts = RunOpts {
                ticks,
                mode,
                toggle_every,
                reset_every,
                size,
            };
            let (summary_doc, frame) = run(cfg, seed, &opts)?;
            if let Some(path) = svg {
                write_file(&path, frame.as_bytes())?;
                tracing::info!(path = %path.display(), "wrote final frame");
            }
            let json = serde_json::to_vec_pretty(&summary_doc)?;
            match summary {
                Some(path) => write_file(&path, &json)?,
                None => println!("{}", String::from_utf8_lossy(&json)),
            }
            Ok(())
        }
        Action::Place => place(cfg, seed),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Host loop: step, react to the outcome, render. Returns the summary and the last frame.
fn run(cfg: FieldCfg, seed: u64, opts: &RunOpts) -> Result<(RunSummary, String)> {
    tracing::info!(seed, stars = cfg.star_count, ticks = opts.ticks, "run");
    let mut field = Field::seeded(cfg, seed).context("placing stars")?;
    let mut renderer = SvgRenderer::new(cfg.bounds, opts.size);
    let mut mode = opts.mode;
    let mut summary = RunSummary {
        seed,
        stars: cfg.star_count,
        ticks: opts.ticks,
        version: astaroids::VERSION,
        ..RunSummary::default()
    };
    field.render(&mut renderer, mode);
    for t in 1..=opts.ticks {
        let outcome = field.step().context("advancing field")?;
        for (j, i) in &outcome.collisions {
            tracing::debug!(tick = outcome.tick, a = j, b = i, "collision");
        }
        for i in &outcome.escaped {
            tracing::debug!(tick = outcome.tick, star = i, "escaped");
        }
        summary.collisions += outcome.collisions.len();
        summary.escaped += outcome.escaped.len();

        if opts.toggle_every > 0 && t % opts.toggle_every == 0 {
            mode = mode.toggled();
        }
        if opts.reset_every > 0 && t % opts.reset_every == 0 {
            field.reset().context("re-placing stars")?;
            summary.resets += 1;
            tracing::info!(tick = t, "reset");
        }
        renderer.clear();
        field.render(&mut renderer, mode);
    }
    summary.live = field.live_count();
    tracing::info!(live = summary.live, "done");
    Ok((summary, renderer.finish()))
}

fn place(cfg: FieldCfg, seed: u64) -> Result<()> {
    tracing::info!(seed, stars = cfg.star_count, "place");
    let field = Field::seeded(cfg, seed).context("placing stars")?;
    let placed: Vec<PlacedStar> = field.stars().iter().map(PlacedStar::from).collect();
    println!("{}", serde_json::to_string_pretty(&placed)?);
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    fn opts(ticks: u64) -> RunOpts {
        RunOpts {
            ticks,
            mode: DrawMode::Outline,
            toggle_every: 0,
            reset_every: 0,
            size: 200,
        }
    }

    fn cfg(n: usize) -> FieldCfg {
        FieldCfg {
            star_count: n,
            ..FieldCfg::default()
        }
    }

    #[test]
    fn zero_ticks_draws_every_placed_star() {
        let (summary, frame) = run(cfg(12), 5, &opts(0)).unwrap();
        assert_eq!(summary.live, 12);
        assert_eq!(frame.matches("<polygon").count(), 12);
    }

    #[test]
    fn frame_only_contains_live_stars() {
        let (summary, frame) = run(cfg(30), 8, &opts(500)).unwrap();
        assert_eq!(frame.matches("<polygon").count(), summary.live);
        assert_eq!(summary.live + summary.escaped + 2 * summary.collisions, 30);
    }

    #[test]
    fn reset_restores_full_field() {
        let mut o = opts(400);
        o.reset_every = 400;
        let (summary, frame) = run(cfg(15), 2, &o).unwrap();
        assert_eq!(summary.resets, 1);
        assert_eq!(summary.live, 15);
        assert_eq!(frame.matches("<polygon").count(), 15);
    }

    #[test]
    fn toggling_switches_to_fill() {
        let mut o = opts(1);
        o.toggle_every = 1;
        let (_, frame) = run(cfg(3), 1, &o).unwrap();
        assert!(frame.contains("stroke=\"none\""));
    }

    #[test]
    fn summary_and_frame_written_to_disk() {
        let dir = tempdir().unwrap();
        let svg_path = dir.path().join("out/frame.svg");
        let json_path = dir.path().join("out/summary.json");
        let (summary, frame) = run(cfg(5), 4, &opts(10)).unwrap();
        write_file(&svg_path, frame.as_bytes()).unwrap();
        write_file(&json_path, &serde_json::to_vec_pretty(&summary).unwrap()).unwrap();
        assert!(std::fs::read_to_string(&svg_path).unwrap().starts_with("<svg"));
        let bytes = std::fs::read(json_path).unwrap();
        let parsed: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed["seed"], 4);
        assert_eq!(parsed["ticks"], 10);
    }
}
