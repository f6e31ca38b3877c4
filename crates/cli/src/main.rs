use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pipemaze::gen::{draw_loop_grid, Extent, LoopGridCfg, ReplayToken};
use pipemaze::{AreaMethod, SolveCfg};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod load;
mod provenance;

#[derive(Parser)]
#[command(name = "pipemaze")]
#[command(about = "Loop distance and enclosed area of a pipe maze")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the farthest loop distance and the enclosed cell count (0 on failure)
    Solve {
        #[arg(long, default_value = "input.txt")]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Method::Shoelace)]
        method: Method,
        /// Also print the loop with every other cell blanked
        #[arg(long)]
        show: bool,
        /// Write the answers as JSON here, with a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Draw a random grid with one rectangle loop and known answers
    Generate {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 20)]
        width: usize,
        #[arg(long, default_value_t = 20)]
        height: usize,
        /// Probability of a stray pipe on off-loop cells
        #[arg(long, default_value_t = 0.5)]
        noise: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Method {
    Shoelace,
    Scanline,
}

impl From<Method> for AreaMethod {
    fn from(m: Method) -> Self {
        match m {
            Method::Shoelace => AreaMethod::Shoelace,
            Method::Scanline => AreaMethod::Scanline,
        }
    }
}

impl Method {
    fn name(self) -> &'static str {
        match self {
            Method::Shoelace => "shoelace",
            Method::Scanline => "scanline",
        }
    }
}

#[derive(Serialize)]
struct SolveRecord<'a> {
    input: &'a Path,
    method: &'static str,
    distance: u64,
    area: u64,
}

#[derive(Serialize)]
struct SolveParams {
    method: &'static str,
}

#[derive(Serialize)]
struct GenerateParams {
    seed: u64,
    index: u64,
    width: usize,
    height: usize,
    noise: f64,
    expected_distance: u64,
    expected_area: u64,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            input,
            method,
            show,
            out,
        } => solve(&input, method, show, out.as_deref()),
        Action::Generate {
            seed,
            index,
            width,
            height,
            noise,
            out,
        } => generate(seed, index, width, height, noise, &out),
        Action::Report => report(),
    }
}

fn solve(input: &Path, method: Method, show: bool, out: Option<&Path>) -> Result<()> {
    let cfg = SolveCfg {
        method: method.into(),
    };
    let solved = load::solve_path(input, cfg);
    let (distance, area) = solved.as_ref().map_or((0, 0), |s| s.answer.or_zero());
    tracing::info!(input = %input.display(), ?method, distance, area, "solve");
    println!("{distance}");
    println!("{area}");

    if show {
        match &solved {
            Some(load::Solved { grid, lp: Some(lp), .. }) => print!("{}", lp.render(grid)),
            _ => tracing::warn!("no loop to show"),
        }
    }

    if let Some(out) = out {
        let record = SolveRecord {
            input,
            method: method.name(),
            distance,
            area,
        };
        provenance::ensure_parent(out)?;
        std::fs::write(out, serde_json::to_vec_pretty(&record)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let params = SolveParams {
            method: method.name(),
        };
        let sidecar = provenance::write_sidecar(out, "solve", &params, &[input])?;
        tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote answers");
    }
    Ok(())
}

fn generate(
    seed: u64,
    index: u64,
    width: usize,
    height: usize,
    noise: f64,
    out: &Path,
) -> Result<()> {
    let cfg = LoopGridCfg {
        width: Extent::Fixed(width),
        height: Extent::Fixed(height),
        noise,
    };
    let drawn = draw_loop_grid(cfg, ReplayToken { seed, index });
    provenance::ensure_parent(out)?;
    std::fs::write(out, &drawn.text).with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(
        out = %out.display(),
        width = drawn.width,
        height = drawn.height,
        start = %drawn.start,
        distance = drawn.distance,
        area = drawn.area,
        "generate"
    );
    let params = GenerateParams {
        seed,
        index,
        width: drawn.width,
        height: drawn.height,
        noise,
        expected_distance: drawn.distance,
        expected_area: drawn.area,
    };
    provenance::write_sidecar(out, "generate", &params, &[])?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "version": pipemaze::VERSION,
        "code_rev": provenance::code_rev()
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
