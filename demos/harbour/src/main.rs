//! harbour — run the container terminal simulator from the command line.
//!
//! Prints one status line per notification on stdout, then the run summary.
//! Diagnostics go to stderr through `tracing`; set `RUST_LOG` to change
//! their level (e.g. `RUST_LOG=ct_sim=debug`).

mod cli;

use std::env::var;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use ct_core::Tick;
use ct_output::{ConsoleWriter, CsvWriter, JournalObserver};
use ct_terminal::TerminalBuilder;
use tracing::{info, warn};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, registry};

use cli::Args;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    setup()?;

    let args = Args::parse();

    // 1. Resolve configuration: defaults < file < flags.
    let config = args.terminal_config()?;
    info!(
        berths = config.berths,
        cranes = config.cranes,
        trucks = config.trucks,
        containers = config.containers_per_vessel,
        seed = config.seed,
        horizon = args.horizon,
        "configuration resolved"
    );

    // 2. Build terminal.
    let mut terminal = TerminalBuilder::new(config).build()?;

    // 3. Set up output.
    let console = ConsoleWriter::stdout();
    let console = if args.quiet { None } else { Some(console.without_summary()) };
    let csv = match &args.output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            Some(CsvWriter::new(dir)?)
        }
        None => None,
    };
    let mut obs = JournalObserver::new((console, csv));

    // 4. Run.
    let t0 = Instant::now();
    let summary = terminal.run(Tick(args.horizon), &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        warn!("output error: {e}");
    }

    // 5. Summary.
    println!();
    println!("{summary}");
    info!(elapsed_secs = elapsed.as_secs_f64(), "simulation complete");
    if let Some(dir) = &args.output_dir {
        info!(dir = %dir.display(), "CSV written");
    }

    Ok(())
}

fn setup() -> Result<()> {
    let directives = match var("RUST_LOG") {
        Ok(value) if !value.trim().is_empty() => value,
        _ => "harbour=info,ct_terminal=info".to_owned(),
    };

    registry()
        .with(EnvFilter::builder().parse(directives)?)
        .with(layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}
