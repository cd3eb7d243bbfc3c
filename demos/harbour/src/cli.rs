//! Command-line arguments and how they combine with a config file.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ct_core::TerminalConfig;

/// Simulate a container terminal: vessels berth, cranes unload, trucks haul
/// containers to the yard.
#[derive(Debug, Parser)]
#[command(name = "harbour", version, about)]
pub struct Args {
    /// Simulated time to run for, in ticks (minutes).
    #[arg(default_value_t = 5_000)]
    pub horizon: u64,

    /// JSON file with `TerminalConfig` fields; missing fields keep their defaults.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Master RNG seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of berths.
    #[arg(long)]
    pub berths: Option<u32>,

    /// Number of quay cranes.
    #[arg(long)]
    pub cranes: Option<u32>,

    /// Number of yard trucks.
    #[arg(long)]
    pub trucks: Option<u32>,

    /// Containers on every vessel.
    #[arg(long)]
    pub containers: Option<u32>,

    /// Also write `notifications.csv` and `run_summary.csv` into this directory.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Do not print status lines; the summary is still printed.
    #[arg(long, short)]
    pub quiet: bool,
}

impl Args {
    /// Defaults, then the config file, then command-line overrides.
    pub fn terminal_config(&self) -> Result<TerminalConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("opening config file {}", path.display()))?;
                serde_json::from_reader(BufReader::new(file))
                    .with_context(|| format!("parsing config file {}", path.display()))?
            }
            None => TerminalConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(berths) = self.berths {
            config.berths = berths;
        }
        if let Some(cranes) = self.cranes {
            config.cranes = cranes;
        }
        if let Some(trucks) = self.trucks {
            config.trucks = trucks;
        }
        if let Some(containers) = self.containers {
            config.containers_per_vessel = containers;
        }
        Ok(config)
    }
}
