//! Fluent builder for constructing a [`Terminal`].

use ct_core::{SimRng, TerminalConfig};
use ct_sim::Scheduler;
use tracing::debug;

use crate::process::VesselArrivals;
use crate::{
    ExponentialArrivals, InterArrival, Terminal, TerminalPools, TerminalProcess, TerminalResult,
    TerminalWorld,
};

/// Stream offset of the vessel arrival source within the root RNG.
const ARRIVAL_STREAM: u64 = 1;

/// Fluent builder for [`Terminal`].
///
/// # Required inputs
///
/// - [`TerminalConfig`] — pool capacities, durations, arrival mean, seed
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                                  |
/// |------------------|----------------------------------------------------------|
/// | `.arrivals(src)` | `ExponentialArrivals` with the configured mean and seed  |
///
/// # Example
///
/// ```rust,ignore
/// let mut terminal = TerminalBuilder::new(TerminalConfig::default())
///     .arrivals(ScriptedArrivals::at_times([0, 120]))
///     .build()?;
/// let summary = terminal.run(Tick(1_000), &mut TraceRecorder::new())?;
/// ```
pub struct TerminalBuilder {
    config:   TerminalConfig,
    arrivals: Option<Box<dyn InterArrival>>,
}

impl TerminalBuilder {
    pub fn new(config: TerminalConfig) -> Self {
        Self { config, arrivals: None }
    }

    /// Replace the random arrival stream.
    ///
    /// `config.mean_interarrival_ticks` is still validated but otherwise
    /// unused when a source is supplied here.
    pub fn arrivals(mut self, source: impl InterArrival + 'static) -> Self {
        self.arrivals = Some(Box::new(source));
        self
    }

    /// Validate the configuration, register the three pools, and queue the
    /// vessel generator at time zero.
    pub fn build(self) -> TerminalResult<Terminal> {
        self.config.validate()?;

        let arrivals: Box<dyn InterArrival> = match self.arrivals {
            Some(source) => source,
            None => {
                let rng = SimRng::new(self.config.seed).child(ARRIVAL_STREAM);
                Box::new(ExponentialArrivals::new(self.config.mean_interarrival_ticks, rng)?)
            }
        };

        // ── Pools ─────────────────────────────────────────────────────────
        let mut scheduler = Scheduler::new();
        let pools = TerminalPools {
            berths: scheduler.add_pool("berth", self.config.berths)?,
            cranes: scheduler.add_pool("crane", self.config.cranes)?,
            trucks: scheduler.add_pool("truck", self.config.trucks)?,
        };

        scheduler.spawn(TerminalProcess::Arrivals(VesselArrivals::new()));

        debug!(
            berths = self.config.berths,
            cranes = self.config.cranes,
            trucks = self.config.trucks,
            seed = self.config.seed,
            "terminal built"
        );

        let world = TerminalWorld::new(self.config, pools, arrivals);
        Ok(Terminal::from_parts(scheduler, world))
    }
}
