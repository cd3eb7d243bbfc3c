//! The `Terminal` struct and its run loop.

use ct_core::{ProcessId, TerminalConfig, Tick};
use ct_sim::{ResourcePool, Scheduler, SimObserver};
use tracing::{info, warn};

use crate::{RunSummary, TerminalError, TerminalObserver, TerminalProcess, TerminalResult, TerminalWorld};

/// A container terminal ready to run.
///
/// Create via [`TerminalBuilder`][crate::TerminalBuilder].
pub struct Terminal {
    scheduler: Scheduler<TerminalProcess>,
    world:     TerminalWorld,
}

impl Terminal {
    pub(crate) fn from_parts(scheduler: Scheduler<TerminalProcess>, world: TerminalWorld) -> Self {
        Self { scheduler, world }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run every event due at or before `horizon` and return the totals.
    ///
    /// Notifications reach `observer` in the order the transitions happened.
    /// Processes still sleeping or queued at the horizon are left as they
    /// are; calling `run` again with a later horizon continues from there.
    pub fn run<O: TerminalObserver>(
        &mut self,
        horizon:  Tick,
        observer: &mut O,
    ) -> TerminalResult<RunSummary> {
        if horizon == Tick::ZERO {
            return Err(TerminalError::InvalidHorizon);
        }

        info!(from = self.now().0, horizon = horizon.0, "terminal run started");

        let mut relay = Relay { observer: &mut *observer };
        let report = match self.scheduler.advance_to(horizon, &mut self.world, &mut relay) {
            Ok(report) => report,
            Err(e) => {
                // Notifications of the failing dispatch never reached `on_dispatch`.
                relay.flush(&mut self.world);
                let error = TerminalError::from(e);
                warn!(at = self.now().0, %error, "terminal run aborted");
                observer.on_run_error(&error);
                return Err(error);
            }
        };

        let summary = RunSummary {
            horizon,
            events_dispatched: self.scheduler.dispatched(),
            in_flight:         report.in_flight,
            ..*self.world.tally()
        };

        info!(
            horizon = horizon.0,
            dispatched = report.dispatched,
            vessels = summary.vessels_arrived,
            containers = summary.containers_unloaded,
            in_flight = summary.in_flight,
            "terminal run finished"
        );

        observer.on_run_end(&summary);
        Ok(summary)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn now(&self) -> Tick {
        self.scheduler.now()
    }

    /// Berth, crane, and truck pools, in that order.
    pub fn pools(&self) -> &[ResourcePool] {
        self.scheduler.pools()
    }

    pub fn world(&self) -> &TerminalWorld {
        &self.world
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.world.config
    }

    pub fn scheduler(&self) -> &Scheduler<TerminalProcess> {
        &self.scheduler
    }
}

// ── Relay ─────────────────────────────────────────────────────────────────────

/// Forwards the world's journal to a [`TerminalObserver`] after each event.
struct Relay<'o, O: TerminalObserver> {
    observer: &'o mut O,
}

impl<O: TerminalObserver> Relay<'_, O> {
    fn flush(&mut self, world: &mut TerminalWorld) {
        for line in world.drain_journal() {
            self.observer.on_notification(&line);
        }
    }
}

impl<O: TerminalObserver> SimObserver<TerminalWorld> for Relay<'_, O> {
    fn on_dispatch(
        &mut self,
        _now:     Tick,
        _process: ProcessId,
        pools:    &[ResourcePool],
        world:    &mut TerminalWorld,
    ) {
        debug_assert!(pools.iter().all(|p| p.occupancy() <= p.capacity()));
        self.flush(world);
    }

    fn on_advance_end(&mut self, _now: Tick, world: &mut TerminalWorld) {
        self.flush(world);
    }
}
