//! End-of-run totals.

use std::fmt;

use ct_core::Tick;

/// What a run achieved by its horizon.
///
/// Counts are of notifications emitted, so a vessel still discharging at the
/// horizon counts as berthed but not departed, and a container whose truck
/// is still out counts as unloaded and departed but not returned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub horizon:             Tick,
    pub events_dispatched:   u64,
    pub vessels_arrived:     u64,
    pub vessels_berthed:     u64,
    pub vessels_unloaded:    u64,
    pub vessels_departed:    u64,
    pub containers_unloaded: u64,
    pub trips_started:       u64,
    pub trips_completed:     u64,
    /// Processes abandoned at the horizon (sleeping, queued, or waiting on a
    /// child).
    pub in_flight:           usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "horizon {}: {} vessels arrived, {} berthed, {} departed; \
             {} containers unloaded, {}/{} truck trips completed; \
             {} events dispatched, {} processes in flight",
            self.horizon.0,
            self.vessels_arrived,
            self.vessels_berthed,
            self.vessels_departed,
            self.containers_unloaded,
            self.trips_completed,
            self.trips_started,
            self.events_dispatched,
            self.in_flight,
        )
    }
}
