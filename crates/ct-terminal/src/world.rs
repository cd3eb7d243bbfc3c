//! Shared terminal state lent to every process.

use ct_core::{PoolId, Tick, TerminalConfig, VesselId};
use tracing::trace;

use crate::{InterArrival, Notification, RunSummary, TimedNotification};

/// A vessel waiting at, or alongside, the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    pub id:         VesselId,
    /// Containers to discharge before the vessel can leave.
    pub containers: u32,
}

impl Vessel {
    pub fn new(id: VesselId, containers: u32) -> Self {
        Self { id, containers }
    }
}

/// One container on its way from the quay to the yard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerMove {
    /// 1-based position in its vessel's discharge order.
    pub container: u32,
    pub vessel:    VesselId,
}

/// Display labels handed out in acquisition order.
///
/// The n-th grant (0-based) of a pool with capacity `c` is labelled
/// `n % c + 1`.  The label says nothing about which unit was granted: when
/// releases happen out of order two holders can carry the same label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelCycle {
    capacity:     u32,
    acquisitions: u64,
}

impl LabelCycle {
    pub fn new(capacity: u32) -> Self {
        debug_assert!(capacity > 0);
        Self { capacity, acquisitions: 0 }
    }

    /// Label for the next grant.
    pub fn next(&mut self) -> u32 {
        let label = (self.acquisitions % u64::from(self.capacity)) as u32 + 1;
        self.acquisitions += 1;
        label
    }

    pub fn acquisitions(&self) -> u64 {
        self.acquisitions
    }
}

/// Pool ids of the terminal's three resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalPools {
    pub berths: PoolId,
    pub cranes: PoolId,
    pub trucks: PoolId,
}

/// Everything the terminal's processes share besides the pools themselves.
///
/// Notifications are appended to an internal journal; [`Terminal`]
/// forwards them to its observer after each dispatched event, so observers
/// see them in emission order.
///
/// [`Terminal`]: crate::Terminal
pub struct TerminalWorld {
    pub config:       TerminalConfig,
    pub pools:        TerminalPools,
    pub berth_labels: LabelCycle,
    pub crane_labels: LabelCycle,

    arrivals:    Box<dyn InterArrival>,
    last_vessel: VesselId,
    journal:     Vec<TimedNotification>,
    tally:       RunSummary,
}

impl TerminalWorld {
    pub fn new(config: TerminalConfig, pools: TerminalPools, arrivals: Box<dyn InterArrival>) -> Self {
        Self {
            berth_labels: LabelCycle::new(config.berths),
            crane_labels: LabelCycle::new(config.cranes),
            config,
            pools,
            arrivals,
            last_vessel: VesselId(0),
            journal: Vec::new(),
            tally: RunSummary::default(),
        }
    }

    /// Assign the identity of the next arriving vessel.
    pub fn next_vessel(&mut self) -> VesselId {
        self.last_vessel = self.last_vessel.next();
        self.last_vessel
    }

    /// Gap before the next arrival, or `None` once the source is exhausted.
    pub fn next_gap(&mut self) -> Option<u64> {
        self.arrivals.next_gap()
    }

    /// Append a notification to the journal and count it.
    pub fn record(&mut self, at: Tick, notification: Notification) {
        trace!(at = at.0, kind = notification.kind(), vessel = notification.vessel().0, "notification");
        let tally = &mut self.tally;
        match notification {
            Notification::Arrived { .. }           => tally.vessels_arrived += 1,
            Notification::Berthed { .. }           => tally.vessels_berthed += 1,
            Notification::Unloading { .. }         => tally.containers_unloaded += 1,
            Notification::ContainerDeparted { .. } => tally.trips_started += 1,
            Notification::TruckReturned { .. }     => tally.trips_completed += 1,
            Notification::VesselUnloaded { .. }    => tally.vessels_unloaded += 1,
            Notification::LeftBerth { .. }         => tally.vessels_departed += 1,
        }
        self.journal.push(TimedNotification { at, notification });
    }

    /// Take the notifications recorded since the last drain.
    pub fn drain_journal(&mut self) -> std::vec::Drain<'_, TimedNotification> {
        self.journal.drain(..)
    }

    /// Running totals of everything recorded so far.
    pub fn tally(&self) -> &RunSummary {
        &self.tally
    }
}
