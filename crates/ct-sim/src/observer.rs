//! Engine observer trait for progress reporting and invariant checks.

use ct_core::{ProcessId, Tick};

use crate::ResourcePool;

/// Callbacks invoked by [`Scheduler::advance_to`][crate::Scheduler::advance_to].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — pool watcher
///
/// ```rust,ignore
/// struct PeakTrucks { peak: u32 }
///
/// impl<W> SimObserver<W> for PeakTrucks {
///     fn on_dispatch(&mut self, _now: Tick, _p: ProcessId, pools: &[ResourcePool], _w: &mut W) {
///         self.peak = self.peak.max(pools[TRUCKS.index()].occupancy());
///     }
/// }
/// ```
pub trait SimObserver<W> {
    /// Called after each dispatched event, once the resumed process (and
    /// anything it spawned) has suspended or finished.
    fn on_dispatch(
        &mut self,
        _now:     Tick,
        _process: ProcessId,
        _pools:   &[ResourcePool],
        _world:   &mut W,
    ) {}

    /// Called once when `advance_to` returns successfully.
    fn on_advance_end(&mut self, _now: Tick, _world: &mut W) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl<W> SimObserver<W> for NoopObserver {}
