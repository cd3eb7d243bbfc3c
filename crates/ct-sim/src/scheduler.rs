//! The `Scheduler` and its dispatch loop.

use std::collections::HashMap;

use ct_core::{PoolId, ProcessId, SimClock, Tick};
use tracing::debug;

use crate::{Context, EventQueue, Process, ResourcePool, SimError, SimObserver, SimResult, Step};

/// Totals for one [`Scheduler::advance_to`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdvanceReport {
    /// Time the clock was left at.
    pub now:        Tick,
    /// Events dispatched during this call.
    pub dispatched: u64,
    /// Events still queued beyond the limit.
    pub pending:    usize,
    /// Processes alive but not finished (sleeping, queued, or joined).
    pub in_flight:  usize,
}

/// Owner of simulated time, the event queue, the resource pools, and every
/// suspended process.
///
/// `Scheduler<P>` runs processes of a single type `P`; an application with
/// several kinds of activity wraps them in one enum.  The shared state they
/// operate on (`P::World`) is owned by the caller and lent to each
/// `advance_to` call.
pub struct Scheduler<P: Process> {
    clock:      SimClock,
    queue:      EventQueue,
    pools:      Vec<ResourcePool>,

    /// Live processes that are not currently executing, keyed by id.
    parked:     HashMap<ProcessId, P>,

    /// child → the process waiting for it to finish.
    joiners:    HashMap<ProcessId, ProcessId>,

    /// Processes suspended on `Step::Sleep` → their queued wake-up (tick, seq).
    sleeping:   HashMap<ProcessId, (Tick, u64)>,

    next_id:    u64,
    dispatched: u64,
}

impl<P: Process> Default for Scheduler<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Process> Scheduler<P> {
    pub fn new() -> Self {
        Self {
            clock:      SimClock::new(),
            queue:      EventQueue::new(),
            pools:      Vec::new(),
            parked:     HashMap::new(),
            joiners:    HashMap::new(),
            sleeping:   HashMap::new(),
            next_id:    0,
            dispatched: 0,
        }
    }

    // ── Setup ─────────────────────────────────────────────────────────────

    /// Register a resource pool with `capacity` units.
    pub fn add_pool(&mut self, name: &'static str, capacity: u32) -> SimResult<PoolId> {
        let id = PoolId::try_from(self.pools.len())
            .ok()
            .filter(|&id| id != PoolId::INVALID)
            .ok_or(SimError::TooManyPools { limit: PoolId::INVALID.index() })?;
        self.pools.push(ResourcePool::new(name, capacity)?);
        Ok(id)
    }

    /// Register `process` and queue its first resumption at the current time.
    ///
    /// Unlike [`Context::spawn`], nothing runs until the next `advance_to`.
    pub fn spawn(&mut self, process: P) -> ProcessId {
        let id = self.allocate_id();
        self.parked.insert(id, process);
        self.queue.push(self.now(), id);
        id
    }

    /// Move a sleeping process's wake-up to `delay` ticks from now.
    ///
    /// Only a process suspended on `Step::Sleep` can be rescheduled; one
    /// waiting for a pool unit or for a child is rejected, as is one already
    /// queued to start.  The original wake-up is dropped.
    pub fn schedule(&mut self, process: ProcessId, delay: u64) -> SimResult<()> {
        if !self.parked.contains_key(&process) {
            return Err(SimError::UnknownProcess(process));
        }
        let (at, seq) = self
            .sleeping
            .remove(&process)
            .ok_or(SimError::NotSleeping(process))?;
        let cancelled = self.queue.cancel(at, seq);
        debug_assert!(cancelled, "sleeping process without a queued wake-up");
        self.sleep(process, delay);
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn now(&self) -> Tick {
        self.clock.now()
    }

    pub fn pool(&self, id: PoolId) -> SimResult<&ResourcePool> {
        self.pools.get(id.index()).ok_or(SimError::UnknownPool(id))
    }

    pub fn pools(&self) -> &[ResourcePool] {
        &self.pools
    }

    /// Processes alive but not finished.
    pub fn in_flight(&self) -> usize {
        self.parked.len()
    }

    /// Resumptions queued for the future.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Events dispatched since the scheduler was created.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    /// Run every event due at or before `limit`, in time order with ties in
    /// submission order, then leave the clock at `limit`.
    ///
    /// Events due after `limit` are left queued; their processes stay in
    /// flight.  A `limit` in the past dispatches nothing.
    pub fn advance_to<O: SimObserver<P::World>>(
        &mut self,
        limit:    Tick,
        world:    &mut P::World,
        observer: &mut O,
    ) -> SimResult<AdvanceReport> {
        let mut dispatched = 0;

        while let Some(event) = self.queue.pop_due(limit) {
            self.clock.advance_to(event.at);
            self.sleeping.remove(&event.process);
            let process = self
                .parked
                .remove(&event.process)
                .ok_or(SimError::UnknownProcess(event.process))?;

            debug!(at = event.at.0, seq = event.seq, process = event.process.0, "dispatch");
            self.drive(event.process, process, world)?;

            dispatched += 1;
            self.dispatched += 1;
            observer.on_dispatch(event.at, event.process, &self.pools, world);
        }

        if limit > self.now() {
            self.clock.advance_to(limit);
        }
        observer.on_advance_end(self.now(), world);

        Ok(AdvanceReport {
            now:       self.now(),
            dispatched,
            pending:   self.queue.len(),
            in_flight: self.parked.len(),
        })
    }

    // ── Internals shared with Context ─────────────────────────────────────

    /// Register `process` and run it at once up to its first suspension.
    pub(crate) fn start(&mut self, process: P, world: &mut P::World) -> SimResult<ProcessId> {
        let id = self.allocate_id();
        self.drive(id, process, world)?;
        Ok(id)
    }

    pub(crate) fn release(&mut self, pool: PoolId) -> SimResult<()> {
        let now = self.now();
        let pool_ref = self.pools.get_mut(pool.index()).ok_or(SimError::UnknownPool(pool))?;
        if let Some(next) = pool_ref.release()? {
            debug!(pool = pool_ref.name(), process = next.0, at = now.0, "unit handed to waiter");
            self.queue.push(now, next);
        }
        Ok(())
    }

    /// Resume `process` repeatedly until it suspends or finishes.
    fn drive(&mut self, id: ProcessId, mut process: P, world: &mut P::World) -> SimResult<()> {
        loop {
            let step = {
                let mut cx = Context::new(self, world, id);
                process.resume(&mut cx)?
            };

            match step {
                Step::Sleep(delay) => self.sleep(id, delay),
                Step::Acquire(pool) => {
                    let pool_ref = self
                        .pools
                        .get_mut(pool.index())
                        .ok_or(SimError::UnknownPool(pool))?;
                    if pool_ref.try_acquire() {
                        continue;
                    }
                    pool_ref.enqueue(id);
                }
                Step::Join(child) => {
                    if child == id {
                        return Err(SimError::SelfJoin(id));
                    }
                    if self.parked.contains_key(&child) {
                        self.joiners.insert(child, id);
                    } else {
                        // Already finished: resume one round later.
                        self.queue.push(self.now(), id);
                    }
                }
                Step::Finish => {
                    if let Some(parent) = self.joiners.remove(&id) {
                        self.queue.push(self.now(), parent);
                    }
                    return Ok(());
                }
            }

            self.parked.insert(id, process);
            return Ok(());
        }
    }

    fn sleep(&mut self, id: ProcessId, delay: u64) {
        let at = self.now() + delay;
        let seq = self.queue.push(at, id);
        self.sleeping.insert(id, (at, seq));
    }

    fn allocate_id(&mut self) -> ProcessId {
        let id = ProcessId(self.next_id);
        self.next_id += 1;
        id
    }
}
