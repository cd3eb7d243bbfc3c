//! Per-resumption handle passed to every [`Process`] callback.

use ct_core::{PoolId, ProcessId, Tick};

use crate::{Process, Scheduler, SimResult};

/// What a running process may touch: the clock, the resource pools, the
/// shared world, and the ability to start other processes.
///
/// Built by the scheduler for a single `resume` call.  It is the only way
/// process code reaches the pools, so pool counts change only through
/// `Step::Acquire` and [`release`][Context::release].
pub struct Context<'a, P: Process> {
    sched: &'a mut Scheduler<P>,
    me:    ProcessId,

    /// Shared state of the simulated system.
    pub world: &'a mut P::World,
}

impl<'a, P: Process> Context<'a, P> {
    pub(crate) fn new(sched: &'a mut Scheduler<P>, world: &'a mut P::World, me: ProcessId) -> Self {
        Self { sched, me, world }
    }

    /// Current simulated time.
    #[inline]
    pub fn now(&self) -> Tick {
        self.sched.now()
    }

    /// Id of the process being resumed.
    #[inline]
    pub fn me(&self) -> ProcessId {
        self.me
    }

    /// Start `process` as a detached task and return its id.
    ///
    /// The child runs straight away, up to its first suspension, before the
    /// caller continues.  Nobody waits for it unless someone later returns
    /// `Step::Join` with the returned id.
    pub fn spawn(&mut self, process: P) -> SimResult<ProcessId> {
        self.sched.start(process, &mut *self.world)
    }

    /// Give back one unit of `pool`, waking the head of its waiting line.
    pub fn release(&mut self, pool: PoolId) -> SimResult<()> {
        self.sched.release(pool)
    }

    /// Units of `pool` currently held.  Does not queue and does not block.
    pub fn occupancy(&self, pool: PoolId) -> SimResult<u32> {
        Ok(self.sched.pool(pool)?.occupancy())
    }

    pub fn capacity(&self, pool: PoolId) -> SimResult<u32> {
        Ok(self.sched.pool(pool)?.capacity())
    }
}
