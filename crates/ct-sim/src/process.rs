//! The `Process` trait — the extension point for simulated activities.

use ct_core::{PoolId, ProcessId};

use crate::{Context, SimResult};

/// What a process wants to do next.
///
/// Returned from [`Process::resume`] and consumed by the scheduler.  Every
/// variant except an immediately satisfiable `Acquire` suspends the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Resume again after `delay` ticks.  A zero delay still costs one trip
    /// through the event queue.
    Sleep(u64),

    /// Take one unit of `pool`.
    ///
    /// With a unit free, the process is resumed again within the same turn;
    /// otherwise it waits in the pool's FIFO line and resumes once a release
    /// hands it a unit.  Either way it holds the unit when resumed.
    Acquire(PoolId),

    /// Resume once the given process has finished.
    Join(ProcessId),

    /// The process is done and is dropped by the scheduler.
    Finish,
}

/// A cooperatively scheduled activity.
///
/// A process is a state machine: each call to `resume` runs it from one
/// suspension point to the next and returns the [`Step`] it suspends on.
/// Implementations track which suspension they are returning from in their
/// own state.
///
/// # Example
///
/// ```rust,ignore
/// enum Hold { Start, Holding, Done }
///
/// impl Process for Hold {
///     type World = ();
///     fn resume(&mut self, cx: &mut Context<'_, Self>) -> SimResult<Step> {
///         match self {
///             Hold::Start   => { *self = Hold::Holding; Ok(Step::Acquire(POOL)) }
///             Hold::Holding => { *self = Hold::Done;    Ok(Step::Sleep(5)) }
///             Hold::Done    => { cx.release(POOL)?;     Ok(Step::Finish) }
///         }
///     }
/// }
/// ```
pub trait Process: Sized {
    /// Shared state every process of this type can read and write through
    /// [`Context::world`].
    type World;

    /// Run until the next suspension point.
    fn resume(&mut self, cx: &mut Context<'_, Self>) -> SimResult<Step>;
}
