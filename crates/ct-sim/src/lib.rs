//! `ct-sim` — discrete-event engine for the container terminal simulator.
//!
//! # Dispatch loop
//!
//! ```text
//! advance_to(limit):
//!   while the earliest pending event has at ≤ limit:
//!     ① Pop      — take it from the EventQueue (ties in submission order).
//!     ② Clock    — move SimClock to event.at.
//!     ③ Resume   — call Process::resume with a Context; repeat while the
//!                  returned Step can be satisfied in the same turn
//!                  (an Acquire on a pool with free capacity).
//!     ④ Suspend  — Sleep(d)      → push (now + d) into the queue
//!                  Acquire(pool) → join the pool's FIFO waiting line
//!                  Join(child)   → wait for child to finish
//!                  Finish        → drop the process, wake its joiner
//!   clock := limit
//! ```
//!
//! Events beyond `limit` stay queued.  The processes that own them are
//! reported as in flight; calling `advance_to` again continues the run.
//!
//! # Concurrency model
//!
//! One logical thread of control.  A process runs uninterrupted between two
//! suspension points and every pool mutation goes through `acquire`/`release`,
//! so a run is deterministic given its inputs.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ct_sim::{NoopObserver, Scheduler};
//!
//! let mut sched: Scheduler<MyProcess> = Scheduler::new();
//! let cranes = sched.add_pool("crane", 2)?;
//! sched.spawn(MyProcess::new(cranes));
//! sched.advance_to(Tick(100), &mut world, &mut NoopObserver)?;
//! ```

pub mod context;
pub mod error;
pub mod observer;
pub mod pool;
pub mod process;
pub mod queue;
pub mod scheduler;


pub use context::Context;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use pool::ResourcePool;
pub use process::{Process, Step};
pub use queue::{EventQueue, PendingEvent};
pub use scheduler::{AdvanceReport, Scheduler};
