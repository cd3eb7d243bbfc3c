//! `ct-terminal` — the container terminal model.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                     |
//! |------------------|--------------------------------------------------------------|
//! | [`arrivals`]     | `InterArrival` trait, `ExponentialArrivals`, `ScriptedArrivals` |
//! | [`notification`] | `Notification`, `TimedNotification` — the observation stream |
//! | [`observer`]     | `TerminalObserver`, `SilentObserver`, `TraceRecorder`        |
//! | [`world`]        | `TerminalWorld`, `Vessel`, `ContainerMove`, `LabelCycle`     |
//! | [`process`]      | `TerminalProcess` and the four per-entity state machines     |
//! | [`builder`]      | `TerminalBuilder`                                            |
//! | [`terminal`]     | `Terminal` — owns the scheduler and runs to a horizon        |
//! | [`summary`]      | `RunSummary`                                                 |
//! | [`error`]        | `TerminalError`, `TerminalResult<T>`                         |
//!
//! # Process tree
//!
//! ```text
//! VesselArrivals ──spawns──▶ Berthing (one per vessel)
//!                               └──joins──▶ Discharge
//!                                              └──spawns──▶ TruckHaul (one per container)
//! ```
//!
//! Berths, cranes, and trucks are `ct_sim::ResourcePool`s.  Discharge gates
//! each container on a non-queuing peek at truck occupancy and polls once
//! per tick while every truck is out; the truck hauls themselves queue for a
//! truck first-come first-served.

pub mod arrivals;
pub mod builder;
pub mod error;
pub mod notification;
pub mod observer;
pub mod process;
pub mod summary;
pub mod terminal;
pub mod world;


pub use arrivals::{ExponentialArrivals, InterArrival, ScriptedArrivals};
pub use builder::TerminalBuilder;
pub use error::{TerminalError, TerminalResult};
pub use notification::{Notification, TimedNotification};
pub use observer::{SilentObserver, TerminalObserver, TraceRecorder};
pub use process::TerminalProcess;
pub use summary::RunSummary;
pub use terminal::Terminal;
pub use world::{ContainerMove, LabelCycle, TerminalPools, TerminalWorld, Vessel};
