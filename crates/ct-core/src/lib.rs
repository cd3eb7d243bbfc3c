//! `ct-core` — foundational types for the container terminal simulator.
//!
//! This crate is a dependency of every other `ct-*` crate.  It has no `ct-*`
//! dependencies and minimal external ones (`rand`, `rand_distr`, and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `VesselId`, `ProcessId`, `PoolId`                     |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`rng`]         | `SimRng` (seeded, with exponential sampling)          |
//! | [`config`]      | `TerminalConfig` and its validation                   |
//! | [`error`]       | `ConfigError`, `ConfigResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load a `TerminalConfig` from a file.           |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::TerminalConfig;
pub use error::{ConfigError, ConfigResult};
pub use ids::{PoolId, ProcessId, VesselId};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
