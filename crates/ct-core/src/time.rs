//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically non-decreasing `Tick` counter and is the only
//! clock the simulator knows about.  There is no mapping to wall-clock time:
//! a tick is whatever unit the configuration's durations are expressed in
//! (minutes for the default terminal).
//!
//! Using an integer tick as the canonical time unit means all schedule
//! arithmetic is exact (no floating-point drift) and comparisons are O(1).

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation time.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulated "now".
///
/// Owned by the scheduler and moved forward only from its dispatch loop.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    current_tick: Tick,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current simulated time.
    #[inline]
    pub fn now(&self) -> Tick {
        self.current_tick
    }

    /// Move the clock to `tick`.
    ///
    /// # Panics
    /// Panics in debug mode if `tick` lies in the past.
    #[inline]
    pub fn advance_to(&mut self, tick: Tick) {
        debug_assert!(
            tick >= self.current_tick,
            "clock moved backwards: {} -> {}",
            self.current_tick,
            tick,
        );
        self.current_tick = tick;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.current_tick.fmt(f)
    }
}
