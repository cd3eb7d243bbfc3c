//! Sources of vessel inter-arrival gaps.

use std::collections::VecDeque;

use ct_core::{ConfigError, ConfigResult, SimRng};
use rand_distr::Exp;

/// Supplies the gap, in ticks, before the next vessel arrives.
///
/// Returning `None` stops the arrival process for the rest of the run.
pub trait InterArrival {
    fn next_gap(&mut self) -> Option<u64>;
}

/// Exponentially distributed gaps, truncated to whole ticks.
///
/// Truncation means gaps of zero occur; two vessels may arrive at the same
/// tick.
pub struct ExponentialArrivals {
    rng:  SimRng,
    dist: Exp<f64>,
}

impl ExponentialArrivals {
    pub fn new(mean_ticks: f64, rng: SimRng) -> ConfigResult<Self> {
        if !mean_ticks.is_finite() || mean_ticks <= 0.0 {
            return Err(ConfigError::InterArrival(mean_ticks));
        }
        let dist = Exp::new(1.0 / mean_ticks).map_err(|_| ConfigError::InterArrival(mean_ticks))?;
        Ok(Self { rng, dist })
    }
}

impl InterArrival for ExponentialArrivals {
    fn next_gap(&mut self) -> Option<u64> {
        let gap: f64 = self.rng.sample(&self.dist);
        Some(gap.floor() as u64)
    }
}

/// Replays a fixed list of gaps, then stops.
///
/// Used to place vessels at exact times.
#[derive(Clone, Debug, Default)]
pub struct ScriptedArrivals {
    gaps: VecDeque<u64>,
}

impl ScriptedArrivals {
    pub fn new(gaps: impl IntoIterator<Item = u64>) -> Self {
        Self { gaps: gaps.into_iter().collect() }
    }

    /// Vessels arriving at the given absolute times (must be non-decreasing).
    pub fn at_times(times: impl IntoIterator<Item = u64>) -> Self {
        let mut last = 0;
        let gaps = times
            .into_iter()
            .map(|t| {
                let gap = t.saturating_sub(last);
                last = last.max(t);
                gap
            })
            .collect();
        Self { gaps }
    }
}

impl InterArrival for ScriptedArrivals {
    fn next_gap(&mut self) -> Option<u64> {
        self.gaps.pop_front()
    }
}
