//! Terminal configuration.

use crate::{ConfigError, ConfigResult};

/// Immutable run configuration for one terminal.
///
/// Passed by value into the terminal builder; nothing in the simulator reads
/// process-wide settings.  Typically left at its defaults or loaded from a
/// JSON file by the application crate (with the `serde` feature), then
/// overridden field by field.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TerminalConfig {
    /// Number of berths.  Default: 2.
    pub berths: u32,

    /// Number of quay cranes.  Default: 2.
    pub cranes: u32,

    /// Number of yard trucks.  Default: 3.
    pub trucks: u32,

    /// Containers discharged from every vessel.  Default: 150.
    pub containers_per_vessel: u32,

    /// Ticks a crane needs to move one container onto the quay.  Default: 3.
    pub container_move_ticks: u64,

    /// Ticks for a truck round trip quay → yard → quay.  Default: 6.
    pub truck_trip_ticks: u64,

    /// Mean ticks between vessel arrivals (exponentially distributed).
    /// Default: 300, i.e. an arrival rate of 1/300.
    pub mean_interarrival_ticks: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            berths:                  2,
            cranes:                  2,
            trucks:                  3,
            containers_per_vessel:   150,
            container_move_ticks:    3,
            truck_trip_ticks:        6,
            mean_interarrival_ticks: 300.0,
            seed:                    42,
        }
    }
}

impl TerminalConfig {
    /// Check that every capacity, count, and duration is positive.
    pub fn validate(&self) -> ConfigResult<()> {
        for (what, capacity) in [
            ("berth", self.berths),
            ("crane", self.cranes),
            ("truck", self.trucks),
        ] {
            if capacity == 0 {
                return Err(ConfigError::ZeroCapacity { what });
            }
        }
        if self.containers_per_vessel == 0 {
            return Err(ConfigError::NoContainers);
        }
        if self.container_move_ticks == 0 {
            return Err(ConfigError::ZeroDuration { what: "container move" });
        }
        if self.truck_trip_ticks == 0 {
            return Err(ConfigError::ZeroDuration { what: "truck trip" });
        }
        let mean = self.mean_interarrival_ticks;
        if !mean.is_finite() || mean <= 0.0 {
            return Err(ConfigError::InterArrival(mean));
        }
        Ok(())
    }

    /// Vessel arrival rate per tick (`1 / mean_interarrival_ticks`).
    #[inline]
    pub fn arrival_rate(&self) -> f64 {
        1.0 / self.mean_interarrival_ticks
    }
}
