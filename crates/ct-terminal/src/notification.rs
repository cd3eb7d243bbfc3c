//! The observation stream: one notification per state transition.

use std::fmt;

use ct_core::{Tick, VesselId};

/// A state transition of a vessel, crane, or truck.
///
/// `Display` renders the terminal's status line without the time prefix;
/// see [`TimedNotification`] for the full line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// A vessel entered the port and queued for a berth.
    Arrived { vessel: VesselId },

    /// A berth was granted.  `berth` is the acquisition-order label.
    Berthed { vessel: VesselId, berth: u32 },

    /// A crane started moving container `container` (1-based) off the vessel.
    Unloading { crane: u32, container: u32, vessel: VesselId },

    /// A truck was granted and left for the yard with the container.
    ContainerDeparted { container: u32, vessel: VesselId },

    /// The truck came back and was released.
    TruckReturned { container: u32, vessel: VesselId },

    /// The crane finished its last container and was released.
    VesselUnloaded { vessel: VesselId },

    /// The berth was released.  `berth` is the label captured at berthing.
    LeftBerth { vessel: VesselId, berth: u32 },
}

impl Notification {
    pub fn vessel(&self) -> VesselId {
        match *self {
            Notification::Arrived { vessel }
            | Notification::Berthed { vessel, .. }
            | Notification::Unloading { vessel, .. }
            | Notification::ContainerDeparted { vessel, .. }
            | Notification::TruckReturned { vessel, .. }
            | Notification::VesselUnloaded { vessel }
            | Notification::LeftBerth { vessel, .. } => vessel,
        }
    }

    /// Container sequence number, for the per-container transitions.
    pub fn container(&self) -> Option<u32> {
        match *self {
            Notification::Unloading { container, .. }
            | Notification::ContainerDeparted { container, .. }
            | Notification::TruckReturned { container, .. } => Some(container),
            _ => None,
        }
    }

    /// Berth or crane label, where the transition names one.
    pub fn label(&self) -> Option<u32> {
        match *self {
            Notification::Berthed { berth, .. } | Notification::LeftBerth { berth, .. } => Some(berth),
            Notification::Unloading { crane, .. } => Some(crane),
            _ => None,
        }
    }

    /// Stable snake_case name, used as a column value by output writers.
    pub fn kind(&self) -> &'static str {
        match self {
            Notification::Arrived { .. }           => "arrived",
            Notification::Berthed { .. }           => "berthed",
            Notification::Unloading { .. }         => "unloading",
            Notification::ContainerDeparted { .. } => "container_departed",
            Notification::TruckReturned { .. }     => "truck_returned",
            Notification::VesselUnloaded { .. }    => "vessel_unloaded",
            Notification::LeftBerth { .. }         => "left_berth",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Notification::Arrived { vessel } => {
                write!(f, "Vessel {} has arrived and waiting to berth", vessel.0)
            }
            Notification::Berthed { vessel, berth } => {
                write!(f, "Vessel {} berthed at berth {}", vessel.0, berth)
            }
            Notification::Unloading { crane, container, vessel } => {
                write!(f, "Crane {} unloading container {} from vessel {}", crane, container, vessel.0)
            }
            Notification::ContainerDeparted { container, vessel } => {
                write!(f, "Container {} from vessel {} is on its way to yard", container, vessel.0)
            }
            Notification::TruckReturned { container, vessel } => write!(
                f,
                "Truck carrying container {} from vessel {} is back at terminal",
                container, vessel.0,
            ),
            Notification::VesselUnloaded { vessel } => write!(f, "Vessel {} unloaded", vessel.0),
            Notification::LeftBerth { vessel, berth } => {
                write!(f, "Vessel {} left the berth {}", vessel.0, berth)
            }
        }
    }
}

/// A notification stamped with the simulated time it happened at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedNotification {
    pub at:           Tick,
    pub notification: Notification,
}

impl fmt::Display for TimedNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.at.0, self.notification)
    }
}
