//! The terminal's processes.
//!
//! Each entity is an explicit state machine; the state names where the
//! process is suspended, so `resume` knows what it is resuming from.
//!
//! ```text
//! VesselArrivals  Start ─▶ Waiting ⟲                      (sleep: inter-arrival gap)
//! Berthing        Arrived ─▶ WaitingBerth ─▶ Berthed ─▶ Departed
//!                            (acquire berth)  (join discharge)
//! Discharge       Start ─▶ WaitingCrane ─▶ Moving ⟲ / Polling ⟲ ─▶ Done
//!                          (acquire crane)  (sleep move)  (sleep 1)
//! TruckHaul       Start ─▶ WaitingTruck ─▶ Travelling ─▶ Done
//!                          (acquire truck)  (sleep trip)
//! ```

use ct_core::ProcessId;
use ct_sim::{Context, Process, SimResult, Step};

use crate::{ContainerMove, Notification, TerminalWorld, Vessel};

/// Polling interval of a crane while every truck is out.
const TRUCK_POLL_TICKS: u64 = 1;

type Cx<'a> = Context<'a, TerminalProcess>;

fn emit(cx: &mut Cx<'_>, notification: Notification) {
    let at = cx.now();
    cx.world.record(at, notification);
}

/// Every kind of process the terminal runs.
#[derive(Debug)]
pub enum TerminalProcess {
    Arrivals(VesselArrivals),
    Berthing(Berthing),
    Discharge(Discharge),
    Haul(TruckHaul),
}

impl Process for TerminalProcess {
    type World = TerminalWorld;

    fn resume(&mut self, cx: &mut Context<'_, Self>) -> SimResult<Step> {
        match self {
            TerminalProcess::Arrivals(p)  => p.resume(cx),
            TerminalProcess::Berthing(p)  => p.resume(cx),
            TerminalProcess::Discharge(p) => p.resume(cx),
            TerminalProcess::Haul(p)      => p.resume(cx),
        }
    }
}

// ── VesselArrivals ────────────────────────────────────────────────────────────

/// Generates vessels for as long as the arrival source yields gaps.
///
/// Each vessel gets a detached [`Berthing`] process; the generator never
/// waits for one to finish.
#[derive(Debug, Default)]
pub struct VesselArrivals {
    waiting: bool,
}

impl VesselArrivals {
    pub fn new() -> Self {
        Self::default()
    }

    fn resume(&mut self, cx: &mut Cx<'_>) -> SimResult<Step> {
        if self.waiting {
            let id = cx.world.next_vessel();
            emit(cx, Notification::Arrived { vessel: id });
            let vessel = Vessel::new(id, cx.world.config.containers_per_vessel);
            cx.spawn(TerminalProcess::Berthing(Berthing::new(vessel)))?;
        }

        match cx.world.next_gap() {
            Some(gap) => {
                self.waiting = true;
                Ok(Step::Sleep(gap))
            }
            None => Ok(Step::Finish),
        }
    }
}

// ── Berthing ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BerthingState {
    Arrived,
    WaitingBerth,
    Berthed { berth: u32, discharge: ProcessId },
    Departed,
}

/// One vessel's stay: take a berth, discharge, leave.
#[derive(Debug)]
pub struct Berthing {
    vessel: Vessel,
    state:  BerthingState,
}

impl Berthing {
    pub fn new(vessel: Vessel) -> Self {
        Self { vessel, state: BerthingState::Arrived }
    }

    pub fn state(&self) -> BerthingState {
        self.state
    }

    fn resume(&mut self, cx: &mut Cx<'_>) -> SimResult<Step> {
        let vessel = self.vessel.id;
        match self.state {
            BerthingState::Arrived => {
                self.state = BerthingState::WaitingBerth;
                Ok(Step::Acquire(cx.world.pools.berths))
            }
            BerthingState::WaitingBerth => {
                let berth = cx.world.berth_labels.next();
                emit(cx, Notification::Berthed { vessel, berth });
                let discharge = cx.spawn(TerminalProcess::Discharge(Discharge::new(self.vessel)))?;
                self.state = BerthingState::Berthed { berth, discharge };
                Ok(Step::Join(discharge))
            }
            BerthingState::Berthed { berth, .. } => {
                emit(cx, Notification::VesselUnloaded { vessel });
                let berths = cx.world.pools.berths;
                cx.release(berths)?;
                emit(cx, Notification::LeftBerth { vessel, berth });
                self.state = BerthingState::Departed;
                Ok(Step::Finish)
            }
            BerthingState::Departed => Ok(Step::Finish),
        }
    }
}

// ── Discharge ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DischargeState {
    Start,
    WaitingCrane,
    /// Crane is moving container `unloaded` onto the quay.
    Moving,
    /// Every truck was out at the last check.
    Polling,
    Done,
}

/// Unloads one vessel with one crane.
///
/// Before each container the crane peeks at truck occupancy.  A free truck
/// means the container is moved and handed to a detached [`TruckHaul`];
/// otherwise the crane checks again one tick later.  The crane is released
/// as soon as the last container is handed over, without waiting for its
/// truck to come back.
#[derive(Debug)]
pub struct Discharge {
    vessel:   Vessel,
    crane:    u32,
    unloaded: u32,
    state:    DischargeState,
}

impl Discharge {
    pub fn new(vessel: Vessel) -> Self {
        Self { vessel, crane: 0, unloaded: 0, state: DischargeState::Start }
    }

    pub fn unloaded(&self) -> u32 {
        self.unloaded
    }

    pub fn state(&self) -> DischargeState {
        self.state
    }

    fn resume(&mut self, cx: &mut Cx<'_>) -> SimResult<Step> {
        match self.state {
            DischargeState::Start => {
                self.state = DischargeState::WaitingCrane;
                Ok(Step::Acquire(cx.world.pools.cranes))
            }
            DischargeState::WaitingCrane => {
                self.crane = cx.world.crane_labels.next();
                self.next_container(cx)
            }
            DischargeState::Moving => {
                let cargo = ContainerMove { container: self.unloaded, vessel: self.vessel.id };
                cx.spawn(TerminalProcess::Haul(TruckHaul::new(cargo)))?;
                self.next_container(cx)
            }
            DischargeState::Polling => self.next_container(cx),
            DischargeState::Done => Ok(Step::Finish),
        }
    }

    fn next_container(&mut self, cx: &mut Cx<'_>) -> SimResult<Step> {
        if self.unloaded >= self.vessel.containers {
            let cranes = cx.world.pools.cranes;
            cx.release(cranes)?;
            self.state = DischargeState::Done;
            return Ok(Step::Finish);
        }

        let trucks = cx.world.pools.trucks;
        if cx.occupancy(trucks)? < cx.capacity(trucks)? {
            self.unloaded += 1;
            emit(cx, Notification::Unloading {
                crane:     self.crane,
                container: self.unloaded,
                vessel:    self.vessel.id,
            });
            self.state = DischargeState::Moving;
            Ok(Step::Sleep(cx.world.config.container_move_ticks))
        } else {
            self.state = DischargeState::Polling;
            Ok(Step::Sleep(TRUCK_POLL_TICKS))
        }
    }
}

// ── TruckHaul ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaulState {
    Start,
    WaitingTruck,
    Travelling,
    Done,
}

/// Carries one container to the yard and brings the truck back.
#[derive(Debug)]
pub struct TruckHaul {
    cargo: ContainerMove,
    state: HaulState,
}

impl TruckHaul {
    pub fn new(cargo: ContainerMove) -> Self {
        Self { cargo, state: HaulState::Start }
    }

    pub fn state(&self) -> HaulState {
        self.state
    }

    fn resume(&mut self, cx: &mut Cx<'_>) -> SimResult<Step> {
        let ContainerMove { container, vessel } = self.cargo;
        match self.state {
            HaulState::Start => {
                self.state = HaulState::WaitingTruck;
                Ok(Step::Acquire(cx.world.pools.trucks))
            }
            HaulState::WaitingTruck => {
                emit(cx, Notification::ContainerDeparted { container, vessel });
                self.state = HaulState::Travelling;
                Ok(Step::Sleep(cx.world.config.truck_trip_ticks))
            }
            HaulState::Travelling => {
                emit(cx, Notification::TruckReturned { container, vessel });
                let trucks = cx.world.pools.trucks;
                cx.release(trucks)?;
                self.state = HaulState::Done;
                Ok(Step::Finish)
            }
            HaulState::Done => Ok(Step::Finish),
        }
    }
}
