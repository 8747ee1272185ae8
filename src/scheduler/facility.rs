//! Facility scheduler.
//!
//! # Algorithm
//!
//! 1. Admissions append to the back of an unbounded waiting queue.
//! 2. After every admission and every clock advance, run one
//!    assignment pass: sweep stations in id order, reclaim lapsed
//!    occupants, and fill each vacant station from the queue via the
//!    selection policy.
//! 3. Occupancy windows are computed at assignment time; stations
//!    free themselves lazily once their deadline passes.
//!
//! The pass is a single sweep, not a fixed point: a station freed as
//! a side effect after its own visit waits for the next trigger.
//!
//! # Complexity
//! O(n + m) per pass where n=stations, m=queue length (FIFO policy).

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dispatching::{PolicyConfig, SelectionPolicy};
use crate::error::{Error, Result};
use crate::models::{ServiceClass, Station, Unit};
use crate::scheduler::Snapshot;

/// Estimation constant: typical service length in minutes.
pub const DEFAULT_AVG_SERVICE_MIN: i64 = 25;

/// Construction parameters for a [`Scheduler`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Number of stations (fixed for the scheduler's lifetime).
    pub station_count: u32,
    /// Selection policy choice.
    pub policy: PolicyConfig,
    /// Average service duration used by wait estimation (min).
    pub avg_service_min: i64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            station_count: 3,
            policy: PolicyConfig::Fifo,
            avg_service_min: DEFAULT_AVG_SERVICE_MIN,
        }
    }
}

impl SchedulerConfig {
    /// Creates a config with the given station count and defaults.
    pub fn new(station_count: u32) -> Self {
        Self {
            station_count,
            ..Default::default()
        }
    }

    /// Sets the selection policy.
    pub fn with_policy(mut self, policy: PolicyConfig) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the average-service-duration estimation constant.
    pub fn with_avg_service_min(mut self, avg_service_min: i64) -> Self {
        self.avg_service_min = avg_service_min;
        self
    }
}

/// The admission/assignment/release scheduler.
///
/// Owns the waiting queue, the station pool, and a simulated clock.
/// The clock starts at 0 and advances only through
/// [`advance_clock`](Self::advance_clock); the core never reads the
/// system clock, so runs are deterministic.
///
/// Every live unit is in exactly one place: the waiting queue, one
/// station, or the completed history.
///
/// # Example
///
/// ```
/// use stationq::{Scheduler, ServiceClass};
///
/// let mut s = Scheduler::new(1).unwrap();
/// s.admit("ABC-1234", ServiceClass::Express);
/// s.admit("XYZ-5678", ServiceClass::Standard);
/// assert_eq!(s.occupied_count(), 1);
/// assert_eq!(s.waiting_count(), 1);
///
/// s.advance_clock(15);
/// assert_eq!(s.completed_count(), 1);
/// assert_eq!(s.waiting_count(), 0);
/// ```
#[derive(Debug)]
pub struct Scheduler {
    stations: Vec<Station>,
    waiting: VecDeque<Unit>,
    history: Vec<Unit>,
    policy: Box<dyn SelectionPolicy>,
    avg_service_min: i64,
    clock_min: i64,
    next_unit_id: u64,
}

impl Scheduler {
    /// Creates a scheduler with the given station count and default
    /// config (FIFO policy).
    ///
    /// # Errors
    /// [`Error::InvalidStationCount`] when `station_count` is zero.
    pub fn new(station_count: u32) -> Result<Self> {
        Self::from_config(SchedulerConfig::new(station_count))
    }

    /// Creates a scheduler from a config.
    ///
    /// # Errors
    /// [`Error::InvalidStationCount`] for zero stations,
    /// [`Error::InvalidAvgServiceDuration`] for a non-positive
    /// estimation constant.
    pub fn from_config(config: SchedulerConfig) -> Result<Self> {
        if config.station_count == 0 {
            return Err(Error::InvalidStationCount(config.station_count));
        }
        if config.avg_service_min <= 0 {
            return Err(Error::InvalidAvgServiceDuration(config.avg_service_min));
        }

        let stations = (1..=config.station_count).map(Station::new).collect();
        Ok(Self {
            stations,
            waiting: VecDeque::new(),
            history: Vec::new(),
            policy: config.policy.build(),
            avg_service_min: config.avg_service_min,
            clock_min: 0,
            next_unit_id: 1,
        })
    }

    /// Admits a new arrival and runs one assignment pass.
    ///
    /// The unit's identity comes from the scheduler's own monotonic
    /// counter; its arrival time is the current clock. The queue is
    /// unbounded, so admission never fails. Returns the new unit's id.
    pub fn admit(&mut self, label: impl Into<String>, service_class: ServiceClass) -> u64 {
        let id = self.next_unit_id;
        self.next_unit_id += 1;

        let unit = Unit::new(id, label, service_class, self.clock_min);
        debug!(unit = %unit, clock_min = self.clock_min, "unit admitted to queue");
        self.waiting.push_back(unit);
        self.assign_waiting();
        id
    }

    /// Runs one assignment pass.
    ///
    /// Sweeps stations in id order. Each station first reclaims a
    /// lapsed occupant into the history, then, if vacant and the queue
    /// is non-empty, receives the unit chosen by the selection policy.
    /// A no-op when nothing is reclaimable or assignable.
    pub fn assign_waiting(&mut self) {
        let now = self.clock_min;
        for station in &mut self.stations {
            if let Some(done) = station.reclaim_if_due(now) {
                debug!(unit = %done, station = station.id, "service complete, station reclaimed");
                self.history.push(done);
            }

            if station.is_occupied() {
                continue;
            }
            let Some(idx) = self.policy.select(&self.waiting) else {
                break;
            };
            // The index was produced against this same queue.
            let Some(unit) = self.waiting.remove(idx) else {
                break;
            };
            debug!(unit = %unit, station = station.id, clock_min = now, "unit began service");
            station.occupy(unit, now);
        }
    }

    /// Advances the simulated clock by `delta_min` (clamped to be
    /// non-negative) and runs one assignment pass, so stations whose
    /// deadlines have lapsed absorb waiting units.
    pub fn advance_clock(&mut self, delta_min: i64) {
        self.clock_min += delta_min.max(0);
        self.assign_waiting();
    }

    /// Approximate wait in whole minutes for a unit still in the
    /// queue, or `None` when the id is not waiting.
    ///
    /// The estimate sums the time already waited, the time until the
    /// earliest station frees (when none is available), and a
    /// queue-position term of `ahead * avg_service_min / stations`
    /// (truncating division). A heuristic, not a guarantee.
    pub fn estimated_wait_min(&self, unit_id: u64) -> Option<i64> {
        let unit = self.waiting.iter().find(|u| u.id == unit_id)?;
        Some(self.estimate_for(unit))
    }

    pub(crate) fn estimate_for(&self, unit: &Unit) -> i64 {
        let now = self.clock_min;
        let mut total = unit.waited_min(now);

        if !self.stations.iter().any(|s| s.is_available(now)) {
            let earliest = self
                .stations
                .iter()
                .map(Station::release_deadline_min)
                .min()
                .unwrap_or(now);
            total += earliest - now;
        }

        let ahead = self
            .waiting
            .iter()
            .filter(|u| u.arrival_min < unit.arrival_min)
            .count() as i64;
        total += ahead * self.avg_service_min / self.stations.len() as i64;

        total.max(0)
    }

    /// Captures a read-only snapshot of stations and queue.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    /// Current simulated clock (min).
    pub fn clock_min(&self) -> i64 {
        self.clock_min
    }

    /// The station pool, in id order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// The waiting queue, front first.
    pub fn waiting(&self) -> impl Iterator<Item = &Unit> {
        self.waiting.iter()
    }

    /// Completed units, in completion order.
    pub fn history(&self) -> &[Unit] {
        &self.history
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Units currently waiting.
    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }

    /// Stations currently holding a unit.
    pub fn occupied_count(&self) -> usize {
        self.stations.iter().filter(|s| s.is_occupied()).count()
    }

    /// Stations that could accept a unit at the current clock.
    pub fn available_count(&self) -> usize {
        let now = self.clock_min;
        self.stations.iter().filter(|s| s.is_available(now)).count()
    }

    /// Units whose service has completed.
    pub fn completed_count(&self) -> usize {
        self.history.len()
    }
}
