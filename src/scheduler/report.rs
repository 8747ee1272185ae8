//! Read-only facility reports.
//!
//! A [`Snapshot`] is the entire surface offered to presentation
//! layers: per-station occupancy with remaining time, the waiting
//! queue with estimated waits, and aggregate counts. Capturing one
//! never mutates scheduler state.
//!
//! Estimated waits are heuristic approximations, not guarantees;
//! render them as such.

use serde::Serialize;

use crate::models::ServiceClass;
use crate::scheduler::Scheduler;

/// Point-in-time view of the whole facility.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Clock at capture time (min).
    pub clock_min: i64,
    /// Per-station status, in id order.
    pub stations: Vec<StationReport>,
    /// Waiting queue, front first.
    pub waiting: Vec<QueueReport>,
    /// Units currently waiting.
    pub waiting_count: usize,
    /// Stations currently holding a unit.
    pub occupied_count: usize,
    /// Stations that could accept a unit now.
    pub available_count: usize,
    /// Units whose service has completed.
    pub completed_count: usize,
}

/// Status of one station.
#[derive(Debug, Clone, Serialize)]
pub struct StationReport {
    /// Station identity.
    pub station_id: u32,
    /// Current occupant, if any.
    pub occupant: Option<OccupantReport>,
    /// Minutes of service remaining (0 when vacant or lapsed).
    pub remaining_min: i64,
}

/// The unit held by an occupied station.
#[derive(Debug, Clone, Serialize)]
pub struct OccupantReport {
    /// Unit identity.
    pub unit_id: u64,
    /// Caller-supplied label.
    pub label: String,
    /// Requested service class.
    pub service_class: ServiceClass,
}

/// One waiting unit, with its estimated wait.
#[derive(Debug, Clone, Serialize)]
pub struct QueueReport {
    /// 1-based queue position.
    pub position: usize,
    /// Unit identity.
    pub unit_id: u64,
    /// Caller-supplied label.
    pub label: String,
    /// Requested service class.
    pub service_class: ServiceClass,
    /// Approximate wait in whole minutes.
    pub estimated_wait_min: i64,
}

impl Snapshot {
    /// Captures the current state of a scheduler.
    pub fn capture(scheduler: &Scheduler) -> Self {
        let now = scheduler.clock_min();

        let stations = scheduler
            .stations()
            .iter()
            .map(|station| StationReport {
                station_id: station.id,
                occupant: station.occupant().map(|unit| OccupantReport {
                    unit_id: unit.id,
                    label: unit.label.clone(),
                    service_class: unit.service_class,
                }),
                remaining_min: station.remaining_min(now),
            })
            .collect();

        let waiting = scheduler
            .waiting()
            .enumerate()
            .map(|(i, unit)| QueueReport {
                position: i + 1,
                unit_id: unit.id,
                label: unit.label.clone(),
                service_class: unit.service_class,
                estimated_wait_min: scheduler.estimate_for(unit),
            })
            .collect();

        Self {
            clock_min: now,
            stations,
            waiting,
            waiting_count: scheduler.waiting_count(),
            occupied_count: scheduler.occupied_count(),
            available_count: scheduler.available_count(),
            completed_count: scheduler.completed_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceClass;

    fn loaded_scheduler() -> Scheduler {
        let mut s = Scheduler::new(2).unwrap();
        s.admit("ABC-1234", ServiceClass::Express);
        s.admit("XYZ-5678", ServiceClass::Standard);
        s.admit("DEF-9876", ServiceClass::Extended);
        s.advance_clock(5);
        s
    }

    #[test]
    fn test_snapshot_stations() {
        let snap = loaded_scheduler().snapshot();

        assert_eq!(snap.clock_min, 5);
        assert_eq!(snap.stations.len(), 2);
        let s1 = &snap.stations[0];
        assert_eq!(s1.station_id, 1);
        assert_eq!(s1.occupant.as_ref().unwrap().label, "ABC-1234");
        assert_eq!(s1.remaining_min, 10);
        assert_eq!(snap.stations[1].remaining_min, 25);
    }

    #[test]
    fn test_snapshot_queue() {
        let snap = loaded_scheduler().snapshot();

        assert_eq!(snap.waiting.len(), 1);
        let q = &snap.waiting[0];
        assert_eq!(q.position, 1);
        assert_eq!(q.label, "DEF-9876");
        assert_eq!(q.service_class, ServiceClass::Extended);
        // waited 5, earliest release in 10, nobody ahead.
        assert_eq!(q.estimated_wait_min, 15);
    }

    #[test]
    fn test_snapshot_counts() {
        let snap = loaded_scheduler().snapshot();
        assert_eq!(snap.waiting_count, 1);
        assert_eq!(snap.occupied_count, 2);
        assert_eq!(snap.available_count, 0);
        assert_eq!(snap.completed_count, 0);
    }

    #[test]
    fn test_snapshot_does_not_mutate() {
        let mut s = loaded_scheduler();
        s.advance_clock(10); // first station lapses at 15
        let _ = s.snapshot();
        let snap = s.snapshot();
        // Repeated captures agree: no hidden reclaim or assignment.
        assert_eq!(snap.occupied_count, s.occupied_count());
        assert_eq!(snap.waiting_count, s.waiting_count());
    }

    #[test]
    fn test_snapshot_serializes() {
        let snap = loaded_scheduler().snapshot();
        let json = serde_json::to_value(&snap).unwrap();

        assert_eq!(json["clock_min"], 5);
        assert_eq!(json["stations"][0]["occupant"]["label"], "ABC-1234");
        assert_eq!(json["waiting"][0]["service_class"], "Extended");
        assert_eq!(json["occupied_count"], 2);
    }

    #[test]
    fn test_empty_facility_snapshot() {
        let snap = Scheduler::new(1).unwrap().snapshot();
        assert!(snap.waiting.is_empty());
        assert!(snap.stations[0].occupant.is_none());
        assert_eq!(snap.available_count, 1);
    }
}
