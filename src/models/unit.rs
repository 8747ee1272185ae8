//! Unit model.
//!
//! A unit is one item requesting service: a label (e.g. a license
//! plate), a requested service class, and three timestamps. The arrival
//! timestamp is set at creation and immutable; service start and end
//! stay unset until a station begins service, and are set exactly once.
//!
//! # Time Representation
//! All times are whole minutes relative to the scheduler epoch (t=0).

use serde::{Deserialize, Serialize};

use super::ServiceClass;

/// One queued or in-service item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Unique identity, monotonically assigned by the scheduler.
    pub id: u64,
    /// Caller-supplied label (e.g. a plate).
    pub label: String,
    /// Requested service class.
    pub service_class: ServiceClass,
    /// Arrival time (min). Immutable after creation.
    pub arrival_min: i64,
    /// Service start time (min). `None` until assigned to a station.
    pub service_start_min: Option<i64>,
    /// Service end time (min). `None` until assigned to a station.
    pub service_end_min: Option<i64>,
}

impl Unit {
    /// Creates a newly arrived unit with unset service timestamps.
    pub fn new(id: u64, label: impl Into<String>, service_class: ServiceClass, now_min: i64) -> Self {
        Self {
            id,
            label: label.into(),
            service_class,
            arrival_min: now_min,
            service_start_min: None,
            service_end_min: None,
        }
    }

    /// Requested service duration in minutes.
    #[inline]
    pub fn duration_min(&self) -> i64 {
        self.service_class.duration_min()
    }

    /// Minutes waited since arrival.
    #[inline]
    pub fn waited_min(&self, now_min: i64) -> i64 {
        now_min - self.arrival_min
    }

    /// Whether service has begun.
    pub fn in_service(&self) -> bool {
        self.service_start_min.is_some()
    }

    /// Stamps the service window. Called exactly once, by the station
    /// that begins service.
    pub(crate) fn begin_service(&mut self, start_min: i64, end_min: i64) {
        debug_assert!(!self.in_service(), "service window stamped twice");
        self.service_start_min = Some(start_min);
        self.service_end_min = Some(end_min);
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} [{}] {}", self.id, self.label, self.service_class)
    }
}
