//! Facility scheduler and read-only reports.
//!
//! `Scheduler` owns the waiting queue, the station pool, and the
//! simulated clock; `Snapshot` is the read-only view handed to
//! presentation layers.
//!
//! # Algorithm
//!
//! One assignment pass runs after every admission and every clock
//! advance: stations are swept once in id order, lapsed occupants are
//! reclaimed, and vacant stations are filled from the queue by the
//! selection policy.

mod facility;
mod report;

pub use facility::{Scheduler, SchedulerConfig, DEFAULT_AVG_SERVICE_MIN};
pub use report::{OccupantReport, QueueReport, Snapshot, StationReport};
