//! Scheduling core for fixed-capacity service facilities.
//!
//! Models a facility with N parallel service stations, an unbounded
//! FIFO arrival queue, and time-based automatic release: each admitted
//! unit requests one of a fixed catalog of service classes, waits for
//! a free station, occupies it for the class duration, and is released
//! when the duration elapses. Time is a simulated logical clock
//! advanced by the caller; the core never reads the system clock.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ServiceClass`, `Unit`, `Station`
//! - **`dispatching`**: `SelectionPolicy` trait and built-in policies
//!   (FIFO, shortest-service-first above a threshold)
//! - **`scheduler`**: `Scheduler` (admission, assignment pass, wait
//!   estimation, clock) and `Snapshot` reports
//! - **`error`**: Error taxonomy
//!
//! # Example
//!
//! ```
//! use stationq::{Scheduler, ServiceClass};
//!
//! let mut s = Scheduler::new(3)?;
//! s.admit("ABC-1234", ServiceClass::Express);
//! s.admit("XYZ-5678", ServiceClass::Standard);
//!
//! s.advance_clock(15);
//! let snap = s.snapshot();
//! assert_eq!(snap.completed_count, 1);
//! # Ok::<(), stationq::Error>(())
//! ```

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;

pub use error::{Error, Result};
pub use models::{ServiceClass, Station, Unit};
pub use scheduler::{Scheduler, SchedulerConfig, Snapshot};
