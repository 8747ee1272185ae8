//! Selection policies for filling a freed station.
//!
//! A selection policy chooses which waiting unit fills a newly
//! available station. The default is strict first-in-first-out; a
//! load-aware alternative prefers shorter service classes once the
//! queue grows past a threshold.
//!
//! # Usage
//!
//! ```
//! use stationq::dispatching::{PolicyConfig, SelectionPolicy};
//!
//! let policy = PolicyConfig::ShortestServiceFirstAboveThreshold(5).build();
//! assert_eq!(policy.name(), "SSF");
//! ```

mod policies;

pub use policies::{Fifo, ShortestServiceFirst};

use std::collections::VecDeque;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::models::Unit;

/// A rule choosing which waiting unit fills an available station.
///
/// Returns an index into the waiting queue (front = 0), or `None`
/// when the queue is empty. The scheduler removes the selected unit
/// and moves it into the station.
pub trait SelectionPolicy: Send + Sync + Debug {
    /// Policy name (e.g. "FIFO", "SSF").
    fn name(&self) -> &'static str;

    /// Picks the queue index of the next unit to serve.
    fn select(&self, waiting: &VecDeque<Unit>) -> Option<usize>;
}

/// Serializable policy choice for scheduler construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PolicyConfig {
    /// Strict first-in-first-out (default).
    #[default]
    Fifo,
    /// FIFO while the queue holds at most this many units; above the
    /// threshold, shortest service class first.
    ShortestServiceFirstAboveThreshold(usize),
}

impl PolicyConfig {
    /// Instantiates the configured policy.
    pub fn build(self) -> Box<dyn SelectionPolicy> {
        match self {
            PolicyConfig::Fifo => Box::new(Fifo),
            PolicyConfig::ShortestServiceFirstAboveThreshold(threshold) => {
                Box::new(ShortestServiceFirst { threshold })
            }
        }
    }
}
