//! Built-in selection policies.
//!
//! # Selection Convention
//! Policies return a queue index; the front of the queue is index 0
//! and holds the earliest arrival.

use std::collections::VecDeque;

use super::SelectionPolicy;
use crate::models::Unit;

/// First In First Out.
///
/// Always selects the head of the waiting queue, preserving arrival
/// order exactly.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl SelectionPolicy for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn select(&self, waiting: &VecDeque<Unit>) -> Option<usize> {
        if waiting.is_empty() {
            None
        } else {
            Some(0)
        }
    }
}

/// Shortest Service First above a queue-length threshold.
///
/// Behaves as FIFO while the queue holds at most `threshold` units.
/// Above the threshold it selects the waiting unit with the shortest
/// service duration, breaking ties by arrival order (the earlier
/// arrival wins). Trades strict fairness for queue drain rate under
/// load.
#[derive(Debug, Clone, Copy)]
pub struct ShortestServiceFirst {
    /// Queue length at or below which FIFO order still applies.
    pub threshold: usize,
}

impl SelectionPolicy for ShortestServiceFirst {
    fn name(&self) -> &'static str {
        "SSF"
    }

    fn select(&self, waiting: &VecDeque<Unit>) -> Option<usize> {
        if waiting.is_empty() {
            return None;
        }
        if waiting.len() <= self.threshold {
            return Some(0);
        }

        // min_by_key keeps the first minimum, so ties fall back to
        // arrival order.
        waiting
            .iter()
            .enumerate()
            .min_by_key(|(_, u)| u.duration_min())
            .map(|(idx, _)| idx)
    }
}
