//! Station model.
//!
//! A station is one service slot holding at most one unit, plus the
//! time at which it frees itself. The occupant is held by value:
//! assignment moves the unit in, release moves it back out, so no two
//! code paths can observe divergent unit state.

use serde::Serialize;

use super::Unit;

/// One service slot with capacity for a single occupant.
#[derive(Debug, Clone, Serialize)]
pub struct Station {
    /// Station identity (1..=N, fixed at construction).
    pub id: u32,
    /// Current occupant, if any.
    occupant: Option<Unit>,
    /// Time at which the occupant is released (min). Meaningful only
    /// while occupied.
    release_deadline_min: i64,
}

impl Station {
    /// Creates an empty station with the given identity.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            occupant: None,
            release_deadline_min: 0,
        }
    }

    /// Whether the station could accept a unit at `now_min`.
    ///
    /// True when vacant, or when the current occupant's deadline has
    /// passed (the occupant still needs to be collected via
    /// [`reclaim_if_due`](Self::reclaim_if_due)).
    pub fn is_available(&self, now_min: i64) -> bool {
        match &self.occupant {
            None => true,
            Some(_) => now_min >= self.release_deadline_min,
        }
    }

    /// Whether the station currently holds a unit.
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Lazy release: if the occupant's deadline has passed at
    /// `now_min`, clears the slot and returns the finished unit.
    pub fn reclaim_if_due(&mut self, now_min: i64) -> Option<Unit> {
        if self.is_occupied() && now_min >= self.release_deadline_min {
            self.release()
        } else {
            None
        }
    }

    /// Begins service for `unit`.
    ///
    /// The station must be vacant; callers check availability first.
    /// Stamps the unit's service window — the only place service
    /// timestamps are set — and records the release deadline.
    pub fn occupy(&mut self, mut unit: Unit, now_min: i64) {
        debug_assert!(!self.is_occupied(), "station {} already occupied", self.id);
        let deadline = now_min + unit.duration_min();
        unit.begin_service(now_min, deadline);
        self.release_deadline_min = deadline;
        self.occupant = Some(unit);
    }

    /// Clears the slot unconditionally, returning the evicted unit.
    /// Idempotent: a vacant station returns `None`.
    pub fn release(&mut self) -> Option<Unit> {
        self.release_deadline_min = 0;
        self.occupant.take()
    }

    /// Borrows the current occupant.
    pub fn occupant(&self) -> Option<&Unit> {
        self.occupant.as_ref()
    }

    /// The release deadline (min). Meaningful only while occupied.
    pub fn release_deadline_min(&self) -> i64 {
        self.release_deadline_min
    }

    /// Minutes of service remaining at `now_min` (0 when vacant or lapsed).
    pub fn remaining_min(&self, now_min: i64) -> i64 {
        if self.is_occupied() {
            (self.release_deadline_min - now_min).max(0)
        } else {
            0
        }
    }
}
