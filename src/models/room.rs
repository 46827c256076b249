//! Room model.
//!
//! A room hosts exams. It has a seat capacity and a list of availability
//! windows during which exams may be placed.

use serde::{Deserialize, Serialize};

use super::{Interval, IntervalSet};
use crate::error::ScheduleError;

/// An exam room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Number of seats.
    pub capacity: i32,
    /// Declared availability windows. May be unsorted; must not overlap.
    pub availability: Vec<Interval>,
}

impl Room {
    /// Creates a room with no availability.
    pub fn new(id: impl Into<String>, capacity: i32) -> Self {
        Self {
            id: id.into(),
            capacity,
            availability: Vec::new(),
        }
    }

    /// Adds an availability window [start, end).
    pub fn with_window(mut self, start_ms: i64, end_ms: i64) -> Self {
        self.availability.push(Interval::new(start_ms, end_ms));
        self
    }

    /// Whether the room seats at least `required` people.
    #[inline]
    pub fn can_seat(&self, required: i32) -> bool {
        self.capacity >= required
    }

    /// Total declared available time (ms).
    pub fn available_ms(&self) -> i64 {
        self.availability.iter().map(Interval::duration_ms).sum()
    }

    /// Availability as a sorted, disjoint interval set.
    pub fn free_blocks(&self) -> Result<IntervalSet, ScheduleError> {
        IntervalSet::from_windows(self.availability.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_builder() {
        let r = Room::new("R101", 40)
            .with_window(0, 3_600_000)
            .with_window(7_200_000, 10_800_000);

        assert_eq!(r.id, "R101");
        assert_eq!(r.capacity, 40);
        assert_eq!(r.availability.len(), 2);
        assert_eq!(r.available_ms(), 7_200_000);
    }

    #[test]
    fn test_can_seat() {
        let r = Room::new("R1", 30);
        assert!(r.can_seat(30));
        assert!(r.can_seat(0));
        assert!(!r.can_seat(31));
    }

    #[test]
    fn test_free_blocks_sorted() {
        let r = Room::new("R1", 10).with_window(500, 600).with_window(0, 100);
        let blocks = r.free_blocks().unwrap();
        assert_eq!(blocks.as_slice(), &[Interval::new(0, 100), Interval::new(500, 600)]);
    }

    #[test]
    fn test_free_blocks_rejects_inverted() {
        let r = Room::new("R1", 10).with_window(600, 500);
        assert!(r.free_blocks().is_err());
    }
}
