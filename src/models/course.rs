//! Course (exam) model.
//!
//! A course needs one exam of fixed duration in a room large enough for
//! its enrollment and its declared minimum room capacity.

use serde::{Deserialize, Serialize};

/// Milliseconds per minute.
pub const MS_PER_MINUTE: i64 = 60_000;

/// A course whose final exam must be scheduled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Exam duration in minutes.
    pub duration_minutes: i32,
    /// Number of distinct enrolled students. Scheduling overwrites it with
    /// the count from the enrollment map.
    pub enrollment: i32,
    /// Independently declared minimum room capacity (0 if absent).
    pub min_capacity: i32,
}

impl Course {
    /// Creates a course with an exam of `duration_minutes`.
    pub fn new(id: impl Into<String>, duration_minutes: i32) -> Self {
        Self {
            id: id.into(),
            duration_minutes,
            enrollment: 0,
            min_capacity: 0,
        }
    }

    /// Sets the exam duration from a figure in hours.
    ///
    /// Fractional minutes are truncated.
    pub fn with_duration_hours(mut self, hours: f64) -> Self {
        self.duration_minutes = (hours * 60.0) as i32;
        self
    }

    /// Sets the enrollment count.
    pub fn with_enrollment(mut self, enrollment: i32) -> Self {
        self.enrollment = enrollment;
        self
    }

    /// Sets the minimum room capacity.
    pub fn with_min_capacity(mut self, min_capacity: i32) -> Self {
        self.min_capacity = min_capacity;
        self
    }

    /// Seats the exam room must provide: `max(enrollment, min_capacity)`.
    #[inline]
    pub fn required_capacity(&self) -> i32 {
        self.enrollment.max(self.min_capacity)
    }

    /// Exam duration (ms).
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        i64::from(self.duration_minutes) * MS_PER_MINUTE
    }
}
