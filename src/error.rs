//! Error types.
//!
//! Infeasible placements are not errors: a course that cannot be placed
//! is recorded as unscheduled. Errors here are precondition violations
//! detected at construction time, or misuse of the allocation API.

use thiserror::Error;

use crate::models::Interval;
use crate::validation::ValidationError;

/// Errors raised by the scheduling core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// Input failed validation; all detected problems are listed.
    #[error("invalid scheduling input ({} problem(s)): {}", .0.len(), summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    /// An interval has `start_ms >= end_ms`.
    #[error("malformed interval [{}, {})", .0.start_ms, .0.end_ms)]
    MalformedInterval(Interval),

    /// An insertion would overlap an interval already in the set.
    #[error("interval [{}, {}) overlaps [{}, {})", .new.start_ms, .new.end_ms, .existing.start_ms, .existing.end_ms)]
    IntervalOverlap {
        /// Interval being inserted.
        new: Interval,
        /// Interval already present.
        existing: Interval,
    },

    /// A candidate no longer matches the allocator state it was taken from.
    #[error("stale candidate for room '{room_id}' block {block_index}")]
    StaleCandidate {
        /// Room the candidate refers to.
        room_id: String,
        /// Block index the candidate refers to.
        block_index: usize,
    },
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
