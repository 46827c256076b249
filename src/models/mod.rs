//! Exam scheduling domain models.
//!
//! Provides the data types consumed and produced by the scheduler.
//! Loaders build `Room`, `Course` and `EnrollmentMap` values; the scheduler
//! returns a `Schedule` of per-course placement decisions.
//!
//! | Type | Role |
//! |------|------|
//! | `Interval` | Half-open time window in ms |
//! | `IntervalSet` | Sorted, disjoint interval store |
//! | `Room` | Capacity plus availability windows |
//! | `Course` | Exam duration, enrollment, minimum capacity |
//! | `EnrollmentMap` | Course → distinct enrolled students |
//! | `Schedule` | Placement decision per course |

mod course;
mod enrollment;
mod interval;
mod room;
mod schedule;

pub use course::{Course, MS_PER_MINUTE};
pub use enrollment::EnrollmentMap;
pub use interval::{Interval, IntervalSet};
pub use room::Room;
pub use schedule::{ExamGroup, Schedule, ScheduleEntry};
