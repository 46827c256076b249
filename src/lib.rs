//! Greedy final-exam scheduling.
//!
//! Assigns each course's exam to a room and time block so that no student
//! sits two exams at once, every room seats the course, and every exam
//! lies inside its room's availability.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Interval`, `IntervalSet`, `Room`, `Course`,
//!   `EnrollmentMap`, `Schedule`, `ScheduleEntry`, `ExamGroup`
//! - **`ordering`**: Course admission order: `OrderingRule`, `OrderingPolicy`
//! - **`allocation`**: Run state: `RoomAllocator`, `StudentCalendar`
//! - **`scheduler`**: `GreedyScheduler`, `ScheduleRun`, `ScheduleKpi`
//! - **`validation`**: Input integrity checks (duplicate IDs, bad windows,
//!   negative capacities, unknown courses)
//!
//! # Architecture
//!
//! Loading rooms, courses and enrollments from a dataset, and writing the
//! resulting schedule anywhere, are left to the caller. This crate only
//! turns in-memory inputs into per-course placement decisions.
//!
//! The scheduler is a one-pass greedy heuristic. It does not backtrack and
//! does not guarantee the fewest unscheduled courses.

pub mod allocation;
pub mod error;
pub mod models;
pub mod ordering;
pub mod scheduler;
pub mod validation;

pub use error::ScheduleError;
