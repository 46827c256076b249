//! Mutable placement state for a scheduling run.
//!
//! - **`RoomAllocator`**: free-time blocks per room; earliest-fit search
//!   and split-on-commit.
//! - **`StudentCalendar`**: committed exam windows per student; overlap
//!   checks against a course's enrolled students.
//!
//! Both are owned by a single run and mutated only when a course is placed.

mod rooms;
mod students;

pub use rooms::{Candidate, RoomAllocator};
pub use students::StudentCalendar;
