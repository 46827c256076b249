//! Course ordering rules and the ordering policy engine.
//!
//! The greedy scheduler considers courses one at a time, so the order in
//! which they are admitted decides which courses get the scarce large
//! rooms and early slots. Ordering is a pure function of the course list.
//!
//! # Usage
//!
//! ```
//! use exam_schedule::ordering::{rules, OrderingPolicy};
//! use exam_schedule::models::Course;
//!
//! let courses = vec![
//!     Course::new("small", 60).with_enrollment(10),
//!     Course::new("large", 60).with_enrollment(200),
//! ];
//!
//! let policy = OrderingPolicy::new()
//!     .with_rule(rules::RequiredCapacityDesc)
//!     .with_rule(rules::DurationDesc);
//! assert_eq!(policy.sort_indices(&courses), vec![1, 0]);
//! ```

mod engine;
pub mod rules;

pub use engine::{OrderingPolicy, TieBreaker};

use crate::models::Course;
use std::fmt::Debug;

/// Score returned by an ordering rule.
///
/// Lower scores = placed earlier.
pub type RuleScore = i64;

/// A rule that ranks courses for greedy admission.
///
/// # Score Convention
/// **Lower score = higher priority.** Descending rules negate their key.
pub trait OrderingRule: Send + Sync + Debug {
    /// Rule name (e.g., "CAP", "DUR").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a course.
    fn evaluate(&self, course: &Course) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
