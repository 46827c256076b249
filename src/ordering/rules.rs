//! Built-in ordering rules.
//!
//! All rules return lower scores for courses that should be placed first.

use super::{OrderingRule, RuleScore};
use crate::models::Course;

/// Largest required capacity first.
///
/// Required capacity is `max(enrollment, min_capacity)`. Courses that can
/// only fit in a few large rooms are placed before smaller courses claim
/// the slots in those rooms.
#[derive(Debug, Clone, Copy)]
pub struct RequiredCapacityDesc;

impl OrderingRule for RequiredCapacityDesc {
    fn name(&self) -> &'static str {
        "CAP"
    }

    fn evaluate(&self, course: &Course) -> RuleScore {
        -RuleScore::from(course.required_capacity())
    }

    fn description(&self) -> &'static str {
        "Largest Required Capacity"
    }
}

/// Largest enrollment first.
#[derive(Debug, Clone, Copy)]
pub struct EnrollmentDesc;

impl OrderingRule for EnrollmentDesc {
    fn name(&self) -> &'static str {
        "ENR"
    }

    fn evaluate(&self, course: &Course) -> RuleScore {
        -RuleScore::from(course.enrollment)
    }

    fn description(&self) -> &'static str {
        "Largest Enrollment"
    }
}

/// Longest exam first.
#[derive(Debug, Clone, Copy)]
pub struct DurationDesc;

impl OrderingRule for DurationDesc {
    fn name(&self) -> &'static str {
        "DUR"
    }

    fn evaluate(&self, course: &Course) -> RuleScore {
        -RuleScore::from(course.duration_minutes)
    }

    fn description(&self) -> &'static str {
        "Longest Exam Duration"
    }
}
