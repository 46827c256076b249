//! Input validation for exam scheduling.
//!
//! Checks structural integrity of rooms, courses, and enrollment before
//! a run. Detects:
//! - Duplicate IDs
//! - Negative capacities and non-positive exam durations
//! - Malformed (`start >= end`) or overlapping availability windows
//! - Enrollment entries for courses that do not exist
//!
//! All problems are collected rather than stopping at the first one.
//! A course with no enrollment entry is valid: it has zero students.

use crate::models::{Course, EnrollmentMap, Interval, Room};
use std::collections::HashSet;
use thiserror::Error;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind:?}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A room has a negative capacity, or a course a negative minimum capacity
    /// or enrollment.
    NegativeCapacity,
    /// A course's exam duration is zero or negative.
    NonPositiveDuration,
    /// An availability window has `start >= end`.
    MalformedInterval,
    /// Two availability windows of the same room overlap.
    OverlappingAvailability,
    /// The enrollment map references a course that doesn't exist.
    UnknownCourse,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the full input of a scheduling run.
///
/// Checks:
/// 1. Rooms: see [`validate_rooms`]
/// 2. Courses: see [`validate_courses`]
/// 3. Every course in the enrollment map exists
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    rooms: &[Room],
    courses: &[Course],
    enrollment: &EnrollmentMap,
) -> ValidationResult {
    let mut errors = Vec::new();

    if let Err(mut room_errors) = validate_rooms(rooms) {
        errors.append(&mut room_errors);
    }
    if let Err(mut course_errors) = validate_courses(courses) {
        errors.append(&mut course_errors);
    }

    let course_ids: HashSet<&str> = courses.iter().map(|c| c.id.as_str()).collect();
    for course_id in enrollment.course_ids() {
        if !course_ids.contains(course_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownCourse,
                format!("Enrollment references unknown course '{course_id}'"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates rooms.
///
/// Checks:
/// 1. No duplicate room IDs
/// 2. Capacity is not negative
/// 3. Every availability window has `start < end`
/// 4. No two availability windows of a room overlap
pub fn validate_rooms(rooms: &[Room]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut room_ids = HashSet::new();

    for room in rooms {
        if !room_ids.insert(room.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", room.id),
            ));
        }

        if room.capacity < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeCapacity,
                format!("Room '{}' has negative capacity {}", room.id, room.capacity),
            ));
        }

        let mut windows: Vec<Interval> = Vec::with_capacity(room.availability.len());
        for w in &room.availability {
            if w.is_well_formed() {
                windows.push(*w);
            } else {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MalformedInterval,
                    format!(
                        "Room '{}' has malformed window [{}, {})",
                        room.id, w.start_ms, w.end_ms
                    ),
                ));
            }
        }

        windows.sort();
        for pair in windows.windows(2) {
            if pair[0].overlaps(&pair[1]) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OverlappingAvailability,
                    format!(
                        "Room '{}' has overlapping windows [{}, {}) and [{}, {})",
                        room.id, pair[0].start_ms, pair[0].end_ms, pair[1].start_ms, pair[1].end_ms
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates courses.
///
/// Checks:
/// 1. No duplicate course IDs
/// 2. Exam duration is positive
/// 3. Enrollment and minimum capacity are not negative
pub fn validate_courses(courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut course_ids = HashSet::new();

    for course in courses {
        if !course_ids.insert(course.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", course.id),
            ));
        }

        if course.duration_minutes <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!(
                    "Course '{}' has non-positive exam duration {} min",
                    course.id, course.duration_minutes
                ),
            ));
        }

        if course.min_capacity < 0 || course.enrollment < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeCapacity,
                format!(
                    "Course '{}' has negative enrollment {} or minimum capacity {}",
                    course.id, course.enrollment, course.min_capacity
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
