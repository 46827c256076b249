//! Student conflict detection.
//!
//! Tracks the exams each student has been committed to during a run and
//! answers whether a candidate window would double-book any of a course's
//! students. Overlap is half-open: an exam ending exactly when another
//! begins is not a conflict.
//!
//! Each student's commitments are an `IntervalSet`, so a check costs one
//! binary search plus two neighbour comparisons per student.

use std::collections::{HashMap, HashSet};

use crate::error::ScheduleError;
use crate::models::{Interval, IntervalSet};

/// Committed exam windows per student.
#[derive(Debug, Clone, Default)]
pub struct StudentCalendar {
    commitments: HashMap<String, IntervalSet>,
}

impl StudentCalendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `window` is free for every student in `students`.
    pub fn is_free(&self, students: &[String], window: &Interval) -> bool {
        self.conflicting_student(students, window).is_none()
    }

    /// Returns the first student whose commitments overlap `window`.
    pub fn conflicting_student<'a>(
        &self,
        students: &'a [String],
        window: &Interval,
    ) -> Option<&'a str> {
        students
            .iter()
            .find(|s| {
                self.commitments
                    .get(s.as_str())
                    .is_some_and(|set| set.overlaps(window))
            })
            .map(String::as_str)
    }

    /// Records `window` for every student in `students`.
    ///
    /// The whole commit is rejected, leaving the calendar unchanged, if
    /// any student already has an overlapping commitment. A student listed
    /// twice is committed once.
    pub fn commit(&mut self, students: &[String], window: Interval) -> Result<(), ScheduleError> {
        if !window.is_well_formed() {
            return Err(ScheduleError::MalformedInterval(window));
        }
        for student in students {
            if let Some(existing) = self
                .commitments
                .get(student)
                .and_then(|set| set.find_overlap(&window))
            {
                return Err(ScheduleError::IntervalOverlap {
                    new: window,
                    existing: *existing,
                });
            }
        }
        let distinct: HashSet<&String> = students.iter().collect();
        for student in distinct {
            self.commitments
                .entry(student.clone())
                .or_default()
                .insert(window)?;
        }
        Ok(())
    }

    /// Committed windows of a student, sorted.
    pub fn commitments(&self, student: &str) -> &[Interval] {
        self.commitments
            .get(student)
            .map(IntervalSet::as_slice)
            .unwrap_or(&[])
    }

    /// Number of students with at least one commitment.
    pub fn student_count(&self) -> usize {
        self.commitments.len()
    }
}
