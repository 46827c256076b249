//! Schedule (solution) model.
//!
//! A schedule holds one entry per input course, in the order courses were
//! processed. Placed courses carry a room and a time window; unscheduled
//! courses carry `None` for all three.

use serde::{Deserialize, Serialize};

use super::{EnrollmentMap, Interval};

/// Placement decision for a single course.
///
/// Serializes as `{course_id, room_id, start, end}`, with `null` room and
/// times for unscheduled courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Course ID.
    pub course_id: String,
    /// Assigned room, if placed.
    pub room_id: Option<String>,
    /// Exam start (ms), if placed.
    #[serde(rename = "start")]
    pub start_ms: Option<i64>,
    /// Exam end (ms), if placed.
    #[serde(rename = "end")]
    pub end_ms: Option<i64>,
}

impl ScheduleEntry {
    /// Creates a placed entry.
    pub fn placed(
        course_id: impl Into<String>,
        room_id: impl Into<String>,
        start_ms: i64,
        end_ms: i64,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            room_id: Some(room_id.into()),
            start_ms: Some(start_ms),
            end_ms: Some(end_ms),
        }
    }

    /// Creates an unscheduled entry.
    pub fn unscheduled(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            room_id: None,
            start_ms: None,
            end_ms: None,
        }
    }

    /// Whether this course received a placement.
    #[inline]
    pub fn is_placed(&self) -> bool {
        self.room_id.is_some()
    }

    /// Placed time window, if any.
    pub fn window(&self) -> Option<Interval> {
        match (self.start_ms, self.end_ms) {
            (Some(start), Some(end)) => Some(Interval::new(start, end)),
            _ => None,
        }
    }

    /// Exam duration (ms), or 0 when unscheduled.
    pub fn duration_ms(&self) -> i64 {
        self.window().map_or(0, |w| w.duration_ms())
    }
}

/// A placed exam joined with its enrolled students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamGroup {
    /// Sequential group identifier (`group_0001`, ...).
    pub group_id: String,
    /// Students sitting this exam.
    pub students: Vec<String>,
    /// Assigned room.
    pub room_id: String,
    /// Exam start (ms).
    #[serde(rename = "start")]
    pub start_ms: i64,
    /// Exam end (ms).
    #[serde(rename = "end")]
    pub end_ms: i64,
    /// Course ID.
    pub course_id: String,
}

/// A complete exam schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// One entry per course, in processing order.
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Finds the entry for a course.
    pub fn entry_for(&self, course_id: &str) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.course_id == course_id)
    }

    /// Placed entries.
    pub fn scheduled(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.iter().filter(|e| e.is_placed())
    }

    /// Unscheduled entries.
    pub fn unscheduled(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.iter().filter(|e| !e.is_placed())
    }

    /// Entries placed in a given room.
    pub fn entries_for_room(&self, room_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.room_id.as_deref() == Some(room_id))
            .collect()
    }

    /// Number of placed courses.
    pub fn scheduled_count(&self) -> usize {
        self.scheduled().count()
    }

    /// Number of unscheduled courses.
    pub fn unscheduled_count(&self) -> usize {
        self.unscheduled().count()
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Latest end time across placed entries (ms), or 0 if none.
    pub fn makespan_ms(&self) -> i64 {
        self.entries.iter().filter_map(|e| e.end_ms).max().unwrap_or(0)
    }

    /// Joins placed entries with their enrolled students.
    ///
    /// Groups are numbered in schedule order; unscheduled courses are skipped.
    pub fn exam_groups(&self, enrollment: &EnrollmentMap) -> Vec<ExamGroup> {
        self.scheduled()
            .filter_map(|e| Some((e, e.room_id.as_ref()?, e.window()?)))
            .enumerate()
            .map(|(i, (entry, room_id, window))| ExamGroup {
                group_id: format!("group_{:04}", i + 1),
                students: enrollment.students(&entry.course_id).to_vec(),
                room_id: room_id.clone(),
                start_ms: window.start_ms,
                end_ms: window.end_ms,
                course_id: entry.course_id.clone(),
            })
            .collect()
    }
}
