//! One-pass greedy exam scheduler.
//!
//! # Algorithm
//!
//! 1. Validate rooms, courses and enrollment.
//! 2. Order courses with the ordering policy (capacity first by default).
//! 3. For each course, find the earliest (room, block) placement that seats
//!    the course and does not double-book any enrolled student. Equal
//!    starts prefer the smaller room.
//! 4. Commit the placement to the room allocator and the student calendar,
//!    or record the course as unscheduled.
//!
//! Placements are never revisited. Each course sees the state left by
//! every course placed before it, so courses are processed strictly one
//! at a time.
//!
//! # Complexity
//! O(n * r * b * s * log k) where n=courses, r=rooms, b=blocks per room,
//! s=students per course, k=exams per student.

use tracing::{debug, info, warn};

use crate::allocation::{RoomAllocator, StudentCalendar};
use crate::error::ScheduleError;
use crate::models::{Course, EnrollmentMap, Room, Schedule, ScheduleEntry};
use crate::ordering::OrderingPolicy;
use crate::validation;

/// Input container for scheduling.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Exam rooms.
    pub rooms: Vec<Room>,
    /// Courses to schedule.
    pub courses: Vec<Course>,
    /// Course → enrolled students.
    pub enrollment: EnrollmentMap,
}

impl ScheduleRequest {
    /// Creates a request, deriving each course's enrollment count from the
    /// distinct students in `enrollment`.
    ///
    /// Courses without an enrollment entry get an enrollment of zero.
    pub fn new(rooms: Vec<Room>, mut courses: Vec<Course>, enrollment: EnrollmentMap) -> Self {
        enrollment.apply_counts(&mut courses);
        Self {
            rooms,
            courses,
            enrollment,
        }
    }
}

/// Mutable state of a single scheduling run.
///
/// Owns the room free-time blocks and the student commitments. Each call
/// to [`ScheduleRun::place`] sees every earlier placement.
#[derive(Debug, Clone)]
pub struct ScheduleRun {
    allocator: RoomAllocator,
    students: StudentCalendar,
}

impl ScheduleRun {
    /// Starts a run over `rooms`.
    pub fn new(rooms: &[Room]) -> Result<Self, ScheduleError> {
        Ok(Self {
            allocator: RoomAllocator::new(rooms)?,
            students: StudentCalendar::new(),
        })
    }

    /// Places one course, or records it as unscheduled.
    ///
    /// A candidate must seat the course's required capacity, fit its exam
    /// duration in one free block, and leave every student in `students`
    /// without overlapping exams.
    pub fn place(
        &mut self,
        course: &Course,
        students: &[String],
    ) -> Result<ScheduleEntry, ScheduleError> {
        let required = course.required_capacity();
        let calendar = &self.students;
        let candidate = self
            .allocator
            .find_earliest_where(required, course.duration_ms(), |c| {
                calendar.is_free(students, &c.window)
            });

        let Some(candidate) = candidate else {
            debug!(
                course = %course.id,
                required_capacity = required,
                duration_minutes = course.duration_minutes,
                "no feasible placement, course unscheduled"
            );
            return Ok(ScheduleEntry::unscheduled(&course.id));
        };

        // Both commits are checked before either one mutates.
        let room_id = self.allocator.verify(&candidate)?.to_owned();
        self.students.commit(students, candidate.window)?;
        let window = self.allocator.commit(&candidate)?;

        debug!(
            course = %course.id,
            room = %room_id,
            start_ms = window.start_ms,
            end_ms = window.end_ms,
            students = students.len(),
            "placed exam"
        );
        Ok(ScheduleEntry::placed(
            &course.id,
            room_id,
            window.start_ms,
            window.end_ms,
        ))
    }

    /// Room state after the placements so far.
    pub fn allocator(&self) -> &RoomAllocator {
        &self.allocator
    }

    /// Student commitments after the placements so far.
    pub fn students(&self) -> &StudentCalendar {
        &self.students
    }
}

/// One-pass greedy exam scheduler.
///
/// # Example
///
/// ```
/// use exam_schedule::scheduler::{GreedyScheduler, ScheduleRequest};
/// use exam_schedule::models::{Course, EnrollmentMap, Room};
///
/// const HOUR: i64 = 3_600_000;
///
/// let rooms = vec![Room::new("R1", 30).with_window(9 * HOUR, 12 * HOUR)];
/// let courses = vec![Course::new("CS101", 60), Course::new("MATH1", 60)];
/// let enrollment = EnrollmentMap::new()
///     .with_enrollment("alice", "CS101")
///     .with_enrollment("alice", "MATH1");
///
/// let request = ScheduleRequest::new(rooms, courses, enrollment);
/// let schedule = GreedyScheduler::new().schedule_request(&request).unwrap();
///
/// assert_eq!(schedule.scheduled_count(), 2);
/// let cs = schedule.entry_for("CS101").unwrap();
/// let math = schedule.entry_for("MATH1").unwrap();
/// assert_eq!(cs.start_ms, Some(9 * HOUR));
/// assert_eq!(math.start_ms, Some(10 * HOUR));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler {
    policy: OrderingPolicy,
}

impl GreedyScheduler {
    /// Creates a scheduler with the capacity-first ordering policy.
    pub fn new() -> Self {
        Self {
            policy: OrderingPolicy::capacity_first(),
        }
    }

    /// Sets the course ordering policy.
    pub fn with_policy(mut self, policy: OrderingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The configured ordering policy.
    pub fn policy(&self) -> &OrderingPolicy {
        &self.policy
    }

    /// Schedules every course.
    ///
    /// Enrollment counts come from `enrollment`: a course's `enrollment`
    /// field is replaced by its distinct student count, and a course with
    /// no entry counts as zero. Ordering and seat requirements both use
    /// the derived counts.
    ///
    /// Returns one entry per course in processing order. Courses with no
    /// feasible placement are recorded as unscheduled; that is not an
    /// error. Fails only if the input does not pass validation.
    pub fn schedule(
        &self,
        rooms: &[Room],
        courses: &[Course],
        enrollment: &EnrollmentMap,
    ) -> Result<Schedule, ScheduleError> {
        if let Err(errors) = validation::validate_input(rooms, courses, enrollment) {
            warn!(problems = errors.len(), "rejecting invalid scheduling input");
            return Err(ScheduleError::InvalidInput(errors));
        }

        let mut counted = courses.to_vec();
        enrollment.apply_counts(&mut counted);
        let courses = counted.as_slice();

        let mut run = ScheduleRun::new(rooms)?;
        let mut schedule = Schedule::new();

        for index in self.policy.sort_indices(courses) {
            let course = &courses[index];
            let entry = run.place(course, enrollment.students(&course.id))?;
            schedule.add_entry(entry);
        }

        info!(
            courses = courses.len(),
            rooms = rooms.len(),
            scheduled = schedule.scheduled_count(),
            unscheduled = schedule.unscheduled_count(),
            "exam scheduling finished"
        );
        Ok(schedule)
    }

    /// Schedules from a request.
    pub fn schedule_request(&self, request: &ScheduleRequest) -> Result<Schedule, ScheduleError> {
        self.schedule(&request.rooms, &request.courses, &request.enrollment)
    }
}
