//! Schedule quality metrics (KPIs).
//!
//! Computes summary indicators from a completed exam schedule and the
//! rooms it was built from.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Placement Rate | Placed courses / all courses |
//! | Makespan | Latest exam end time |
//! | Room Utilization | Placed exam time / declared available time |
//! | Avg Utilization | Mean over rooms with availability |

use std::collections::HashMap;

use crate::models::{Room, Schedule};

/// Exam schedule performance indicators.
///
/// All time values are in milliseconds.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Number of placed courses.
    pub scheduled_count: usize,
    /// Number of unscheduled courses.
    pub unscheduled_count: usize,
    /// Fraction of courses placed (0.0..1.0). 1.0 for an empty schedule.
    pub placement_rate: f64,
    /// Latest exam end time (ms).
    pub makespan_ms: i64,
    /// Per-room utilization of declared availability (0.0..1.0).
    pub utilization_by_room: HashMap<String, f64>,
    /// Average utilization over rooms with any availability.
    pub avg_utilization: f64,
    /// IDs of unscheduled courses, in processing order.
    pub unscheduled_courses: Vec<String>,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and the rooms it was built from.
    ///
    /// Rooms with no declared availability are left out of utilization.
    pub fn calculate(schedule: &Schedule, rooms: &[Room]) -> Self {
        let scheduled_count = schedule.scheduled_count();
        let unscheduled_count = schedule.unscheduled_count();
        let total = scheduled_count + unscheduled_count;

        let placement_rate = if total == 0 {
            1.0
        } else {
            scheduled_count as f64 / total as f64
        };

        let mut busy_by_room: HashMap<&str, i64> = HashMap::new();
        for entry in schedule.scheduled() {
            if let Some(room_id) = entry.room_id.as_deref() {
                *busy_by_room.entry(room_id).or_insert(0) += entry.duration_ms();
            }
        }

        let utilization_by_room: HashMap<String, f64> = rooms
            .iter()
            .filter(|r| r.available_ms() > 0)
            .map(|r| {
                let busy = busy_by_room.get(r.id.as_str()).copied().unwrap_or(0);
                (r.id.clone(), busy as f64 / r.available_ms() as f64)
            })
            .collect();

        let avg_utilization = if utilization_by_room.is_empty() {
            0.0
        } else {
            let sum: f64 = utilization_by_room.values().sum();
            sum / utilization_by_room.len() as f64
        };

        Self {
            scheduled_count,
            unscheduled_count,
            placement_rate,
            makespan_ms: schedule.makespan_ms(),
            utilization_by_room,
            avg_utilization,
            unscheduled_courses: schedule
                .unscheduled()
                .map(|e| e.course_id.clone())
                .collect(),
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_placement_rate: f64, min_utilization: f64) -> bool {
        self.placement_rate >= min_placement_rate && self.avg_utilization >= min_utilization
    }
}
