//! Greedy exam scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `GreedyScheduler` admits courses one at a time in the order given by an
//! `OrderingPolicy`, placing each at the earliest start that fits its room
//! capacity, exam duration, and students' existing exams. It never
//! backtracks: it is a fast heuristic, not an optimal timetabler.
//!
//! # KPI
//!
//! `ScheduleKpi` computes placement rate, makespan, and room utilization.

mod greedy;
mod kpi;

pub use greedy::{GreedyScheduler, ScheduleRequest, ScheduleRun};
pub use kpi::ScheduleKpi;
