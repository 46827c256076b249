//! Course enrollment map.
//!
//! Maps each course to the distinct students enrolled in it, in first-seen
//! order. Order has no semantic meaning but keeps runs reproducible.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use super::Course;

/// Serialized form: course ID → student IDs.
type RosterTable = BTreeMap<String, Vec<String>>;

/// Students of one course in first-seen order, with a membership index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Roster {
    students: Vec<String>,
    members: HashSet<String>,
}

impl Roster {
    fn insert(&mut self, student: String) -> bool {
        if !self.members.insert(student.clone()) {
            return false;
        }
        self.students.push(student);
        true
    }
}

/// Course → enrolled students.
///
/// Serializes as a plain table of course ID to student list. Duplicates in
/// a deserialized table are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RosterTable", into = "RosterTable")]
pub struct EnrollmentMap {
    rosters: BTreeMap<String, Roster>,
}

impl EnrollmentMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `student` is enrolled in `course`.
    ///
    /// Duplicate enrollments are ignored. Returns `true` if newly added.
    pub fn enroll(&mut self, student: impl Into<String>, course: impl Into<String>) -> bool {
        self.rosters
            .entry(course.into())
            .or_default()
            .insert(student.into())
    }

    /// Builder form of [`EnrollmentMap::enroll`].
    pub fn with_enrollment(mut self, student: impl Into<String>, course: impl Into<String>) -> Self {
        self.enroll(student, course);
        self
    }

    /// Students enrolled in `course`. Empty if the course has no entry.
    pub fn students(&self, course_id: &str) -> &[String] {
        self.rosters
            .get(course_id)
            .map(|r| r.students.as_slice())
            .unwrap_or(&[])
    }

    /// Number of distinct students enrolled in `course`.
    pub fn enrollment_count(&self, course_id: &str) -> usize {
        self.students(course_id).len()
    }

    /// Whether the map has an entry for `course`.
    pub fn contains_course(&self, course_id: &str) -> bool {
        self.rosters.contains_key(course_id)
    }

    /// Course IDs with at least one entry, in lexicographic order.
    pub fn course_ids(&self) -> impl Iterator<Item = &str> {
        self.rosters.keys().map(String::as_str)
    }

    /// Number of distinct students across all courses.
    pub fn student_count(&self) -> usize {
        self.rosters
            .values()
            .flat_map(|r| &r.students)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Sets each course's `enrollment` to its distinct student count.
    pub fn apply_counts(&self, courses: &mut [Course]) {
        for course in courses {
            course.enrollment = i32::try_from(self.enrollment_count(&course.id)).unwrap_or(i32::MAX);
        }
    }
}

impl From<RosterTable> for EnrollmentMap {
    fn from(table: RosterTable) -> Self {
        let mut map = Self::new();
        for (course, students) in table {
            for student in students {
                map.enroll(student, course.as_str());
            }
        }
        map
    }
}

impl From<EnrollmentMap> for RosterTable {
    fn from(map: EnrollmentMap) -> Self {
        map.rosters
            .into_iter()
            .map(|(course, roster)| (course, roster.students))
            .collect()
    }
}

impl<S, C> FromIterator<(S, C)> for EnrollmentMap
where
    S: Into<String>,
    C: Into<String>,
{
    /// Builds a map from `(student, course)` edges.
    fn from_iter<I: IntoIterator<Item = (S, C)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (student, course) in iter {
            map.enroll(student, course);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enroll_dedup() {
        let mut map = EnrollmentMap::new();
        assert!(map.enroll("s1", "CS101"));
        assert!(map.enroll("s2", "CS101"));
        assert!(!map.enroll("s1", "CS101"));

        assert_eq!(map.students("CS101"), &["s1".to_string(), "s2".to_string()]);
        assert_eq!(map.enrollment_count("CS101"), 2);
    }

    #[test]
    fn test_missing_course_is_empty() {
        let map = EnrollmentMap::new();
        assert!(map.students("nope").is_empty());
        assert_eq!(map.enrollment_count("nope"), 0);
        assert!(!map.contains_course("nope"));
    }

    #[test]
    fn test_from_edges() {
        let map: EnrollmentMap = vec![
            ("s1", "MATH"),
            ("s2", "MATH"),
            ("s1", "CS"),
            ("s2", "MATH"),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.enrollment_count("MATH"), 2);
        assert_eq!(map.enrollment_count("CS"), 1);
        assert_eq!(map.student_count(), 2);
        assert_eq!(map.course_ids().collect::<Vec<_>>(), vec!["CS", "MATH"]);
    }

    #[test]
    fn test_apply_counts() {
        let map = EnrollmentMap::new()
            .with_enrollment("s1", "A")
            .with_enrollment("s2", "A")
            .with_enrollment("s3", "B");
        let mut courses = vec![
            Course::new("A", 60).with_enrollment(99),
            Course::new("B", 60),
            Course::new("C", 60).with_enrollment(5),
        ];
        map.apply_counts(&mut courses);

        assert_eq!(courses[0].enrollment, 2);
        assert_eq!(courses[1].enrollment, 1);
        assert_eq!(courses[2].enrollment, 0);
    }

    #[test]
    fn test_large_roster_stays_distinct() {
        let mut map = EnrollmentMap::new();
        for round in 0..3 {
            for i in 0..2_000 {
                assert_eq!(map.enroll(format!("s{i}"), "BIG"), round == 0);
            }
        }
        assert_eq!(map.enrollment_count("BIG"), 2_000);
        assert_eq!(map.students("BIG")[1_999], "s1999");
    }

    #[test]
    fn test_serde_table_form() {
        let map = EnrollmentMap::new()
            .with_enrollment("s2", "A")
            .with_enrollment("s1", "A");
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({"A": ["s2", "s1"]}));

        let parsed: EnrollmentMap =
            serde_json::from_value(serde_json::json!({"A": ["s1", "s1", "s2"], "B": []})).unwrap();
        assert_eq!(parsed.students("A"), &["s1".to_string(), "s2".to_string()]);
        assert_eq!(parsed.enrollment_count("B"), 0);
    }
}
