//! Ordering policy engine.
//!
//! Applies rules in sequence: the second rule is consulted only when the
//! first ties, and so on. Courses that tie on every rule are resolved by
//! the final tie-breaker, which by default keeps input order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, OrderingRule, RuleScore};
use crate::models::Course;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep input order (stable sort).
    #[default]
    InputOrder,
    /// Deterministic by course ID (lexicographic).
    ById,
}

/// A composable ordering policy for greedy course admission.
///
/// # Example
/// ```
/// use exam_schedule::ordering::OrderingPolicy;
/// use exam_schedule::models::Course;
///
/// let courses = vec![
///     Course::new("short", 60).with_enrollment(30),
///     Course::new("long", 120).with_enrollment(30),
///     Course::new("big", 60).with_enrollment(30).with_min_capacity(90),
/// ];
/// let order: Vec<&str> = OrderingPolicy::capacity_first()
///     .order(&courses)
///     .iter()
///     .map(|c| c.id.as_str())
///     .collect();
/// assert_eq!(order, vec!["big", "long", "short"]);
/// ```
#[derive(Clone)]
pub struct OrderingPolicy {
    rules: Vec<Arc<dyn OrderingRule>>,
    tie_breaker: TieBreaker,
}

impl OrderingPolicy {
    /// Creates an empty policy. With no rules, input order is kept.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::InputOrder,
        }
    }

    /// Required capacity desc, then enrollment desc, then duration desc.
    ///
    /// This is the default admission order.
    pub fn capacity_first() -> Self {
        Self::new()
            .with_rule(rules::RequiredCapacityDesc)
            .with_rule(rules::EnrollmentDesc)
            .with_rule(rules::DurationDesc)
    }

    /// Longest exam first.
    pub fn duration_first() -> Self {
        Self::new().with_rule(rules::DurationDesc)
    }

    /// Appends a rule.
    pub fn with_rule<R: OrderingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns indices into `courses` in admission order.
    pub fn sort_indices(&self, courses: &[Course]) -> Vec<usize> {
        let keys: Vec<Vec<RuleScore>> = courses.iter().map(|c| self.evaluate(c)).collect();
        let mut indices: Vec<usize> = (0..courses.len()).collect();
        // `sort_by` is stable: full ties keep input order.
        indices.sort_by(|&a, &b| {
            keys[a].cmp(&keys[b]).then_with(|| match self.tie_breaker {
                TieBreaker::InputOrder => Ordering::Equal,
                TieBreaker::ById => courses[a].id.cmp(&courses[b].id),
            })
        });
        indices
    }

    /// Returns the courses in admission order.
    pub fn order<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        self.sort_indices(courses)
            .into_iter()
            .map(|i| &courses[i])
            .collect()
    }

    /// Evaluates a single course and returns the score from each rule.
    pub fn evaluate(&self, course: &Course) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(course)).collect()
    }
}

impl Default for OrderingPolicy {
    fn default() -> Self {
        Self::capacity_first()
    }
}

impl std::fmt::Debug for OrderingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderingPolicy")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_course(id: &str, minutes: i32, enrollment: i32, min_capacity: i32) -> Course {
        Course::new(id, minutes)
            .with_enrollment(enrollment)
            .with_min_capacity(min_capacity)
    }

    fn ids(policy: &OrderingPolicy, courses: &[Course]) -> Vec<String> {
        policy.order(courses).iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_capacity_first_primary_key() {
        let courses = vec![
            make_course("small", 60, 10, 0),
            make_course("large", 60, 120, 0),
            make_course("medium", 60, 40, 0),
        ];
        assert_eq!(
            ids(&OrderingPolicy::capacity_first(), &courses),
            vec!["large", "medium", "small"]
        );
    }

    #[test]
    fn test_min_capacity_raises_priority() {
        let courses = vec![
            make_course("enrolled", 60, 50, 0),
            make_course("lab", 60, 20, 80),
        ];
        assert_eq!(
            ids(&OrderingPolicy::capacity_first(), &courses),
            vec!["lab", "enrolled"]
        );
    }

    #[test]
    fn test_enrollment_breaks_capacity_tie() {
        // Both need 60 seats; the one with more students goes first.
        let courses = vec![
            make_course("A", 60, 20, 60),
            make_course("B", 60, 60, 0),
        ];
        assert_eq!(ids(&OrderingPolicy::capacity_first(), &courses), vec!["B", "A"]);
    }

    #[test]
    fn test_duration_breaks_enrollment_tie() {
        let courses = vec![
            make_course("short", 60, 30, 0),
            make_course("long", 180, 30, 0),
        ];
        assert_eq!(
            ids(&OrderingPolicy::capacity_first(), &courses),
            vec!["long", "short"]
        );
    }

    #[test]
    fn test_full_tie_keeps_input_order() {
        let courses = vec![
            make_course("Z", 60, 30, 0),
            make_course("A", 60, 30, 0),
            make_course("M", 60, 30, 0),
        ];
        let policy = OrderingPolicy::capacity_first();
        assert_eq!(policy.sort_indices(&courses), vec![0, 1, 2]);
        // Stable across runs
        assert_eq!(policy.sort_indices(&courses), policy.sort_indices(&courses));
    }

    #[test]
    fn test_by_id_tie_breaker() {
        let courses = vec![make_course("Z", 60, 30, 0), make_course("A", 60, 30, 0)];
        let policy = OrderingPolicy::capacity_first().with_tie_breaker(TieBreaker::ById);
        assert_eq!(ids(&policy, &courses), vec!["A", "Z"]);
    }

    #[test]
    fn test_duration_first() {
        let courses = vec![
            make_course("big_short", 60, 300, 0),
            make_course("small_long", 180, 5, 0),
        ];
        assert_eq!(
            ids(&OrderingPolicy::duration_first(), &courses),
            vec!["small_long", "big_short"]
        );
    }

    #[test]
    fn test_empty_policy_and_input() {
        let courses = vec![make_course("B", 60, 1, 0), make_course("A", 90, 2, 0)];
        assert_eq!(OrderingPolicy::new().sort_indices(&courses), vec![0, 1]);
        assert!(OrderingPolicy::capacity_first().sort_indices(&[]).is_empty());
    }

    #[test]
    fn test_evaluate_scores() {
        let policy = OrderingPolicy::capacity_first();
        let c = make_course("A", 90, 25, 40);
        assert_eq!(policy.evaluate(&c), vec![-40, -25, -90]);
        assert_eq!(policy.rule_names(), vec!["CAP", "ENR", "DUR"]);
    }
}
