//! Time intervals and sorted interval sets.
//!
//! # Time Model
//! All times are in milliseconds relative to a scheduling epoch.
//! The consumer defines what epoch means (typically the Unix epoch).
//!
//! # Interval Store
//! `IntervalSet` keeps intervals sorted by `(start, end)` and pairwise
//! non-overlapping in a flat `Vec`. Overlap queries use a binary search
//! for the insertion point and then inspect only the immediate
//! predecessor and successor: in a sorted, disjoint set no other entry
//! can intersect a given window.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// A time interval [start, end).
///
/// Half-open interval: includes start, excludes end. Ordering is
/// lexicographic by `(start_ms, end_ms)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Interval {
    /// Interval start (ms, inclusive).
    pub start_ms: i64,
    /// Interval end (ms, exclusive).
    pub end_ms: i64,
}

impl Interval {
    /// Creates a new interval. No validation is performed.
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }

    /// Creates an interval of `duration_ms` starting at `start_ms`.
    pub fn starting_at(start_ms: i64, duration_ms: i64) -> Self {
        Self::new(start_ms, start_ms + duration_ms)
    }

    /// Duration of this interval (ms).
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// Whether `start_ms < end_ms`.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.start_ms < self.end_ms
    }

    /// Whether a timestamp falls within this interval.
    #[inline]
    pub fn contains(&self, time_ms: i64) -> bool {
        time_ms >= self.start_ms && time_ms < self.end_ms
    }

    /// Whether `other` lies entirely within this interval.
    pub fn encloses(&self, other: &Self) -> bool {
        self.start_ms <= other.start_ms && other.end_ms <= self.end_ms
    }

    /// Whether two intervals overlap.
    ///
    /// An interval ending exactly when another begins does not overlap it.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_ms < other.end_ms && other.start_ms < self.end_ms
    }
}

/// Sorted, pairwise non-overlapping set of intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from arbitrary windows.
    ///
    /// Windows are sorted by `(start, end)`. Fails on the first malformed
    /// window (`start >= end`) or the first pair of overlapping windows.
    pub fn from_windows(mut windows: Vec<Interval>) -> Result<Self, ScheduleError> {
        if let Some(bad) = windows.iter().find(|w| !w.is_well_formed()) {
            return Err(ScheduleError::MalformedInterval(*bad));
        }
        windows.sort();
        if let Some(pair) = windows.windows(2).find(|p| p[0].overlaps(&p[1])) {
            return Err(ScheduleError::IntervalOverlap {
                new: pair[1],
                existing: pair[0],
            });
        }
        Ok(Self { intervals: windows })
    }

    /// Index at which `window` would be inserted to keep the set sorted.
    ///
    /// Upper bound: the first position whose interval compares greater
    /// than `window`.
    pub fn insertion_point(&self, window: &Interval) -> usize {
        self.intervals.partition_point(|iv| iv <= window)
    }

    /// Returns the interval in the set overlapping `window`, if any.
    pub fn find_overlap(&self, window: &Interval) -> Option<&Interval> {
        let pos = self.insertion_point(window);
        if pos > 0 {
            let prev = &self.intervals[pos - 1];
            if prev.overlaps(window) {
                return Some(prev);
            }
        }
        self.intervals.get(pos).filter(|next| next.overlaps(window))
    }

    /// Whether `window` overlaps any interval in the set.
    #[inline]
    pub fn overlaps(&self, window: &Interval) -> bool {
        self.find_overlap(window).is_some()
    }

    /// Inserts `window`, keeping the set sorted. Returns its index.
    pub fn insert(&mut self, window: Interval) -> Result<usize, ScheduleError> {
        if !window.is_well_formed() {
            return Err(ScheduleError::MalformedInterval(window));
        }
        if let Some(existing) = self.find_overlap(&window) {
            return Err(ScheduleError::IntervalOverlap {
                new: window,
                existing: *existing,
            });
        }
        let pos = self.insertion_point(&window);
        self.intervals.insert(pos, window);
        Ok(pos)
    }

    /// Removes and returns the interval at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Interval> {
        if index < self.intervals.len() {
            Some(self.intervals.remove(index))
        } else {
            None
        }
    }

    /// Replaces the interval at `index` with `replacement`, or removes it
    /// when `replacement` is `None`.
    ///
    /// The caller guarantees that `replacement` lies within the removed
    /// interval, which keeps the set sorted and disjoint.
    pub fn replace(&mut self, index: usize, replacement: Option<Interval>) -> Option<Interval> {
        let slot = self.intervals.get_mut(index)?;
        let old = *slot;
        match replacement {
            Some(iv) => {
                debug_assert!(old.encloses(&iv) && iv.is_well_formed());
                *slot = iv;
            }
            None => {
                self.intervals.remove(index);
            }
        }
        Some(old)
    }

    /// Returns the interval at `index`.
    pub fn get(&self, index: usize) -> Option<&Interval> {
        self.intervals.get(index)
    }

    /// Sum of all interval durations (ms).
    pub fn total_duration_ms(&self) -> i64 {
        self.intervals.iter().map(Interval::duration_ms).sum()
    }

    /// Iterates intervals in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// Intervals as a sorted slice.
    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_basics() {
        let w = Interval::new(100, 200);
        assert_eq!(w.duration_ms(), 100);
        assert!(w.contains(100));
        assert!(w.contains(199));
        assert!(!w.contains(200)); // exclusive end
        assert!(w.is_well_formed());
        assert!(!Interval::new(5, 5).is_well_formed());
        assert_eq!(Interval::starting_at(10, 5), Interval::new(10, 15));
    }

    #[test]
    fn test_interval_overlap_half_open() {
        let a = Interval::new(0, 100);
        let b = Interval::new(50, 150);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = Interval::new(100, 200); // touching
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_from_windows_sorts() {
        let set = IntervalSet::from_windows(vec![
            Interval::new(500, 600),
            Interval::new(0, 100),
            Interval::new(200, 300),
        ])
        .unwrap();
        let starts: Vec<i64> = set.iter().map(|iv| iv.start_ms).collect();
        assert_eq!(starts, vec![0, 200, 500]);
        assert_eq!(set.total_duration_ms(), 300);
    }

    #[test]
    fn test_from_windows_rejects_malformed() {
        let err = IntervalSet::from_windows(vec![Interval::new(10, 10)]).unwrap_err();
        assert_eq!(err, ScheduleError::MalformedInterval(Interval::new(10, 10)));
    }

    #[test]
    fn test_from_windows_rejects_overlap() {
        let err = IntervalSet::from_windows(vec![Interval::new(50, 150), Interval::new(0, 100)])
            .unwrap_err();
        assert!(matches!(err, ScheduleError::IntervalOverlap { .. }));
    }

    #[test]
    fn test_find_overlap_neighbours() {
        let set = IntervalSet::from_windows(vec![
            Interval::new(0, 100),
            Interval::new(200, 300),
            Interval::new(400, 500),
        ])
        .unwrap();

        assert!(!set.overlaps(&Interval::new(100, 200)));
        assert_eq!(set.find_overlap(&Interval::new(250, 260)), Some(&Interval::new(200, 300)));
        assert_eq!(set.find_overlap(&Interval::new(350, 450)), Some(&Interval::new(400, 500)));
        assert_eq!(set.find_overlap(&Interval::new(90, 110)), Some(&Interval::new(0, 100)));
        assert!(!set.overlaps(&Interval::new(500, 600)));
    }

    #[test]
    fn test_overlap_same_start() {
        let set = IntervalSet::from_windows(vec![Interval::new(100, 200)]).unwrap();
        // Same start but longer: upper bound lands after the existing entry.
        assert!(set.overlaps(&Interval::new(100, 300)));
        // Same start but shorter: upper bound lands before the existing entry.
        assert!(set.overlaps(&Interval::new(100, 150)));
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut set = IntervalSet::new();
        assert_eq!(set.insert(Interval::new(300, 400)).unwrap(), 0);
        assert_eq!(set.insert(Interval::new(0, 100)).unwrap(), 0);
        assert_eq!(set.insert(Interval::new(100, 300)).unwrap(), 1);
        assert_eq!(set.len(), 3);

        let err = set.insert(Interval::new(350, 450)).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::IntervalOverlap {
                new: Interval::new(350, 450),
                existing: Interval::new(300, 400),
            }
        );
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_replace_and_remove() {
        let mut set =
            IntervalSet::from_windows(vec![Interval::new(0, 100), Interval::new(200, 300)])
                .unwrap();

        let old = set.replace(0, Some(Interval::new(60, 100))).unwrap();
        assert_eq!(old, Interval::new(0, 100));
        assert_eq!(set.get(0), Some(&Interval::new(60, 100)));

        set.replace(0, None);
        assert_eq!(set.as_slice(), &[Interval::new(200, 300)]);

        assert_eq!(set.remove(0), Some(Interval::new(200, 300)));
        assert!(set.is_empty());
        assert_eq!(set.remove(0), None);
        assert_eq!(set.replace(3, None), None);
    }
}
