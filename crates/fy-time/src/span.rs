//! `DateSpan` — an inclusive range of calendar dates.

use chrono::NaiveDate;

/// An inclusive `[start, end]` range of calendar dates.
///
/// Period and business-week bounds are reported as spans; both endpoints
/// belong to the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DateSpan {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateSpan {
    /// Create a span.  Callers guarantee `start <= end`.
    pub(crate) fn new(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "span start {start} after end {end}");
        Self { start, end }
    }

    /// First date of the span.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last date of the span (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered, counting both endpoints.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether `date` falls within the span, endpoints included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Iterate over every date in the span, in order.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.num_days() as usize)
    }
}

impl std::fmt::Display for DateSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn num_days_counts_both_endpoints() {
        let span = DateSpan::new(date(2019, 1, 1), date(2019, 1, 7));
        assert_eq!(span.num_days(), 7);
        let single = DateSpan::new(date(2019, 1, 1), date(2019, 1, 1));
        assert_eq!(single.num_days(), 1);
    }

    #[test]
    fn contains_is_inclusive() {
        let span = DateSpan::new(date(2019, 2, 1), date(2019, 2, 28));
        assert!(span.contains(date(2019, 2, 1)));
        assert!(span.contains(date(2019, 2, 28)));
        assert!(span.contains(date(2019, 2, 15)));
        assert!(!span.contains(date(2019, 1, 31)));
        assert!(!span.contains(date(2019, 3, 1)));
    }

    #[test]
    fn iter_days_walks_the_span() {
        let span = DateSpan::new(date(2019, 12, 30), date(2020, 1, 2));
        let days: Vec<_> = span.iter_days().collect();
        assert_eq!(
            days,
            vec![
                date(2019, 12, 30),
                date(2019, 12, 31),
                date(2020, 1, 1),
                date(2020, 1, 2),
            ]
        );
    }

    #[test]
    fn display() {
        let span = DateSpan::new(date(2019, 1, 1), date(2019, 1, 28));
        assert_eq!(span.to_string(), "[2019-01-01, 2019-01-28]");
    }
}
