use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DateError, MONTHS_PER_YEAR, SPAN_SEPARATOR, days_in_month, prelude::*};

/// Two dates with `start <= end`, both inclusive as calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: CalendarDate,
    end:   CalendarDate,
}

/// Calendar-field difference between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[display(fmt = "{years}y {months}m {days}d")]
pub struct Elapsed {
    pub years:  u32,
    pub months: u32,
    pub days:   u32,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: CalendarDate, end: CalendarDate },

    /// Error parsing or validating a date.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Creates a new range.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    pub const fn dates(&self) -> (CalendarDate, CalendarDate) {
        (self.start, self.end)
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Whole days from start to end; 0 when both are the same day.
    pub fn total_days(&self) -> u32 {
        // start <= end and both lie in 1..=9999, so this fits comfortably
        self.start.days_until(&self.end) as u32
    }

    /// `(weeks, days)` split of [`total_days`](Self::total_days)
    pub fn weeks_and_days(&self) -> (u32, u32) {
        let total = self.total_days();
        (total / 7, total % 7)
    }

    /// Years, months and days between start and end, by field subtraction.
    ///
    /// A day underflow borrows the month preceding `end`'s month at its real
    /// length; a start day beyond that length is anchored at the month's last
    /// day (2024-01-31 to 2024-03-01 is one month and one day). A month
    /// underflow borrows a year.
    pub fn elapsed(&self) -> Elapsed {
        let (sy, sm, sd) = <(u16, u8, u8)>::from(self.start);
        let (ey, em, ed) = <(u16, u8, u8)>::from(self.end);

        let mut years = i64::from(ey) - i64::from(sy);
        let mut months = i64::from(em) - i64::from(sm);
        let mut days = i64::from(ed) - i64::from(sd);

        if days < 0 {
            let (prev_month, wrapped) = self.end.month_typed().previous();
            let prev_year = if wrapped { ey - 1 } else { ey };
            // ey > sy whenever the end month is January and days underflow,
            // so prev_year never drops below 1 here.
            let prev_len = i64::from(days_in_month(prev_year, prev_month.get()));
            let anchor = i64::from(sd).min(prev_len);
            days = i64::from(ed) + prev_len - anchor;
            months -= 1;
        }
        if months < 0 {
            months += i64::from(MONTHS_PER_YEAR);
            years -= 1;
        }

        log::trace!("elapsed {self}: {years}y {months}m {days}d");

        Elapsed {
            years:  years as u32,
            months: months as u32,
            days:   days as u32,
        }
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        match trimmed.split_once(SPAN_SEPARATOR) {
            None => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{SPAN_SEPARATOR}'): {s}"
            ))),
            Some((_, rest)) if rest.contains(SPAN_SEPARATOR) => Err(RangeError::InvalidFormat(format!(
                "Too many '{SPAN_SEPARATOR}' separators: expected 1, found {}",
                trimmed.matches(SPAN_SEPARATOR).count()
            ))),
            Some((start, end)) => {
                let start = start.trim().parse::<CalendarDate>()?;
                let end = end.trim().parse::<CalendarDate>()?;
                Self::new(start, end)
            }
        }
    }
}

impl PartialOrd for DateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    fn range(start: (u16, u8, u8), end: (u16, u8, u8)) -> DateRange {
        DateRange::new(date(start.0, start.1, start.2), date(end.0, end.1, end.2))
            .expect("failed to construct range")
    }

    #[test]
    fn test_new_rejects_reversed() {
        let result = DateRange::new(date(2000, 1, 2), date(2000, 1, 1));
        assert!(matches!(result, Err(RangeError::InvalidRange { .. })));
        assert!(DateRange::new(date(2000, 1, 1), date(2000, 1, 1)).is_ok());
    }

    #[test]
    fn test_contains_and_overlaps() {
        let r = range((2024, 1, 1), (2024, 1, 31));
        assert!(r.contains(&date(2024, 1, 1)));
        assert!(r.contains(&date(2024, 1, 31)));
        assert!(!r.contains(&date(2024, 2, 1)));

        assert!(r.overlaps(&range((2024, 1, 31), (2024, 3, 1))));
        assert!(!r.overlaps(&range((2024, 2, 1), (2024, 3, 1))));
    }

    #[test]
    fn test_total_days() {
        assert_eq!(range((2024, 1, 1), (2024, 1, 1)).total_days(), 0);
        assert_eq!(range((2024, 1, 1), (2025, 1, 1)).total_days(), 366);
        assert_eq!(range((2023, 1, 1), (2024, 1, 1)).total_days(), 365);
        assert_eq!(range((2024, 1, 1), (2024, 1, 20)).weeks_and_days(), (2, 5));
    }

    #[test]
    fn test_elapsed_cases() {
        struct TestCase {
            start:       (u16, u8, u8),
            end:         (u16, u8, u8),
            expected:    (u32, u32, u32),
            description: &'static str,
        }

        let cases = [
            TestCase {
                start:       (2020, 3, 2),
                end:         (2024, 5, 15),
                expected:    (4, 2, 13),
                description: "no borrowing",
            },
            TestCase {
                start:       (2024, 1, 15),
                end:         (2024, 3, 10),
                expected:    (0, 1, 24),
                description: "day borrow uses leap February (29 days)",
            },
            TestCase {
                start:       (2023, 1, 15),
                end:         (2023, 3, 10),
                expected:    (0, 1, 23),
                description: "day borrow uses common February (28 days)",
            },
            TestCase {
                start:       (2023, 11, 20),
                end:         (2024, 2, 5),
                expected:    (0, 2, 16),
                description: "day and year borrow (January has 31 days)",
            },
            TestCase {
                start:       (2023, 12, 20),
                end:         (2024, 1, 5),
                expected:    (0, 0, 16),
                description: "borrow from previous year's December",
            },
            TestCase {
                start:       (2024, 1, 31),
                end:         (2024, 3, 1),
                expected:    (0, 1, 1),
                description: "start day beyond borrowed month length",
            },
            TestCase {
                start:       (2000, 5, 15),
                end:         (2024, 5, 15),
                expected:    (24, 0, 0),
                description: "exact years",
            },
            TestCase {
                start:       (2024, 5, 15),
                end:         (2024, 5, 15),
                expected:    (0, 0, 0),
                description: "same day",
            },
        ];

        for case in &cases {
            let e = range(case.start, case.end).elapsed();
            assert_eq!((e.years, e.months, e.days), case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_parse() {
        let r = "2024-01-01/2024-12-31".parse::<DateRange>().unwrap();
        assert_eq!(r.dates(), (date(2024, 1, 1), date(2024, 12, 31)));

        let r = " 2024.01.01 / 2024.12.31 ".parse::<DateRange>().unwrap();
        assert_eq!(r.start(), date(2024, 1, 1));

        assert!(matches!("2024-01-01".parse::<DateRange>(), Err(RangeError::InvalidFormat(_))));
        assert!(matches!(
            "2024-01-01/2024-02-01/2024-03-01".parse::<DateRange>(),
            Err(RangeError::InvalidFormat(_))
        ));
        assert!(matches!("2024-12-31/2024-01-01".parse::<DateRange>(), Err(RangeError::InvalidRange { .. })));
        assert!(matches!("2024-02-30/2024-03-01".parse::<DateRange>(), Err(RangeError::Date(_))));
    }

    #[test]
    fn test_ordering() {
        let a = range((2024, 1, 1), (2024, 1, 10));
        let b = range((2024, 1, 1), (2024, 2, 1));
        let c = range((2024, 1, 2), (2024, 1, 3));
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_serde() {
        let r = range((2024, 1, 1), (2024, 12, 31));
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#""2024-01-01/2024-12-31""#);
        assert_eq!(serde_json::from_str::<DateRange>(&json).unwrap(), r);
        assert!(serde_json::from_str::<DateRange>(r#""2024-12-31/2024-01-01""#).is_err());
    }

    #[test]
    fn test_elapsed_display() {
        assert_eq!(range((2020, 3, 2), (2024, 5, 15)).elapsed().to_string(), "4y 2m 13d");
    }
}
