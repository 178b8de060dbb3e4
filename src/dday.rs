//! D-day counters and day offsets.
//!
//! Dates here are civil days without a time of day, so every difference is
//! effectively taken between local midnights; daylight-saving shifts or the
//! hour at which the calculation runs cannot move the count.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::range::RangeError;
use crate::{CalendarDate, DateError};

/// Signed whole days from `today` to `target`: positive for a future target,
/// negative for a past one.
///
/// ```
/// use civil_calc::{CalendarDate, dday::diff_days};
///
/// let today = CalendarDate::new(2024, 12, 24).unwrap();
/// let christmas = CalendarDate::new(2024, 12, 25).unwrap();
/// assert_eq!(diff_days(christmas, today), 1);
/// assert_eq!(diff_days(today, christmas), -1);
/// ```
pub fn diff_days(target: CalendarDate, today: CalendarDate) -> i64 {
    today.days_until(&target)
}

/// A target date seen from a reference day, rendered `D-3`, `D-Day` or `D+5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DDay {
    pub target: CalendarDate,
    pub today:  CalendarDate,
    pub days:   i64,
}

impl DDay {
    pub fn new(target: CalendarDate, today: CalendarDate) -> Self {
        Self {
            target,
            today,
            days: diff_days(target, today),
        }
    }

    pub const fn is_today(&self) -> bool {
        self.days == 0
    }

    pub const fn is_future(&self) -> bool {
        self.days > 0
    }

    pub const fn is_past(&self) -> bool {
        self.days < 0
    }
}

impl fmt::Display for DDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.days {
            0 => write!(f, "D-Day"),
            d if d > 0 => write!(f, "D-{d}"),
            d => write!(f, "D+{}", d.unsigned_abs()),
        }
    }
}

/// Whether the starting day counts as day 1 or day 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayCounting {
    /// The start date is day 0; day N is N days later.
    #[default]
    Exclusive,
    /// The start date is day 1, as couples count "100 days together".
    Inclusive,
}

/// Date of day `n` counted from `start`.
///
/// # Errors
/// `OutOfRange` when the result leaves years 1..=9999.
pub fn date_of_day(start: CalendarDate, n: i64, counting: DayCounting) -> Result<CalendarDate, DateError> {
    let offset = match counting {
        DayCounting::Exclusive => n,
        DayCounting::Inclusive => n.checked_sub(1).ok_or(DateError::OutOfRange(n))?,
    };
    start.add_days(offset)
}

/// How many days `today` is into a period that began on `start`, counting
/// the first day as day 1.
///
/// # Errors
/// `InvalidRange` when `start` is after `today`.
pub fn days_together(start: CalendarDate, today: CalendarDate) -> Result<u32, RangeError> {
    if start > today {
        return Err(RangeError::InvalidRange { start, end: today });
    }
    Ok(start.days_until(&today) as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_diff_days_identity_and_neighbours() {
        let today = date(2024, 3, 1);
        assert_eq!(diff_days(today, today), 0);
        assert_eq!(diff_days(today.add_days(1).unwrap(), today), 1);
        assert_eq!(diff_days(today.add_days(-1).unwrap(), today), -1);
    }

    #[test]
    fn test_diff_days_across_years() {
        assert_eq!(diff_days(date(2025, 1, 1), date(2024, 1, 1)), 366);
        assert_eq!(diff_days(date(2000, 1, 1), date(2024, 1, 1)), -8766);
        // 2024 DST start in many zones; civil days are unaffected
        assert_eq!(diff_days(date(2024, 3, 11), date(2024, 3, 10)), 1);
    }

    #[test]
    fn test_dday_labels() {
        let today = date(2024, 12, 20);
        assert_eq!(DDay::new(date(2024, 12, 25), today).to_string(), "D-5");
        assert_eq!(DDay::new(today, today).to_string(), "D-Day");
        assert_eq!(DDay::new(date(2024, 12, 1), today).to_string(), "D+19");

        let dday = DDay::new(date(2024, 12, 25), today);
        assert!(dday.is_future());
        assert!(!dday.is_past());
        assert!(!dday.is_today());
    }

    #[test]
    fn test_date_of_day() {
        let start = date(2024, 1, 1);
        assert_eq!(date_of_day(start, 100, DayCounting::Exclusive).unwrap(), date(2024, 4, 10));
        assert_eq!(date_of_day(start, 100, DayCounting::Inclusive).unwrap(), date(2024, 4, 9));
        assert_eq!(date_of_day(start, 1, DayCounting::Inclusive).unwrap(), start);
        assert!(date_of_day(date(9999, 12, 1), 100, DayCounting::Exclusive).is_err());
    }

    #[test]
    fn test_date_of_day_extreme_counts() {
        let start = date(2024, 1, 1);
        assert_eq!(
            date_of_day(start, i64::MIN, DayCounting::Inclusive),
            Err(DateError::OutOfRange(i64::MIN))
        );
        assert!(date_of_day(start, i64::MIN, DayCounting::Exclusive).is_err());
        assert!(date_of_day(start, i64::MAX, DayCounting::Inclusive).is_err());
    }

    #[test]
    fn test_days_together() {
        assert_eq!(days_together(date(2024, 1, 1), date(2024, 1, 1)).unwrap(), 1);
        assert_eq!(days_together(date(2024, 1, 1), date(2024, 4, 9)).unwrap(), 100);
        assert!(matches!(
            days_together(date(2024, 1, 2), date(2024, 1, 1)),
            Err(RangeError::InvalidRange { .. })
        ));
    }
}
