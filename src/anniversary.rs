//! Day-count milestones (100th day, 1000th day, ...) from a start date.

use serde::{Deserialize, Serialize};

use crate::consts::{ANNIVERSARY_OFFSETS, THIS_MONTH_DAYS, THIS_WEEK_DAYS};
use crate::prelude::*;
use crate::{CalendarDate, DateError, Weekday};

/// Where a milestone stands relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum MilestoneStatus {
    Past,
    Today,
    /// Within the next 7 days
    ThisWeek,
    /// Within the next 30 days
    ThisMonth,
    Upcoming,
}

impl MilestoneStatus {
    /// Classifies a signed distance in days (positive = in the future).
    pub const fn from_days(days_from_today: i64) -> Self {
        match days_from_today {
            d if d < 0 => Self::Past,
            0 => Self::Today,
            d if d <= THIS_WEEK_DAYS => Self::ThisWeek,
            d if d <= THIS_MONTH_DAYS => Self::ThisMonth,
            _ => Self::Upcoming,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Milestone {
    pub offset_days:     u32,
    pub date:            CalendarDate,
    pub weekday:         Weekday,
    pub days_from_today: i64,
    pub status:          MilestoneStatus,
}

/// The standard milestones for a relationship or event that began on `start`.
///
/// ```
/// use civil_calc::CalendarDate;
/// use civil_calc::anniversary::{MilestoneStatus, milestones};
///
/// let start = CalendarDate::new(2024, 1, 1).unwrap();
/// let today = CalendarDate::new(2024, 4, 5).unwrap();
/// let list = milestones(start, today).unwrap();
///
/// assert_eq!(list[0].offset_days, 100);
/// assert_eq!(list[0].date, CalendarDate::new(2024, 4, 10).unwrap());
/// assert_eq!(list[0].status, MilestoneStatus::ThisWeek);
/// ```
///
/// # Errors
/// `OutOfRange` if a milestone would fall after 9999-12-31.
pub fn milestones(start: CalendarDate, today: CalendarDate) -> Result<Vec<Milestone>, DateError> {
    milestones_with(start, today, &ANNIVERSARY_OFFSETS)
}

/// Like [`milestones`] with caller-chosen offsets, returned in the given order.
///
/// # Errors
/// `OutOfRange` if a milestone would fall after 9999-12-31.
pub fn milestones_with(start: CalendarDate, today: CalendarDate, offsets: &[u32]) -> Result<Vec<Milestone>, DateError> {
    offsets
        .iter()
        .map(|&offset_days| {
            let date = start.add_days(i64::from(offset_days))?;
            let days_from_today = today.days_until(&date);
            Ok(Milestone {
                offset_days,
                date,
                weekday: date.weekday(),
                days_from_today,
                status: MilestoneStatus::from_days(days_from_today),
            })
        })
        .collect()
}

/// The first milestone that is today or still ahead.
///
/// # Errors
/// `OutOfRange` if a milestone would fall after 9999-12-31.
pub fn next_milestone(start: CalendarDate, today: CalendarDate) -> Result<Option<Milestone>, DateError> {
    Ok(milestones(start, today)?
        .into_iter()
        .filter(|m| m.status != MilestoneStatus::Past)
        .min_by_key(|m| m.days_from_today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_status_boundaries() {
        let cases = [
            (-1, MilestoneStatus::Past),
            (0, MilestoneStatus::Today),
            (1, MilestoneStatus::ThisWeek),
            (7, MilestoneStatus::ThisWeek),
            (8, MilestoneStatus::ThisMonth),
            (30, MilestoneStatus::ThisMonth),
            (31, MilestoneStatus::Upcoming),
        ];
        for (days, expected) in cases {
            assert_eq!(MilestoneStatus::from_days(days), expected, "{days} days");
        }
    }

    #[test]
    fn test_standard_offsets() {
        let start = date(2020, 1, 1);
        let list = milestones(start, date(2024, 1, 1)).unwrap();
        let offsets: Vec<u32> = list.iter().map(|m| m.offset_days).collect();
        assert_eq!(offsets, vec![100, 200, 300, 365, 500, 730, 1000, 1095, 1825, 2000, 3650]);

        for m in &list {
            assert_eq!(start.days_until(&m.date), i64::from(m.offset_days));
        }
        assert_eq!(list[3].date, date(2020, 12, 31)); // 2020 is a leap year
        assert_eq!(list[3].status, MilestoneStatus::Past);
        assert_eq!(list[10].date, date(2029, 12, 29));
        assert_eq!(list[10].status, MilestoneStatus::Upcoming);
    }

    #[test]
    fn test_today_and_next() {
        let start = date(2024, 1, 1);
        let today = date(2024, 4, 10);
        let list = milestones(start, today).unwrap();
        assert_eq!(list[0].status, MilestoneStatus::Today);
        assert_eq!(list[0].days_from_today, 0);

        let next = next_milestone(start, today).unwrap().unwrap();
        assert_eq!(next.offset_days, 100);

        let next = next_milestone(start, date(2024, 4, 11)).unwrap().unwrap();
        assert_eq!(next.offset_days, 200);
    }

    #[test]
    fn test_custom_offsets_and_range() {
        let list = milestones_with(date(2024, 1, 1), date(2024, 1, 1), &[1, 7]).unwrap();
        assert_eq!(list[0].date, date(2024, 1, 2));
        assert_eq!(list[1].weekday, Weekday::Monday);
        assert_eq!(list[1].status, MilestoneStatus::ThisWeek);

        assert!(milestones(date(9999, 1, 1), date(9999, 1, 1)).is_err());
    }
}
