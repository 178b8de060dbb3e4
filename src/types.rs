use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_YEAR,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A Gregorian year in `MIN_YEAR..=MAX_YEAR` (1..=9999).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, rejecting 0 and anything above `MAX_YEAR`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is out of range.
    pub fn new(value: u16) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(DateError::InvalidYear(i64::from(value)));
        }
        NonZeroU16::new(value)
            .map(Self)
            .ok_or(DateError::InvalidYear(i64::from(value)))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }

    /// Number of days in this year (365 or 366)
    pub const fn days(self) -> u16 {
        if self.is_leap() { 366 } else { 365 }
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A month number in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, rejecting 0 and anything above `MAX_MONTH`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is out of range.
    pub fn new(value: u8) -> Result<Self, DateError> {
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        NonZeroU8::new(value)
            .map(Self)
            .ok_or(DateError::InvalidMonth(value))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// The month before this one, wrapping December <- January.
    /// The flag is `true` when the year has to be decremented.
    pub fn previous(self) -> (Self, bool) {
        match self.get() {
            JANUARY => (Self::december(), true),
            m => (Self(NonZeroU8::MIN.saturating_add(m - 2)), false),
        }
    }

    /// Number of days in this month of `year`.
    ///
    /// ```
    /// use civil_calc::{Month, Year};
    ///
    /// let february = Month::new(2).unwrap();
    /// assert_eq!(february.days_in(Year::new(2024).unwrap()), 29);
    /// assert_eq!(february.days_in(Year::new(2023).unwrap()), 28);
    /// ```
    pub const fn days_in(self, year: Year) -> u8 {
        days_in_month(year.get(), self.get())
    }

    /// English month name
    pub const fn name(self) -> &'static str {
        const NAMES: [&str; 12] = [
            "January", "February", "March", "April", "May", "June", "July", "August", "September",
            "October", "November", "December",
        ];
        NAMES[(self.get() - 1) as usize]
    }

    fn december() -> Self {
        Self(NonZeroU8::MIN.saturating_add(DECEMBER - 1))
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// A day-of-month, validated against the month it belongs to at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day that exists in `year`-`month`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: value,
        };
        if value > days_in_month(year.get(), month.get()) {
            return Err(invalid);
        }
        NonZeroU8::new(value).map(Self).ok_or(invalid)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    // Without year/month context only the 1..=31 envelope can be checked;
    // `CalendarDate` revalidates against the real month on deserialization.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let invalid = DateError::InvalidDay {
            year: 0,
            month: 0,
            day: value,
        };
        if value > DAYS_IN_MONTH[JANUARY as usize] {
            return Err(invalid);
        }
        NonZeroU8::new(value).map(Self).ok_or(invalid)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// `month` must already be validated to `1..=12`; use [`Month::days_in`] otherwise.
pub(crate) const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_range() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(9999).is_ok());
        assert!(matches!(Year::new(0), Err(DateError::InvalidYear(0))));
        assert!(matches!(Year::new(10000), Err(DateError::InvalidYear(10000))));
    }

    #[test]
    fn test_year_display_is_zero_padded() {
        assert_eq!(Year::new(2024).unwrap().to_string(), "2024");
        assert_eq!(Year::new(33).unwrap().to_string(), "0033");
    }

    #[test]
    fn test_year_days() {
        assert_eq!(Year::new(2023).unwrap().days(), 365);
        assert_eq!(Year::new(2024).unwrap().days(), 366);
        assert_eq!(Year::new(1900).unwrap().days(), 365);
        assert_eq!(Year::new(2000).unwrap().days(), 366);
    }

    #[test]
    fn test_month_range() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(DateError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(DateError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_previous_wraps() {
        let (prev, wrapped) = Month::new(1).unwrap().previous();
        assert_eq!(prev.get(), 12);
        assert!(wrapped);

        let (prev, wrapped) = Month::new(3).unwrap().previous();
        assert_eq!(prev.get(), 2);
        assert!(!wrapped);

        let (prev, wrapped) = Month::new(12).unwrap().previous();
        assert_eq!(prev.get(), 11);
        assert!(!wrapped);
    }

    #[test]
    fn test_month_name() {
        assert_eq!(Month::new(1).unwrap().name(), "January");
        assert_eq!(Month::new(12).unwrap().name(), "December");
    }

    #[test]
    fn test_day_respects_month_length() {
        let y2023 = Year::new(2023).unwrap();
        let y2024 = Year::new(2024).unwrap();
        let feb = Month::new(2).unwrap();
        let apr = Month::new(4).unwrap();

        assert!(Day::new(28, y2023, feb).is_ok());
        assert!(Day::new(29, y2023, feb).is_err());
        assert!(Day::new(29, y2024, feb).is_ok());
        assert!(Day::new(30, y2024, feb).is_err());
        assert!(Day::new(30, y2024, apr).is_ok());
        assert!(matches!(
            Day::new(31, y2024, apr),
            Err(DateError::InvalidDay {
                year: 2024,
                month: 4,
                day: 31
            })
        ));
        assert!(Day::new(0, y2024, apr).is_err());
    }

    #[test]
    fn test_day_try_from_envelope() {
        let day: Day = 31.try_into().unwrap();
        assert_eq!(day.get(), 31);
        assert!(Day::try_from(0).is_err());
        assert!(Day::try_from(32).is_err());
    }

    #[test]
    fn test_newtype_serde() {
        let year = Year::new(2024).unwrap();
        assert_eq!(serde_json::to_string(&year).unwrap(), "2024");
        assert!(serde_json::from_str::<Year>("0").is_err());

        let month: Month = serde_json::from_str("8").unwrap();
        assert_eq!(month.get(), 8);
        assert!(serde_json::from_str::<Month>("13").is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:    u16,
            is_leap: bool,
        }

        let cases = [
            TestCase { year: 2020, is_leap: true },
            TestCase { year: 2023, is_leap: false },
            TestCase { year: 1900, is_leap: false },
            TestCase { year: 2100, is_leap: false },
            TestCase { year: 2000, is_leap: true },
            TestCase { year: 2400, is_leap: true },
        ];

        for case in &cases {
            assert_eq!(is_leap_year(case.year), case.is_leap, "year {}", case.year);
        }
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12u8 {
            assert_eq!(days_in_month(2023, month), expected[month as usize]);
        }
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn test_month_length_only_for_valid_months() {
        let leap = Year::new(2024).unwrap();
        let lengths: Vec<u8> = (1..=12u8).map(|m| Month::new(m).unwrap().days_in(leap)).collect();
        assert_eq!(lengths, vec![31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
        assert_eq!(Month::new(2).unwrap().days_in(Year::new(1900).unwrap()), 28);

        // out-of-range months never reach the length table
        assert!(matches!(Month::new(13), Err(DateError::InvalidMonth(13))));
        assert!(Month::new(0).is_err());
    }
}
