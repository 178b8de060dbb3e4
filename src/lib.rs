//! Everyday calculators as plain functions over validated values.
//!
//! * civil date arithmetic: age, weekday, D-day, anniversary milestones,
//!   tenure with annual leave and severance ([`age`], [`dday`], [`anniversary`],
//!   [`tenure`], [`range`])
//! * conversion between the Gregorian and the Korean/Chinese lunisolar
//!   calendar behind a narrow trait ([`lunar`])
//! * unit conversion for length, weight, volume, area and temperature ([`units`])
//! * deposit/savings interest and loan amortization ([`deposit`], [`loan`])
//!
//! Every input is validated before anything is computed; nothing is clamped or
//! defaulted silently.
//!
//! ```
//! use civil_calc::{CalendarDate, Weekday, age};
//!
//! let birth: CalendarDate = "2000-05-15".parse().unwrap();
//! let today: CalendarDate = "2024-05-14".parse().unwrap();
//!
//! assert_eq!(age::international_age(birth, today).unwrap(), 23);
//! assert_eq!(birth.weekday(), Weekday::Monday);
//! ```

pub mod age;
pub mod anniversary;
mod consts;
pub mod dday;
pub mod deposit;
pub mod input;
pub mod loan;
pub mod lunar;
pub mod policy;
mod prelude;
pub mod range;
pub mod tenure;
mod types;
pub mod units;
mod weekday;

pub use consts::*;
pub use input::{InputError, parse_number};
pub use lunar::{ConversionError, LunarDate, LunisolarCalendar, gregorian_to_lunar, lunar_to_gregorian};
pub use range::{DateRange, Elapsed, RangeError};
pub use types::{Day, Month, Year, is_leap_year};
pub use units::{Category, Quantity, Unit, UnitError, convert};
pub use weekday::Weekday;

use crate::prelude::*;
use std::str::FromStr;
use types::days_in_month;

/// A real day of the proleptic Gregorian calendar between 0001-01-01 and 9999-12-31.
///
/// Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i64),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Date outside 0001-01-01..=9999-12-31 (julian day {_0})")]
    OutOfRange(i64),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl CalendarDate {
    /// Creates a date from raw fields, validating each against the calendar.
    ///
    /// # Errors
    /// `InvalidYear`, `InvalidMonth` or `InvalidDay` for the first offending field.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Assembles a date from already typed parts. The day is checked again
    /// against this particular year and month.
    ///
    /// # Errors
    /// `InvalidDay` if `day` does not exist in `year`-`month`.
    pub fn from_parts(year: Year, month: Month, day: Day) -> Result<Self, DateError> {
        let day = Day::new(day.get(), year, month)?;
        Ok(Self { year, month, day })
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// `(month, day)` pair, used wherever only the position within a year matters
    pub const fn month_day(&self) -> (u8, u8) {
        (self.month.get(), self.day.get())
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Julian Day Number of this date (2000-01-01 is 2 451 545).
    pub fn to_jdn(&self) -> i64 {
        let y = i64::from(self.year.get());
        let m = i64::from(self.month.get());
        let d = i64::from(self.day.get());
        // Integer division truncates towards zero, as the algorithm expects.
        let a = (m - 14) / 12;
        (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12 - (3 * ((y + 4900 + a) / 100)) / 4
            + d
            - 32075
    }

    /// Inverse of [`to_jdn`](Self::to_jdn).
    ///
    /// # Errors
    /// `OutOfRange` if the day number falls outside years 1..=9999.
    pub fn from_jdn(jdn: i64) -> Result<Self, DateError> {
        if !(MIN_JDN..=MAX_JDN).contains(&jdn) {
            return Err(DateError::OutOfRange(jdn));
        }
        let f = jdn + 1401 + (((4 * jdn + 274_277) / 146_097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;

        let year = u16::try_from(year).map_err(|_| DateError::InvalidYear(year))?;
        Self::new(year, month as u8, day as u8)
    }

    /// The date `days` days later (or earlier when negative).
    ///
    /// # Errors
    /// `OutOfRange` when the result leaves the supported years.
    pub fn add_days(&self, days: i64) -> Result<Self, DateError> {
        let jdn = self
            .to_jdn()
            .checked_add(days)
            .ok_or(DateError::OutOfRange(i64::MAX))?;
        Self::from_jdn(jdn)
    }

    /// Signed whole days from `self` to `other`; positive when `other` is later.
    pub fn days_until(&self, other: &Self) -> i64 {
        other.to_jdn() - self.to_jdn()
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from_jdn(self.to_jdn())
    }

    /// 1-based position of the day within its year
    pub fn ordinal(&self) -> u16 {
        let before: u16 = (1..self.month.get())
            .map(|m| u16::from(days_in_month(self.year.get(), m)))
            .sum();
        before + u16::from(self.day.get())
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_dot = trimmed.contains(DOTTED_SEPARATOR);
        let separator = match (has_hyphen, has_dot) {
            (true, true) => {
                return Err(DateError::InvalidFormat(format!(
                    "Mixed delimiters ({DATE_SEPARATOR} and {DOTTED_SEPARATOR})"
                )));
            }
            (true, false) => DATE_SEPARATOR,
            (false, true) => DOTTED_SEPARATOR,
            (false, false) => {
                return Err(DateError::InvalidFormat(format!(
                    "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {trimmed}"
                )));
            }
        };

        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        match parts.as_slice() {
            [year, month, day] => {
                let year = Self::parse_u16(year)?;
                let month = Self::parse_u8(month)?;
                let day = Self::parse_u8(day)?;
                Self::new(year, month, day)
            }
            _ => Err(DateError::InvalidFormat(format!(
                "Expected 3 components separated by {separator}, found {}",
                parts.len()
            ))),
        }
    }
}

impl CalendarDate {
    /// Digits only; `str::parse` would also take a leading `+`.
    fn digits(s: &str) -> Result<&str, DateError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::InvalidFormat(s.to_owned()));
        }
        Ok(s)
    }

    fn parse_u16(s: &str) -> Result<u16, DateError> {
        Self::digits(s)?
            .parse::<u16>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }

    fn parse_u8(s: &str) -> Result<u8, DateError> {
        Self::digits(s)?
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl TryFrom<(u16, u8, u8)> for CalendarDate {
    type Error = DateError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl From<CalendarDate> for (u16, u8, u8) {
    fn from(date: CalendarDate) -> Self {
        (date.year(), date.month(), date.day())
    }
}

#[cfg(feature = "clock")]
impl CalendarDate {
    /// Today's date in the local time zone.
    ///
    /// # Errors
    /// Only if the system clock reports a year outside 1..=9999.
    pub fn today() -> Result<Self, DateError> {
        Self::try_from(chrono::Local::now().date_naive())
    }

    pub fn to_naive_date(self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(
            i32::from(self.year()),
            u32::from(self.month()),
            u32::from(self.day()),
        )
    }
}

#[cfg(feature = "clock")]
impl TryFrom<chrono::NaiveDate> for CalendarDate {
    type Error = DateError;

    fn try_from(value: chrono::NaiveDate) -> Result<Self, Self::Error> {
        use chrono::Datelike;

        let year = u16::try_from(value.year()).map_err(|_| DateError::InvalidYear(i64::from(value.year())))?;
        Self::new(year, value.month() as u8, value.day() as u8)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::CalendarDate;

    pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).expect("test date must be valid")
    }
}
