//! Gregorian <-> lunisolar conversion.
//!
//! Conversion goes through the [`LunisolarCalendar`] trait so that the data
//! source stays swappable. [`LunarTable`] is the bundled backend, a published
//! month-length table covering lunar years 1900 through 2100; nothing here
//! computes new moons or solar terms.
//!
//! ```
//! use civil_calc::CalendarDate;
//! use civil_calc::lunar::{gregorian_to_lunar, lunar_to_gregorian};
//!
//! let chuseok = lunar_to_gregorian(2024, 8, 15, false).unwrap();
//! assert_eq!(chuseok, CalendarDate::new(2024, 9, 17).unwrap());
//!
//! let lunar = gregorian_to_lunar(chuseok).unwrap();
//! assert_eq!((lunar.month, lunar.day), (8, 15));
//! assert_eq!(lunar.year_name.to_string(), "甲辰");
//! ```

mod sexagenary;
pub mod table;

pub use sexagenary::{EarthlyBranch, HeavenlyStem, SexagenaryYear, ZodiacAnimal};

use crate::{CalendarDate, DateError};
use serde::Serialize;
use std::fmt;

/// A day of the lunisolar calendar as produced by a [`LunisolarCalendar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunarDate {
    pub year:          u16,
    pub month:         u8,
    pub day:           u8,
    pub is_leap_month: bool,
    pub year_name:     SexagenaryYear,
}

impl LunarDate {
    /// Korean rendering, e.g. `2023년 윤2월 1일 (계묘년)`.
    pub fn korean_label(&self) -> String {
        let leap = if self.is_leap_month { "윤" } else { "" };
        format!(
            "{}년 {leap}{}월 {}일 ({}년)",
            self.year,
            self.month,
            self.day,
            self.year_name.hangul()
        )
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.is_leap_month {
            write!(f, " (leap)")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Gregorian date outside the backend's coverage.
    #[error("{date} is outside the supported range {first}..={last}")]
    OutOfRange {
        date:  CalendarDate,
        first: CalendarDate,
        last:  CalendarDate,
    },

    #[error("Lunar year {year} is outside the supported range {first}..={last}")]
    LunarYearOutOfRange { year: u16, first: u16, last: u16 },

    #[error("Invalid lunar month: {0} (must be 1-12)")]
    InvalidLunarMonth(u8),

    #[error("Lunar year {year} has no leap month {month}")]
    NoLeapMonth { year: u16, month: u8 },

    #[error("Invalid lunar day {day} (month {month} of {year} has {max} days)")]
    InvalidLunarDay { year: u16, month: u8, day: u8, max: u8 },

    #[error(transparent)]
    Date(#[from] DateError),
}

/// The two-way contract expected from a lunisolar calendar source.
pub trait LunisolarCalendar {
    /// # Errors
    /// `OutOfRange` when `date` is not covered by the source.
    fn to_lunar(&self, date: CalendarDate) -> Result<LunarDate, ConversionError>;

    /// # Errors
    /// Out-of-range year, month or day, or a leap month the year does not have.
    fn to_solar(&self, year: u16, month: u8, day: u8, is_leap_month: bool) -> Result<CalendarDate, ConversionError>;
}

/// Table-driven backend for lunar years 1900..=2100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LunarTable;

impl LunarTable {
    /// First Gregorian date covered (lunar 1900-01-01)
    pub fn first_date() -> Result<CalendarDate, DateError> {
        CalendarDate::from_jdn(table::EPOCH_JDN)
    }

    /// Last Gregorian date covered (lunar 2100-12-29)
    pub fn last_date() -> Result<CalendarDate, DateError> {
        let total: u32 = (table::FIRST_YEAR..=table::LAST_YEAR)
            .filter_map(table::year_days)
            .sum();
        CalendarDate::from_jdn(table::EPOCH_JDN + i64::from(total) - 1)
    }

    pub fn leap_month(year: u16) -> Option<u8> {
        table::leap_month(year)
    }

    fn out_of_range(date: CalendarDate) -> ConversionError {
        match (Self::first_date(), Self::last_date()) {
            (Ok(first), Ok(last)) => ConversionError::OutOfRange { date, first, last },
            (Err(e), _) | (_, Err(e)) => e.into(),
        }
    }

    fn check_year(year: u16) -> Result<(), ConversionError> {
        if table::contains_year(year) {
            Ok(())
        } else {
            Err(ConversionError::LunarYearOutOfRange {
                year,
                first: table::FIRST_YEAR,
                last: table::LAST_YEAR,
            })
        }
    }
}

impl LunisolarCalendar for LunarTable {
    fn to_lunar(&self, date: CalendarDate) -> Result<LunarDate, ConversionError> {
        let mut offset = date.to_jdn() - table::EPOCH_JDN;
        if offset < 0 {
            return Err(Self::out_of_range(date));
        }

        let mut year = table::FIRST_YEAR;
        loop {
            let Some(days) = table::year_days(year) else {
                return Err(Self::out_of_range(date));
            };
            if offset < i64::from(days) {
                break;
            }
            offset -= i64::from(days);
            year += 1;
        }

        for (month, is_leap_month, days) in table::months(year) {
            if offset < i64::from(days) {
                let lunar = LunarDate {
                    year,
                    month,
                    day: offset as u8 + 1,
                    is_leap_month,
                    year_name: SexagenaryYear::from_year(i32::from(year)),
                };
                log::debug!("{date} -> lunar {lunar}");
                return Ok(lunar);
            }
            offset -= i64::from(days);
        }

        // year_days() and months() sum the same entries
        Err(Self::out_of_range(date))
    }

    fn to_solar(&self, year: u16, month: u8, day: u8, is_leap_month: bool) -> Result<CalendarDate, ConversionError> {
        Self::check_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(ConversionError::InvalidLunarMonth(month));
        }
        if is_leap_month && table::leap_month(year) != Some(month) {
            return Err(ConversionError::NoLeapMonth { year, month });
        }

        let mut offset: i64 = (table::FIRST_YEAR..year)
            .filter_map(table::year_days)
            .map(i64::from)
            .sum();

        for (m, leap, days) in table::months(year) {
            if m == month && leap == is_leap_month {
                if day == 0 || day > days {
                    return Err(ConversionError::InvalidLunarDay {
                        year,
                        month,
                        day,
                        max: days,
                    });
                }
                let date = CalendarDate::from_jdn(table::EPOCH_JDN + offset + i64::from(day) - 1)?;
                log::debug!("lunar {year:04}-{month:02}-{day:02} (leap: {is_leap_month}) -> {date}");
                return Ok(date);
            }
            offset += i64::from(days);
        }

        Err(ConversionError::InvalidLunarMonth(month))
    }
}

/// Converts with the bundled [`LunarTable`].
///
/// # Errors
/// See [`LunisolarCalendar::to_lunar`].
pub fn gregorian_to_lunar(date: CalendarDate) -> Result<LunarDate, ConversionError> {
    LunarTable.to_lunar(date)
}

/// Converts with the bundled [`LunarTable`].
///
/// # Errors
/// See [`LunisolarCalendar::to_solar`].
pub fn lunar_to_gregorian(year: u16, month: u8, day: u8, is_leap_month: bool) -> Result<CalendarDate, ConversionError> {
    LunarTable.to_solar(year, month, day, is_leap_month)
}

/// Gregorian date on which a recurring lunar anniversary (birthday, memorial
/// day) falls in lunar year `year`. The regular month is used, and day 30
/// moves to day 29 in years where that month is short.
///
/// # Errors
/// Anything [`LunisolarCalendar::to_solar`] rejects other than the short-month case.
pub fn recurring_lunar_date<C: LunisolarCalendar>(
    calendar: &C,
    year: u16,
    month: u8,
    day: u8,
) -> Result<CalendarDate, ConversionError> {
    match calendar.to_solar(year, month, day, false) {
        Err(ConversionError::InvalidLunarDay { max, .. }) if day == 30 && max == 29 => {
            calendar.to_solar(year, month, max, false)
        }
        other => other,
    }
}
