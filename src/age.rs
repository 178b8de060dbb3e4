//! Age in its several Korean reckonings, plus birthday countdown.

use serde::Serialize;

use crate::lunar::ZodiacAnimal;
use crate::{CalendarDate, DateError, Weekday, days_in_month};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgeError {
    #[error("Birth date {birth} is after the reference date {reference}")]
    BirthAfterReference { birth: CalendarDate, reference: CalendarDate },

    #[error(transparent)]
    Date(#[from] DateError),
}

fn ensure_born(birth: CalendarDate, today: CalendarDate) -> Result<(), AgeError> {
    if birth > today {
        return Err(AgeError::BirthAfterReference { birth, reference: today });
    }
    Ok(())
}

/// Legal ("international") age: completed years since birth.
///
/// ```
/// use civil_calc::{CalendarDate, age::international_age};
///
/// let birth = CalendarDate::new(2000, 5, 15).unwrap();
/// assert_eq!(international_age(birth, CalendarDate::new(2024, 5, 14).unwrap()).unwrap(), 23);
/// assert_eq!(international_age(birth, CalendarDate::new(2024, 5, 15).unwrap()).unwrap(), 24);
/// ```
///
/// # Errors
/// `BirthAfterReference` when `birth` is later than `today`.
pub fn international_age(birth: CalendarDate, today: CalendarDate) -> Result<u16, AgeError> {
    ensure_born(birth, today)?;
    let before_birthday = today.month_day() < birth.month_day();
    Ok(today.year() - birth.year() - u16::from(before_birthday))
}

/// Traditional counting age: one at birth, plus one every 1 January.
///
/// # Errors
/// `BirthAfterReference` when `birth` is later than `today`.
pub fn counting_age(birth: CalendarDate, today: CalendarDate) -> Result<u16, AgeError> {
    ensure_born(birth, today)?;
    Ok(today.year() - birth.year() + 1)
}

/// "Year age": the difference of the calendar years only.
///
/// # Errors
/// `BirthAfterReference` when `birth` is later than `today`.
pub fn year_age(birth: CalendarDate, today: CalendarDate) -> Result<u16, AgeError> {
    ensure_born(birth, today)?;
    Ok(today.year() - birth.year())
}

/// The day `birth`'s anniversary is celebrated in `year`. A 29 February
/// birthday falls on 28 February in common years.
///
/// # Errors
/// `InvalidYear` if `year` is outside 1..=9999.
pub fn birthday_in(birth: CalendarDate, year: u16) -> Result<CalendarDate, DateError> {
    let month = birth.month();
    let day = birth.day().min(days_in_month(year, month));
    CalendarDate::new(year, month, day)
}

/// Everything the age calculator shows for one birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeReport {
    pub birth:               CalendarDate,
    pub reference:           CalendarDate,
    pub international_age:   u16,
    pub counting_age:        u16,
    pub year_age:            u16,
    pub days_lived:          u32,
    pub next_birthday:       CalendarDate,
    /// 0 on the birthday itself
    pub days_until_birthday: u32,
    pub birth_weekday:       Weekday,
    /// Animal of the Gregorian birth year
    pub zodiac:              ZodiacAnimal,
}

impl AgeReport {
    /// # Errors
    /// `BirthAfterReference`, or `Date` when the next birthday would fall after 9999.
    pub fn new(birth: CalendarDate, today: CalendarDate) -> Result<Self, AgeError> {
        let international = international_age(birth, today)?;

        let this_year = birthday_in(birth, today.year())?;
        let next_birthday = if this_year >= today {
            this_year
        } else {
            birthday_in(birth, today.year() + 1)?
        };

        let report = Self {
            birth,
            reference: today,
            international_age: international,
            counting_age: counting_age(birth, today)?,
            year_age: year_age(birth, today)?,
            days_lived: birth.days_until(&today) as u32,
            next_birthday,
            days_until_birthday: today.days_until(&next_birthday) as u32,
            birth_weekday: birth.weekday(),
            zodiac: ZodiacAnimal::of_year(i32::from(birth.year())),
        };
        log::debug!("age report for {birth} at {today}: {report:?}");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_international_age_around_birthday() {
        let birth = date(2000, 5, 15);
        assert_eq!(international_age(birth, date(2024, 5, 14)).unwrap(), 23);
        assert_eq!(international_age(birth, date(2024, 5, 15)).unwrap(), 24);
        assert_eq!(international_age(birth, date(2024, 12, 31)).unwrap(), 24);
        assert_eq!(international_age(birth, birth).unwrap(), 0);
    }

    #[test]
    fn test_birth_after_reference_is_rejected() {
        let result = international_age(date(2024, 5, 16), date(2024, 5, 15));
        assert!(matches!(result, Err(AgeError::BirthAfterReference { .. })));
        assert!(AgeReport::new(date(2030, 1, 1), date(2024, 1, 1)).is_err());
    }

    #[test]
    fn test_age_increments_once_birthday_passes() {
        let births = [date(1990, 1, 1), date(1985, 7, 31), date(2000, 2, 29), date(1970, 12, 31)];
        let references = [date(2020, 1, 1), date(2020, 6, 30), date(2021, 3, 1), date(2019, 12, 31)];
        for birth in births {
            for reference in references {
                let now = international_age(birth, reference).unwrap();
                let a_year_later = date(reference.year() + 1, reference.month(), reference.day());
                assert_eq!(international_age(birth, a_year_later).unwrap(), now + 1, "{birth} at {reference}");
            }
        }
    }

    #[test]
    fn test_other_reckonings() {
        let birth = date(2000, 12, 31);
        let today = date(2001, 1, 1);
        assert_eq!(international_age(birth, today).unwrap(), 0);
        assert_eq!(year_age(birth, today).unwrap(), 1);
        assert_eq!(counting_age(birth, today).unwrap(), 2);
    }

    #[test]
    fn test_leap_day_birthday() {
        let birth = date(2000, 2, 29);
        assert_eq!(birthday_in(birth, 2023).unwrap(), date(2023, 2, 28));
        assert_eq!(birthday_in(birth, 2024).unwrap(), date(2024, 2, 29));
        // legal age still turns over on 1 March in common years
        assert_eq!(international_age(birth, date(2023, 2, 28)).unwrap(), 22);
        assert_eq!(international_age(birth, date(2023, 3, 1)).unwrap(), 23);
    }

    #[test]
    fn test_report() {
        let report = AgeReport::new(date(2000, 5, 15), date(2024, 5, 14)).unwrap();
        assert_eq!(report.international_age, 23);
        assert_eq!(report.counting_age, 25);
        assert_eq!(report.year_age, 24);
        assert_eq!(report.days_lived, 8765);
        assert_eq!(report.next_birthday, date(2024, 5, 15));
        assert_eq!(report.days_until_birthday, 1);
        assert_eq!(report.birth_weekday, Weekday::Monday);
        assert_eq!(report.zodiac, ZodiacAnimal::Dragon);
    }

    #[test]
    fn test_report_on_and_after_birthday() {
        let on = AgeReport::new(date(2000, 5, 15), date(2024, 5, 15)).unwrap();
        assert_eq!(on.next_birthday, date(2024, 5, 15));
        assert_eq!(on.days_until_birthday, 0);

        let after = AgeReport::new(date(2000, 5, 15), date(2024, 5, 16)).unwrap();
        assert_eq!(after.next_birthday, date(2025, 5, 15));
        assert_eq!(after.days_until_birthday, 364);
    }

    #[test]
    fn test_report_serializes() {
        let report = AgeReport::new(date(2000, 5, 15), date(2024, 5, 14)).unwrap();
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["birth"], "2000-05-15");
        assert_eq!(json["zodiac"], "Dragon");
        assert_eq!(json["international_age"], 23);
    }
}
