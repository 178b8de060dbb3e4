use crate::consts::DAYS_PER_WEEK;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Day of the week, Monday first as in ISO 8601.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Weekday of a Julian Day Number; JDN 0 fell on a Monday.
    pub fn from_jdn(jdn: i64) -> Self {
        Self::ALL[jdn.rem_euclid(DAYS_PER_WEEK) as usize]
    }

    /// ISO 8601 number, `1..=7` for Monday through Sunday
    pub const fn number_from_monday(self) -> u8 {
        self as u8 + 1
    }

    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
            Self::Sunday => "Sun",
        }
    }

    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::Monday => "월요일",
            Self::Tuesday => "화요일",
            Self::Wednesday => "수요일",
            Self::Thursday => "목요일",
            Self::Friday => "금요일",
            Self::Saturday => "토요일",
            Self::Sunday => "일요일",
        }
    }

    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }
}
