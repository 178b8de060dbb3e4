//! Month-length table for lunar years 1900..=2100.
//!
//! One word per lunar year. Bits 15..=4 are months 1..=12 (set = 30 days,
//! clear = 29), bits 3..=0 hold the leap month number (0 = none) and bit 16
//! is the length of the leap month. This is the table shipped by most
//! open-source lunar calendar libraries. It is reckoned on the UTC+8 meridian,
//! so a few months differ by a day from the Korean (UTC+9) calendar.

/// First lunar year covered by the table
pub const FIRST_YEAR: u16 = 1900;
/// Last lunar year covered by the table
pub const LAST_YEAR: u16 = 2100;

/// Julian Day Number of lunar 1900-01-01 (Gregorian 1900-01-31)
pub const EPOCH_JDN: i64 = 2_415_051;

const LEAP_MONTH_MASK: u32 = 0xf;
const LEAP_MONTH_LONG: u32 = 0x1_0000;
const LONG_MONTH: u8 = 30;
const SHORT_MONTH: u8 = 29;

#[rustfmt::skip]
static LUNAR_INFO: [u32; (LAST_YEAR - FIRST_YEAR + 1) as usize] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520, // 2100
];

fn info(year: u16) -> Option<u32> {
    let index = year.checked_sub(FIRST_YEAR)?;
    LUNAR_INFO.get(usize::from(index)).copied()
}

pub const fn contains_year(year: u16) -> bool {
    year >= FIRST_YEAR && year <= LAST_YEAR
}

/// Leap month of `year`, if it has one
pub fn leap_month(year: u16) -> Option<u8> {
    info(year)
        .map(|bits| (bits & LEAP_MONTH_MASK) as u8)
        .filter(|&month| month != 0)
}

/// Length of regular month `month` (1..=12) in `year`
pub fn month_days(year: u16, month: u8) -> Option<u8> {
    if !(1..=12).contains(&month) {
        return None;
    }
    info(year).map(|bits| {
        if bits & (0x1_0000 >> month) == 0 { SHORT_MONTH } else { LONG_MONTH }
    })
}

/// Length of the leap month of `year`, if it has one
pub fn leap_month_days(year: u16) -> Option<u8> {
    leap_month(year)?;
    info(year).map(|bits| if bits & LEAP_MONTH_LONG == 0 { SHORT_MONTH } else { LONG_MONTH })
}

/// Total days in lunar `year`, leap month included
pub fn year_days(year: u16) -> Option<u32> {
    let regular: u32 = (1..=12)
        .map(|month| month_days(year, month).map(u32::from))
        .sum::<Option<u32>>()?;
    Some(regular + leap_month_days(year).map_or(0, u32::from))
}

/// Months of `year` in calendar order as `(month, is_leap, days)`;
/// a leap month directly follows the regular month it repeats.
pub fn months(year: u16) -> impl Iterator<Item = (u8, bool, u8)> {
    let leap = leap_month(year);
    (1..=12u8).flat_map(move |month| {
        let regular = month_days(year, month).map(|days| (month, false, days));
        let repeated = leap
            .filter(|&leap| leap == month)
            .and_then(|_| leap_month_days(year))
            .map(|days| (month, true, days));
        regular.into_iter().chain(repeated)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_leap_months() {
        let cases = [
            (2001, Some(4)),
            (2004, Some(2)),
            (2017, Some(6)),
            (2020, Some(4)),
            (2023, Some(2)),
            (2024, None),
            (2025, Some(6)),
            (2033, Some(11)),
        ];
        for (year, expected) in cases {
            assert_eq!(leap_month(year), expected, "lunar year {year}");
        }
    }

    #[test]
    fn test_year_lengths() {
        assert_eq!(year_days(2023), Some(384));
        assert_eq!(year_days(2024), Some(354));
        assert_eq!(year_days(1899), None);
        assert_eq!(year_days(2101), None);
    }

    #[test]
    fn test_month_lengths() {
        let expected = [29, 30, 29, 29, 30, 29, 30, 30, 29, 30, 30, 29];
        for (i, days) in expected.iter().enumerate() {
            assert_eq!(month_days(2024, i as u8 + 1), Some(*days));
        }
        assert_eq!(month_days(2024, 0), None);
        assert_eq!(month_days(2024, 13), None);
        assert_eq!(leap_month_days(2023), Some(29));
        assert_eq!(leap_month_days(2024), None);
    }

    #[test]
    fn test_months_order() {
        let order: Vec<_> = months(2023).map(|(m, leap, _)| (m, leap)).collect();
        assert_eq!(order.len(), 13);
        assert_eq!(&order[..4], &[(1, false), (2, false), (2, true), (3, false)]);
        assert_eq!(months(2024).count(), 12);
    }

    #[test]
    fn test_table_spans_to_2101() {
        let total: u32 = (FIRST_YEAR..=LAST_YEAR).filter_map(year_days).sum();
        // lunar 2100-12-29 is Gregorian 2101-01-28
        assert_eq!(EPOCH_JDN + i64::from(total) - 1, 2_488_462);
    }
}
