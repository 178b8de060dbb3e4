/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Julian Day Number of 0001-01-01 (proleptic Gregorian)
pub const MIN_JDN: i64 = 1_721_426;
/// Julian Day Number of 9999-12-31
pub const MAX_JDN: i64 = 5_373_484;

pub const DAYS_PER_WEEK: i64 = 7;
pub const DAYS_PER_YEAR: i64 = 365;
pub const MONTHS_PER_YEAR: u32 = 12;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Dotted separator (`2024.05.15`)
pub const DOTTED_SEPARATOR: char = '.';
/// Span separator (ISO 8601 interval format)
pub const SPAN_SEPARATOR: char = '/';

/// Day offsets of the classic anniversary milestones
pub const ANNIVERSARY_OFFSETS: [u32; 11] = [100, 200, 300, 365, 500, 730, 1000, 1095, 1825, 2000, 3650];
/// Upper bound (inclusive, in days) of the "this week" milestone window
pub const THIS_WEEK_DAYS: i64 = 7;
/// Upper bound (inclusive, in days) of the "this month" milestone window
pub const THIS_MONTH_DAYS: i64 = 30;

/// Annual leave granted after the first full year of service
pub const LEAVE_BASE_DAYS: u32 = 15;
/// Statutory cap on annual leave
pub const LEAVE_MAX_DAYS: u32 = 25;
/// Days of service per accrued leave day during the first year
pub const LEAVE_ACCRUAL_DAYS: u32 = 30;
/// Years of service per additional leave day after the first year
pub const LEAVE_BONUS_INTERVAL_YEARS: u32 = 2;

/// Flat withholding tax on interest income (income 14% + local 1.4%)
pub const STANDARD_TAX_RATE: f64 = 0.154;
/// Preferential withholding rate for farmer/fisher cooperative accounts
pub const PREFERENTIAL_TAX_RATE: f64 = 0.095;

/// Longest term accepted by the financial estimators (50 years)
pub const MAX_TERM_MONTHS: u32 = 600;
/// Highest annual rate, in percent, accepted by the financial estimators
pub const MAX_RATE_PCT: f64 = 100.0;

/// Offset between Celsius and Kelvin
pub const KELVIN_OFFSET: f64 = 273.15;
/// Square metres per pyeong, by convention
pub const SQUARE_METERS_PER_PYEONG: f64 = 3.3058;
