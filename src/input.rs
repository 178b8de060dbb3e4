//! Parse-and-validate helpers for numeric form input.
//!
//! Free text is never coerced: an empty field, a non-number or a non-finite
//! value is reported with the name of the field it came from.

use serde::Serialize;

use crate::consts::{MAX_RATE_PCT, MAX_TERM_MONTHS};

/// Result type alias for input validation
pub type InputResult<T> = Result<T, InputError>;

#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "type", content = "details")]
pub enum InputError {
    #[error("Missing required field: {field}")]
    Missing { field: String },

    #[error("Invalid number for '{field}': {value}")]
    NotANumber { field: String, value: String },

    #[error("'{field}' must be a finite number, got {value}")]
    NonFinite { field: String, value: f64 },

    #[error("'{field}' must not be negative, got {value}")]
    Negative { field: String, value: f64 },

    #[error("'{field}' must be greater than zero, got {value}")]
    NotPositive { field: String, value: f64 },

    #[error("'{field}' is out of range: {value} (must be {min}-{max})")]
    OutOfRange {
        field: String,
        value: f64,
        min:   f64,
        max:   f64,
    },
}

impl InputError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing { field: field.into() }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field }
            | Self::NotANumber { field, .. }
            | Self::NonFinite { field, .. }
            | Self::Negative { field, .. }
            | Self::NotPositive { field, .. }
            | Self::OutOfRange { field, .. } => field,
        }
    }

    /// Short code for programmatic handling
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "MISSING_FIELD",
            Self::NotANumber { .. } => "NOT_A_NUMBER",
            Self::NonFinite { .. } => "NON_FINITE",
            Self::Negative { .. } => "NEGATIVE",
            Self::NotPositive { .. } => "NOT_POSITIVE",
            Self::OutOfRange { .. } => "OUT_OF_RANGE",
        }
    }
}

/// Parses a decimal number typed by a user. Surrounding whitespace and
/// thousands separators (`1,234.5`) are accepted.
///
/// ```
/// use civil_calc::parse_number;
///
/// assert_eq!(parse_number("amount", " 1,234.5 ").unwrap(), 1234.5);
/// assert!(parse_number("amount", "12a").is_err());
/// assert!(parse_number("amount", "").is_err());
/// ```
///
/// # Errors
/// `Missing` for blank input, `NotANumber` for anything unparsable and
/// `NonFinite` for `inf`/`NaN`.
pub fn parse_number(field: &str, text: &str) -> InputResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::missing(field));
    }
    let not_a_number = || InputError::NotANumber {
        field: field.to_owned(),
        value: trimmed.to_owned(),
    };
    let cleaned = strip_thousands_separators(trimmed).ok_or_else(not_a_number)?;
    let value = cleaned.parse::<f64>().map_err(|_| not_a_number())?;
    require_finite(field, value)
}

/// Removes `,` grouping from the integer part. Every group after the first
/// must have exactly three digits and no comma may follow the decimal point
/// or exponent; anything else yields `None`.
fn strip_thousands_separators(text: &str) -> Option<String> {
    if !text.contains(',') {
        return Some(text.to_owned());
    }

    let (integer, fraction) = text
        .find(['.', 'e', 'E'])
        .map_or((text, ""), |at| text.split_at(at));
    if fraction.contains(',') {
        return None;
    }

    let digits = integer.strip_prefix(['+', '-']).unwrap_or(integer);
    let sign = &integer[..integer.len() - digits.len()];
    let is_digits = |group: &str| group.bytes().all(|b| b.is_ascii_digit());

    let mut groups = digits.split(',');
    let leading = groups.next()?;
    if leading.is_empty() || leading.len() > 3 || !is_digits(leading) {
        return None;
    }
    if !groups.all(|group| group.len() == 3 && is_digits(group)) {
        return None;
    }

    Some(format!("{sign}{}{fraction}", digits.replace(',', "")))
}

/// # Errors
/// `NonFinite` for infinities and NaN.
pub fn require_finite(field: &str, value: f64) -> InputResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NonFinite {
            field: field.to_owned(),
            value,
        })
    }
}

/// # Errors
/// `NonFinite` or `Negative`.
pub fn require_non_negative(field: &str, value: f64) -> InputResult<f64> {
    let value = require_finite(field, value)?;
    if value < 0.0 {
        return Err(InputError::Negative {
            field: field.to_owned(),
            value,
        });
    }
    Ok(value)
}

/// # Errors
/// `NonFinite` or `NotPositive`.
pub fn require_positive(field: &str, value: f64) -> InputResult<f64> {
    let value = require_finite(field, value)?;
    if value <= 0.0 {
        return Err(InputError::NotPositive {
            field: field.to_owned(),
            value,
        });
    }
    Ok(value)
}

/// # Errors
/// `OutOfRange` when `value` lies outside `min..=max`.
pub fn require_in_range(field: &str, value: u32, min: u32, max: u32) -> InputResult<u32> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(InputError::OutOfRange {
            field: field.to_owned(),
            value: f64::from(value),
            min: f64::from(min),
            max: f64::from(max),
        })
    }
}

/// Annual interest rate given in percent.
///
/// # Errors
/// `NonFinite`, `Negative`, or `OutOfRange` above 100%.
pub fn require_rate_pct(field: &str, value: f64) -> InputResult<f64> {
    let value = require_non_negative(field, value)?;
    if value > MAX_RATE_PCT {
        return Err(InputError::OutOfRange {
            field: field.to_owned(),
            value,
            min: 0.0,
            max: MAX_RATE_PCT,
        });
    }
    Ok(value)
}

/// Term of a deposit, savings plan or loan in months.
///
/// # Errors
/// `OutOfRange` outside `1..=600`.
pub fn require_term_months(field: &str, months: u32) -> InputResult<u32> {
    require_in_range(field, months, 1, MAX_TERM_MONTHS)
}
