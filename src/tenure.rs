//! Length of service, annual leave entitlement and severance estimate.
//!
//! These are the simplified figures of a quick calculator, not a payroll
//! engine: leave ignores attendance conditions and the severance base is the
//! plain annual salary without bonuses or allowances.

use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_PER_YEAR, MONTHS_PER_YEAR};
use crate::input::{InputError, require_non_negative};
use crate::policy::{LeavePolicy, PolicyError};
use crate::range::{DateRange, Elapsed, RangeError};
use crate::CalendarDate;

#[derive(Debug, thiserror::Error)]
pub enum TenureError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Policy(#[from] PolicyError),
}

/// Yearly leave for `total_days` of service under the default policy.
///
/// ```
/// use civil_calc::tenure::annual_leave;
///
/// assert_eq!(annual_leave(364), 12);
/// assert_eq!(annual_leave(365), 15);
/// assert_eq!(annual_leave(365 * 3), 16);
/// ```
pub fn annual_leave(total_days: u32) -> u32 {
    leave_for(total_days, &LeavePolicy::default())
}

/// Yearly leave for `total_days` of service under `policy`.
///
/// # Errors
/// `PolicyError::Invalid` if the policy fails validation.
pub fn annual_leave_with(total_days: u32, policy: &LeavePolicy) -> Result<u32, PolicyError> {
    policy.validate()?;
    Ok(leave_for(total_days, policy))
}

// policy must be validated: accrual_days and bonus_interval_years are non-zero
fn leave_for(total_days: u32, policy: &LeavePolicy) -> u32 {
    let year = DAYS_PER_YEAR as u32;
    if total_days < year {
        return total_days / policy.accrual_days;
    }
    let extra_years = total_days / year - 1;
    (policy.base_days + extra_years / policy.bonus_interval_years).min(policy.max_days)
}

/// Severance estimate: one month of salary per year of service, prorated by day
/// and rounded to whole currency units.
///
/// # Errors
/// `InputError` for a negative or non-finite salary.
pub fn severance_pay(annual_salary: f64, total_days: u32) -> Result<f64, InputError> {
    let annual_salary = require_non_negative("annual_salary", annual_salary)?;
    let monthly = annual_salary / f64::from(MONTHS_PER_YEAR);
    Ok((monthly * (f64::from(total_days) / DAYS_PER_YEAR as f64)).round())
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkPeriodInput {
    /// First day of employment
    pub start:         CalendarDate,
    /// Reference or leaving date; service counts up to, not including, this day
    pub end:           CalendarDate,
    #[serde(default)]
    pub annual_salary: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkPeriod {
    pub range:              DateRange,
    pub elapsed:            Elapsed,
    pub total_days:         u32,
    pub annual_leave:       u32,
    /// At least one full year of service
    pub severance_eligible: bool,
    /// Present only when a salary was supplied
    pub severance:          Option<f64>,
}

impl WorkPeriod {
    /// # Errors
    /// `Range` when `end` precedes `start`, `Input` for an invalid salary.
    pub fn calculate(input: &WorkPeriodInput) -> Result<Self, TenureError> {
        Self::calculate_with(input, &LeavePolicy::default())
    }

    /// # Errors
    /// As [`calculate`](Self::calculate), plus `Policy` for an invalid policy.
    pub fn calculate_with(input: &WorkPeriodInput, policy: &LeavePolicy) -> Result<Self, TenureError> {
        let range = DateRange::new(input.start, input.end)?;
        let total_days = range.total_days();
        let annual_leave = annual_leave_with(total_days, policy)?;
        let severance = input
            .annual_salary
            .map(|salary| severance_pay(salary, total_days))
            .transpose()?;

        let period = Self {
            range,
            elapsed: range.elapsed(),
            total_days,
            annual_leave,
            severance_eligible: i64::from(total_days) >= DAYS_PER_YEAR,
            severance,
        };
        log::debug!("work period {range}: {} days, {annual_leave} leave days", period.total_days);
        Ok(period)
    }
}
