//! Loan repayment schedules.
//!
//! Interest for a period is the outstanding balance times the monthly rate.
//! Every amount is rounded to whole currency units as it is produced and the
//! final period repays whatever balance remains, so the principal column always
//! adds up to the loan and the schedule ends at a balance of exactly zero.
//!
//! ```
//! use civil_calc::loan::{LoanInput, RepaymentMethod};
//!
//! let schedule = LoanInput {
//!     principal:       12_000_000.0,
//!     annual_rate_pct: 5.0,
//!     months:          12,
//!     method:          RepaymentMethod::EqualPrincipal,
//! }
//! .schedule()
//! .unwrap();
//!
//! assert_eq!(schedule.installments[0].payment, 1_050_000.0);
//! assert_eq!(schedule.installments[11].balance, 0.0);
//! assert_eq!(schedule.total_interest, 325_000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::consts::MONTHS_PER_YEAR;
use crate::input::{InputResult, require_positive, require_rate_pct, require_term_months};
use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum RepaymentMethod {
    /// Same principal every period; payments shrink with the balance
    EqualPrincipal,
    /// Same total payment every period (annuity)
    #[default]
    EqualInstallment,
    /// Interest only, principal repaid at maturity
    Bullet,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal:       f64,
    pub annual_rate_pct: f64,
    pub months:          u32,
    #[serde(default)]
    pub method:          RepaymentMethod,
}

/// One row of a schedule. `balance` is what remains after this payment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Installment {
    pub period:    u32,
    pub payment:   f64,
    pub principal: f64,
    pub interest:  f64,
    pub balance:   f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanSchedule {
    pub method:         RepaymentMethod,
    pub installments:   Vec<Installment>,
    pub total_interest: f64,
    pub total_payment:  f64,
}

/// Fixed payment that clears `principal` in `months` periods at `rate` per period.
/// A zero rate spreads the principal evenly.
pub fn annuity_payment(principal: f64, rate: f64, months: u32) -> f64 {
    if rate == 0.0 {
        return principal / f64::from(months);
    }
    let growth = (1.0 + rate).powf(f64::from(months));
    principal * rate * growth / (growth - 1.0)
}

impl LoanInput {
    /// # Errors
    /// `InputError` for a non-positive principal, a rate outside 0-100% or a
    /// term outside 1-600 months.
    pub fn schedule(&self) -> InputResult<LoanSchedule> {
        let principal = require_positive("principal", self.principal)?;
        let rate = require_rate_pct("annual_rate_pct", self.annual_rate_pct)? / 100.0 / f64::from(MONTHS_PER_YEAR);
        let months = require_term_months("months", self.months)?;

        // principal repaid per period before the final one
        let scheduled = match self.method {
            RepaymentMethod::EqualPrincipal => Some((principal / f64::from(months)).round()),
            RepaymentMethod::EqualInstallment => None,
            RepaymentMethod::Bullet => Some(0.0),
        };
        let payment = annuity_payment(principal, rate, months).round();

        let mut balance = principal;
        let mut installments = Vec::with_capacity(months as usize);
        for period in 1..=months {
            let interest = (balance * rate).round();
            let repaid = if period == months {
                balance
            } else {
                scheduled.unwrap_or(payment - interest).clamp(0.0, balance)
            };
            balance = if period == months { 0.0 } else { balance - repaid };

            installments.push(Installment {
                period,
                payment: repaid + interest,
                principal: repaid,
                interest,
                balance,
            });
        }

        let total_interest = installments.iter().map(|i| i.interest).sum();
        let total_payment = installments.iter().map(|i| i.payment).sum();
        log::debug!(
            "{} loan of {principal} over {months} months: interest {total_interest}",
            self.method
        );

        Ok(LoanSchedule {
            method: self.method,
            installments,
            total_interest,
            total_payment,
        })
    }
}
