//! Interest on lump-sum deposits and monthly installment savings.
//!
//! Rates are annual and given in percent. Gross interest and withholding tax
//! are rounded to whole currency units; the payout is principal plus net interest.
//!
//! ```
//! use civil_calc::deposit::{DepositInput, InterestMethod};
//!
//! let input = DepositInput {
//!     principal:       10_000_000.0,
//!     annual_rate_pct: 3.5,
//!     months:          12,
//!     method:          InterestMethod::Simple,
//! };
//! let estimate = input.estimate().unwrap();
//! assert_eq!(estimate.gross_interest, 350_000.0);
//! assert_eq!(estimate.tax, 53_900.0);
//! assert_eq!(estimate.payout, 10_296_100.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::consts::MONTHS_PER_YEAR;
use crate::input::{InputError, require_positive, require_rate_pct, require_term_months};
use crate::policy::{PolicyError, TaxPolicy};
use crate::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum DepositError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Policy(#[from] PolicyError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum InterestMethod {
    #[default]
    Simple,
    /// Interest credited monthly and earning interest itself
    MonthlyCompound,
}

/// A lump sum placed for a fixed term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepositInput {
    pub principal:       f64,
    pub annual_rate_pct: f64,
    pub months:          u32,
    #[serde(default)]
    pub method:          InterestMethod,
}

/// The same amount paid in at the start of every month of the term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsInput {
    pub monthly_deposit: f64,
    pub annual_rate_pct: f64,
    pub months:          u32,
    #[serde(default)]
    pub method:          InterestMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InterestEstimate {
    /// Everything paid in over the term
    pub principal_total: f64,
    pub gross_interest:  f64,
    pub tax:             f64,
    pub net_interest:    f64,
    pub payout:          f64,
}

impl InterestEstimate {
    fn new(principal_total: f64, raw_interest: f64, tax: &TaxPolicy) -> Self {
        let gross_interest = raw_interest.round();
        let tax = tax.withholding(gross_interest);
        let net_interest = gross_interest - tax;
        Self {
            principal_total,
            gross_interest,
            tax,
            net_interest,
            payout: principal_total + net_interest,
        }
    }
}

fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 100.0 / f64::from(MONTHS_PER_YEAR)
}

/// Interest earned by `amount` over `months` months.
fn interest_over(amount: f64, rate: f64, months: u32, method: InterestMethod) -> f64 {
    match method {
        InterestMethod::Simple => amount * rate * f64::from(months),
        InterestMethod::MonthlyCompound => amount * ((1.0 + rate).powf(f64::from(months)) - 1.0),
    }
}

impl DepositInput {
    /// # Errors
    /// See [`estimate_with`](Self::estimate_with).
    pub fn estimate(&self) -> Result<InterestEstimate, DepositError> {
        self.estimate_with(&TaxPolicy::default())
    }

    /// # Errors
    /// `Input` for a non-positive principal, a rate outside 0-100% or a term
    /// outside 1-600 months; `Policy` for an invalid tax rate.
    pub fn estimate_with(&self, tax: &TaxPolicy) -> Result<InterestEstimate, DepositError> {
        let principal = require_positive("principal", self.principal)?;
        let rate = monthly_rate(require_rate_pct("annual_rate_pct", self.annual_rate_pct)?);
        let months = require_term_months("months", self.months)?;
        tax.validate()?;

        let estimate = InterestEstimate::new(principal, interest_over(principal, rate, months, self.method), tax);
        log::debug!("deposit {:?}: {estimate:?}", self);
        Ok(estimate)
    }
}

impl SavingsInput {
    /// # Errors
    /// See [`estimate_with`](Self::estimate_with).
    pub fn estimate(&self) -> Result<InterestEstimate, DepositError> {
        self.estimate_with(&TaxPolicy::default())
    }

    /// The installment paid in month `i` (1-based) earns interest for the
    /// remaining `months - i + 1` months.
    ///
    /// # Errors
    /// As [`DepositInput::estimate_with`], with `monthly_deposit` in place of the principal.
    pub fn estimate_with(&self, tax: &TaxPolicy) -> Result<InterestEstimate, DepositError> {
        let deposit = require_positive("monthly_deposit", self.monthly_deposit)?;
        let rate = monthly_rate(require_rate_pct("annual_rate_pct", self.annual_rate_pct)?);
        let months = require_term_months("months", self.months)?;
        tax.validate()?;

        let interest: f64 = (1..=months)
            .map(|remaining| interest_over(deposit, rate, remaining, self.method))
            .sum();
        let estimate = InterestEstimate::new(deposit * f64::from(months), interest, tax);
        log::debug!("savings {:?}: {estimate:?}", self);
        Ok(estimate)
    }
}
