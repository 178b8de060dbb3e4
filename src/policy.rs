//! Adjustable statutory parameters.
//!
//! Defaults follow the constants in this crate (Korean Labor Standards Act
//! leave rules, 15.4% interest withholding). Callers that need other figures
//! can build a policy by hand or load one from JSON; missing fields keep their
//! defaults.
//!
//! ```
//! use civil_calc::policy::{LeavePolicy, TaxPolicy};
//!
//! let leave = LeavePolicy::from_json(r#"{ "max_days": 20 }"#).unwrap();
//! assert_eq!(leave.base_days, 15);
//! assert_eq!(leave.max_days, 20);
//!
//! assert_eq!(TaxPolicy::default().rate, 0.154);
//! ```

use serde::{Deserialize, Serialize};

use crate::consts::{
    LEAVE_ACCRUAL_DAYS, LEAVE_BASE_DAYS, LEAVE_BONUS_INTERVAL_YEARS, LEAVE_MAX_DAYS, PREFERENTIAL_TAX_RATE,
    STANDARD_TAX_RATE,
};

#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("Invalid policy document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid policy value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Annual leave accrual rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeavePolicy {
    /// Days granted once a full year has been served
    pub base_days:           u32,
    /// Upper limit on yearly leave
    pub max_days:            u32,
    /// Days of service per leave day during the first year
    pub accrual_days:        u32,
    /// Years of service per extra leave day after the first year
    pub bonus_interval_years: u32,
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            base_days:            LEAVE_BASE_DAYS,
            max_days:             LEAVE_MAX_DAYS,
            accrual_days:         LEAVE_ACCRUAL_DAYS,
            bonus_interval_years: LEAVE_BONUS_INTERVAL_YEARS,
        }
    }
}

impl LeavePolicy {
    /// Loads a policy from JSON and validates it.
    ///
    /// # Errors
    /// `Parse` for malformed JSON, `Invalid` for values [`validate`](Self::validate) rejects.
    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        let policy: Self = serde_json::from_str(json)?;
        policy.validate()?;
        if policy != Self::default() {
            log::warn!("using non-statutory leave policy: {policy:?}");
        }
        Ok(policy)
    }

    /// # Errors
    /// Zero divisors or a cap below the base entitlement.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.accrual_days == 0 {
            return Err(PolicyError::Invalid {
                field:  "accrual_days",
                reason: "must be at least 1".to_owned(),
            });
        }
        if self.bonus_interval_years == 0 {
            return Err(PolicyError::Invalid {
                field:  "bonus_interval_years",
                reason: "must be at least 1".to_owned(),
            });
        }
        if self.max_days < self.base_days {
            return Err(PolicyError::Invalid {
                field:  "max_days",
                reason: format!("{} is below base_days {}", self.max_days, self.base_days),
            });
        }
        Ok(())
    }
}

/// Withholding applied to interest income.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxPolicy {
    /// Fraction of gross interest withheld (0.154 = 15.4%)
    pub rate: f64,
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl TaxPolicy {
    pub const fn standard() -> Self {
        Self { rate: STANDARD_TAX_RATE }
    }

    pub const fn preferential() -> Self {
        Self { rate: PREFERENTIAL_TAX_RATE }
    }

    pub const fn tax_free() -> Self {
        Self { rate: 0.0 }
    }

    /// Loads a policy from JSON and validates it.
    ///
    /// # Errors
    /// `Parse` for malformed JSON, `Invalid` when the rate is outside `0..=1`.
    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        let policy: Self = serde_json::from_str(json)?;
        policy.validate()?;
        if !policy.is_statutory() {
            log::warn!("using non-statutory tax rate: {policy:?}");
        }
        Ok(policy)
    }

    /// Whether the rate is one of the standard, preferential or tax-free presets.
    pub fn is_statutory(&self) -> bool {
        [Self::standard(), Self::preferential(), Self::tax_free()].contains(self)
    }

    /// # Errors
    /// `Invalid` when the rate is not a fraction in `0..=1`.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if !(0.0..=1.0).contains(&self.rate) {
            return Err(PolicyError::Invalid {
                field:  "rate",
                reason: format!("{} is not a fraction between 0 and 1", self.rate),
            });
        }
        Ok(())
    }

    /// Tax withheld from `gross_interest`, rounded to whole currency units
    pub fn withholding(&self, gross_interest: f64) -> f64 {
        (gross_interest * self.rate).round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_defaults() {
        let policy = LeavePolicy::default();
        assert_eq!(policy.base_days, 15);
        assert_eq!(policy.max_days, 25);
        assert_eq!(policy.accrual_days, 30);
        assert_eq!(policy.bonus_interval_years, 2);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_leave_from_json_partial() {
        let policy = LeavePolicy::from_json(r#"{"base_days": 16, "max_days": 26}"#).unwrap();
        assert_eq!(policy.base_days, 16);
        assert_eq!(policy.max_days, 26);
        assert_eq!(policy.accrual_days, 30);

        let policy = LeavePolicy::from_json("{}").unwrap();
        assert_eq!(policy, LeavePolicy::default());
    }

    #[test]
    fn test_leave_from_json_rejects() {
        assert!(matches!(LeavePolicy::from_json("{"), Err(PolicyError::Parse(_))));
        assert!(matches!(
            LeavePolicy::from_json(r#"{"accrual_days": 0}"#),
            Err(PolicyError::Invalid { field: "accrual_days", .. })
        ));
        assert!(matches!(
            LeavePolicy::from_json(r#"{"max_days": 10}"#),
            Err(PolicyError::Invalid { field: "max_days", .. })
        ));
        assert!(matches!(
            LeavePolicy::from_json(r#"{"max_days": -1}"#),
            Err(PolicyError::Parse(_))
        ));
    }

    #[test]
    fn test_tax_presets() {
        assert_eq!(TaxPolicy::default(), TaxPolicy::standard());
        assert_eq!(TaxPolicy::preferential().rate, 0.095);
        assert_eq!(TaxPolicy::tax_free().withholding(12_345.0), 0.0);
        assert_eq!(TaxPolicy::standard().withholding(100_000.0), 15_400.0);
        assert_eq!(TaxPolicy::standard().withholding(1_000.0), 154.0);
        assert_eq!(TaxPolicy::standard().withholding(999.0), 154.0);
        assert_eq!(TaxPolicy::standard().withholding(990.0), 152.0);
    }

    #[test]
    fn test_tax_from_json() {
        assert_eq!(TaxPolicy::from_json(r#"{"rate": 0.0}"#).unwrap(), TaxPolicy::tax_free());
        assert!(matches!(
            TaxPolicy::from_json(r#"{"rate": 1.5}"#),
            Err(PolicyError::Invalid { field: "rate", .. })
        ));

        let custom = TaxPolicy::from_json(r#"{"rate": 0.2}"#).unwrap();
        assert_eq!(custom.rate, 0.2);
        assert!(!custom.is_statutory());
        assert_eq!(custom.withholding(10_000.0), 2_000.0);
    }

    #[test]
    fn test_tax_is_statutory() {
        assert!(TaxPolicy::standard().is_statutory());
        assert!(TaxPolicy::preferential().is_statutory());
        assert!(TaxPolicy::tax_free().is_statutory());
        assert!(TaxPolicy::from_json(r#"{"rate": 0.154}"#).unwrap().is_statutory());
        assert!(!TaxPolicy { rate: 0.1 }.is_statutory());
    }
}
