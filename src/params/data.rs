//! Investment parameter data structures

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Inputs for a single projection
///
/// Constructed by the caller and consumed once by the engine. Every field is
/// optional when deserialized; missing fields take the default scenario values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestmentParameters {
    /// Starting balance
    pub initial_amount: f64,

    /// Amount added at the end of every year, after growth
    pub annual_contribution: f64,

    /// Fractional annual growth rate (0.20 = 20%)
    pub expected_return: f64,

    /// Number of years to project
    ///
    /// Signed so that caller-supplied negative durations can be reported
    /// rather than wrapped or clamped.
    pub duration_years: i64,
}

impl InvestmentParameters {
    pub fn new(
        initial_amount: f64,
        annual_contribution: f64,
        expected_return: f64,
        duration_years: i64,
    ) -> Self {
        Self {
            initial_amount,
            annual_contribution,
            expected_return,
            duration_years,
        }
    }

    /// Check inputs in declaration order: initial amount, duration, expected return
    ///
    /// NaN fails the same check as a negative value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.initial_amount >= 0.0) {
            return Err(ValidationError::NegativeInitialAmount);
        }
        if self.duration_years < 0 {
            return Err(ValidationError::NegativeDuration);
        }
        if !(self.expected_return >= 0.0) {
            return Err(ValidationError::NegativeExpectedReturn);
        }
        Ok(())
    }

    /// Number of years the engine will emit (negative durations emit none)
    pub fn years(&self) -> u32 {
        u32::try_from(self.duration_years.max(0)).unwrap_or(u32::MAX)
    }
}

impl Default for InvestmentParameters {
    fn default() -> Self {
        Self {
            initial_amount: 5000.0,
            annual_contribution: 500.0,
            expected_return: 0.20,
            duration_years: 10,
        }
    }
}

/// A parameter set with a label, as loaded from a scenario table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedScenario {
    pub name: String,
    pub params: InvestmentParameters,
}

impl NamedScenario {
    pub fn new(name: impl Into<String>, params: InvestmentParameters) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario() {
        let params = InvestmentParameters::default();
        assert_eq!(params.initial_amount, 5000.0);
        assert_eq!(params.annual_contribution, 500.0);
        assert_eq!(params.expected_return, 0.20);
        assert_eq!(params.duration_years, 10);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validation_order() {
        // All three invalid: initial amount is reported first
        let params = InvestmentParameters::new(-1.0, 0.0, -0.1, -1);
        assert_eq!(params.validate(), Err(ValidationError::NegativeInitialAmount));

        let params = InvestmentParameters::new(0.0, 0.0, -0.1, -1);
        assert_eq!(params.validate(), Err(ValidationError::NegativeDuration));

        let params = InvestmentParameters::new(0.0, 0.0, -0.1, 0);
        assert_eq!(params.validate(), Err(ValidationError::NegativeExpectedReturn));
    }

    #[test]
    fn test_nan_is_rejected() {
        let params = InvestmentParameters::new(f64::NAN, 0.0, 0.05, 5);
        assert_eq!(params.validate(), Err(ValidationError::NegativeInitialAmount));

        let params = InvestmentParameters::new(100.0, 0.0, f64::NAN, 5);
        assert_eq!(params.validate(), Err(ValidationError::NegativeExpectedReturn));
    }

    #[test]
    fn test_negative_contribution_is_accepted() {
        let params = InvestmentParameters::new(1000.0, -100.0, 0.05, 5);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_years_clamps_negative_duration() {
        assert_eq!(InvestmentParameters::new(0.0, 0.0, 0.0, -3).years(), 0);
        assert_eq!(InvestmentParameters::new(0.0, 0.0, 0.0, 7).years(), 7);
    }
}
