//! Output structures for projections

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::params::InvestmentParameters;

/// Balances at the end of one projected year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearResult {
    /// Year number, starting at 1
    pub year: u32,

    /// Balance after growth and this year's contribution
    pub total_amount: f64,

    /// Cumulative contributions including this year's
    pub total_contributions: f64,

    /// Cumulative interest, measured after growth but before this year's contribution
    pub total_interest_earned: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Inputs the projection was run with
    pub parameters: InvestmentParameters,

    /// One row per year, ascending
    pub years: Vec<YearResult>,
}

/// Either the full yearly sequence or the first validation failure
pub type CalculationOutcome = Result<ProjectionResult, ValidationError>;

impl ProjectionResult {
    pub fn new(parameters: InvestmentParameters) -> Self {
        Self {
            parameters,
            years: Vec::new(),
        }
    }

    /// Add a year row
    pub fn add_year(&mut self, row: YearResult) {
        self.years.push(row);
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        match self.years.last() {
            Some(last) => ProjectionSummary {
                years: self.years.len() as u32,
                final_amount: last.total_amount,
                total_contributions: last.total_contributions,
                total_interest_earned: last.total_interest_earned,
            },
            None => ProjectionSummary {
                years: 0,
                final_amount: self.parameters.initial_amount,
                total_contributions: 0.0,
                total_interest_earned: 0.0,
            },
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years: u32,
    pub final_amount: f64,
    pub total_contributions: f64,
    pub total_interest_earned: f64,
}
