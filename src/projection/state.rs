//! Running balances carried from one projected year to the next

use crate::params::InvestmentParameters;

/// State of the investment at the end of the most recently projected year
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Last projected year (0 before the first year)
    pub year: u32,

    /// Current balance
    pub total: f64,

    /// Contributions added so far, excluding the initial amount
    pub total_contributions: f64,

    /// Starting balance, subtracted out when measuring interest
    pub initial_amount: f64,
}

impl ProjectionState {
    /// Initialize state at the start of the projection
    pub fn from_params(params: &InvestmentParameters) -> Self {
        Self {
            year: 0,
            total: params.initial_amount,
            total_contributions: 0.0,
            initial_amount: params.initial_amount,
        }
    }

    /// Principal paid in so far: initial amount plus contributions
    pub fn principal(&self) -> f64 {
        self.initial_amount + self.total_contributions
    }
}
