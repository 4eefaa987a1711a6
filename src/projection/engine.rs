//! Core projection engine for yearly compound growth with contributions

use crate::params::InvestmentParameters;
use super::state::ProjectionState;
use super::results::{CalculationOutcome, ProjectionResult, YearResult};

/// How the engine treats parameters that fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Stop at the first failing check and return it
    #[default]
    Enforce,
    /// Log the violation and project anyway
    Lenient,
}

/// Configuration for a projection run
#[derive(Debug, Clone, Default)]
pub struct ProjectionConfig {
    pub validation: ValidationMode,
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the projection for one parameter set
    pub fn project(&self, params: &InvestmentParameters) -> CalculationOutcome {
        if let Err(err) = params.validate() {
            match self.config.validation {
                ValidationMode::Enforce => {
                    log::debug!("Rejected parameters {:?}: {}", params, err);
                    return Err(err);
                }
                ValidationMode::Lenient => {
                    log::warn!("Projecting despite invalid parameters: {}", err);
                }
            }
        }

        let mut result = ProjectionResult::new(*params);
        let mut state = ProjectionState::from_params(params);

        for _year in 1..=params.years() {
            let row = self.calculate_year(params, &mut state);
            result.add_year(row);
        }

        log::debug!(
            "Projected {} years, final balance {:.2}",
            result.years.len(),
            state.total
        );
        Ok(result)
    }

    /// Advance the state by one year and record it
    ///
    /// Interest is measured after growth but before this year's contribution
    /// lands, so it is computed against the prior year's cumulative contributions.
    fn calculate_year(&self, params: &InvestmentParameters, state: &mut ProjectionState) -> YearResult {
        state.year += 1;

        state.total *= 1.0 + params.expected_return;
        let total_interest_earned = state.total - state.principal();

        state.total_contributions += params.annual_contribution;
        state.total += params.annual_contribution;

        YearResult {
            year: state.year,
            total_amount: state.total,
            total_contributions: state.total_contributions,
            total_interest_earned,
        }
    }
}

/// Project with validation enforced
pub fn calculate_investment(params: &InvestmentParameters) -> CalculationOutcome {
    ProjectionEngine::default().project(params)
}
