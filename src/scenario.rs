//! Scenario runner for batch projections
//!
//! Holds one engine configuration and applies it to many parameter sets.
//! Projections share no state, so batches run in parallel and come back in
//! input order.

use rayon::prelude::*;

use crate::params::{InvestmentParameters, NamedScenario};
use crate::projection::{CalculationOutcome, ProjectionConfig, ProjectionEngine};

/// Runner for single and batch projections sharing one configuration
///
/// # Example
/// ```
/// use investment_projection::{InvestmentParameters, NamedScenario, ScenarioRunner};
///
/// let runner = ScenarioRunner::default();
/// let scenarios: Vec<_> = [0.03, 0.05, 0.07]
///     .iter()
///     .map(|&rate| {
///         NamedScenario::new(format!("{rate}"), InvestmentParameters::new(1000.0, 100.0, rate, 20))
///     })
///     .collect();
/// let outcomes = runner.run_batch(&scenarios);
/// assert_eq!(outcomes.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    pub fn new(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    /// Run a single projection
    pub fn run(&self, params: &InvestmentParameters) -> CalculationOutcome {
        self.engine.project(params)
    }

    /// Run every scenario, pairing each outcome with its scenario name
    pub fn run_batch(&self, scenarios: &[NamedScenario]) -> Vec<(String, CalculationOutcome)> {
        log::info!("Running {} scenarios", scenarios.len());

        let outcomes: Vec<(String, CalculationOutcome)> = scenarios
            .par_iter()
            .map(|scenario| (scenario.name.clone(), self.engine.project(&scenario.params)))
            .collect();

        let failed = outcomes.iter().filter(|(_, outcome)| outcome.is_err()).count();
        if failed > 0 {
            log::warn!("{} of {} scenarios failed validation", failed, outcomes.len());
        }

        outcomes
    }

    pub fn config(&self) -> &ProjectionConfig {
        self.engine.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::projection::ValidationMode;

    fn scenarios() -> Vec<NamedScenario> {
        [0.03, 0.05, 0.07]
            .iter()
            .map(|&rate| NamedScenario::new(format!("r{}", rate), InvestmentParameters::new(10_000.0, 1_000.0, rate, 30)))
            .collect()
    }

    #[test]
    fn test_batch_preserves_order() {
        let runner = ScenarioRunner::default();
        let outcomes = runner.run_batch(&scenarios());

        let names: Vec<&str> = outcomes.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["r0.03", "r0.05", "r0.07"]);

        // Higher return should end with a higher balance
        let finals: Vec<f64> = outcomes
            .iter()
            .map(|(_, o)| o.as_ref().unwrap().summary().final_amount)
            .collect();
        assert!(finals[0] < finals[1] && finals[1] < finals[2]);
    }

    #[test]
    fn test_batch_matches_single_runs() {
        let runner = ScenarioRunner::default();
        let scenarios = scenarios();
        let outcomes = runner.run_batch(&scenarios);

        for (scenario, (_, outcome)) in scenarios.iter().zip(&outcomes) {
            assert_eq!(&runner.run(&scenario.params), outcome);
        }
    }

    #[test]
    fn test_batch_isolates_failures() {
        let runner = ScenarioRunner::default();
        let batch = vec![
            NamedScenario::new("ok", InvestmentParameters::default()),
            NamedScenario::new("bad", InvestmentParameters::new(100.0, 0.0, -0.5, 5)),
        ];
        let outcomes = runner.run_batch(&batch);

        assert!(outcomes[0].1.is_ok());
        assert_eq!(outcomes[1].1, Err(ValidationError::NegativeExpectedReturn));
    }

    #[test]
    fn test_lenient_runner() {
        let runner = ScenarioRunner::new(ProjectionConfig {
            validation: ValidationMode::Lenient,
        });
        assert_eq!(runner.config().validation, ValidationMode::Lenient);

        let outcome = runner.run(&InvestmentParameters::new(100.0, 0.0, -0.5, 2));
        assert_eq!(outcome.unwrap().years.len(), 2);
    }
}
