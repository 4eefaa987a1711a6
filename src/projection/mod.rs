//! Projection engine for yearly investment growth

mod state;
mod engine;
mod results;

pub use state::ProjectionState;
pub use engine::{ProjectionEngine, ProjectionConfig, ValidationMode, calculate_investment};
pub use results::{YearResult, ProjectionResult, ProjectionSummary, CalculationOutcome};
