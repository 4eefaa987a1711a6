//! Investment Projection - yearly compound growth with annual contributions
//!
//! This library provides:
//! - Validated investment parameters, loadable from JSON or CSV scenario tables
//! - A year-by-year projection engine
//! - Text, CSV and JSON reporting
//! - Parallel batch runs over many scenarios

pub mod error;
pub mod params;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::{Error, ValidationError};
pub use params::{InvestmentParameters, NamedScenario};
pub use projection::{
    ProjectionEngine, ProjectionConfig, ValidationMode, YearResult, ProjectionResult,
    CalculationOutcome, calculate_investment,
};
pub use report::{OutputFormat, print_results};
pub use scenario::ScenarioRunner;
