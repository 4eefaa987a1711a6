//! Investment parameters and scenario loading

mod data;
pub mod loader;

pub use data::{InvestmentParameters, NamedScenario};
pub use loader::{load_params_json, parse_params_json, load_scenarios, load_scenarios_from_reader};
