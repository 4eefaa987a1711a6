//! Load investment parameters from JSON files and scenario tables from CSV

use super::{InvestmentParameters, NamedScenario};
use crate::error::Result;
use csv::{ReaderBuilder, Trim};
use std::fs;
use std::path::Path;

/// Raw CSV row matching the scenario table columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name", default)]
    name: Option<String>,
    #[serde(rename = "InitialAmount")]
    initial_amount: f64,
    #[serde(rename = "AnnualContribution")]
    annual_contribution: f64,
    #[serde(rename = "ExpectedReturn")]
    expected_return: f64,
    #[serde(rename = "Duration")]
    duration: i64,
}

impl CsvRow {
    fn into_scenario(self, row_number: usize) -> NamedScenario {
        let name = self
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("scenario-{}", row_number));

        NamedScenario::new(
            name,
            InvestmentParameters::new(
                self.initial_amount,
                self.annual_contribution,
                self.expected_return,
                self.duration,
            ),
        )
    }
}

/// Parse one parameter set from a JSON object; missing fields use defaults
pub fn parse_params_json(json: &str) -> Result<InvestmentParameters> {
    Ok(serde_json::from_str(json)?)
}

/// Load one parameter set from a JSON file
pub fn load_params_json<P: AsRef<Path>>(path: P) -> Result<InvestmentParameters> {
    let contents = fs::read_to_string(path)?;
    parse_params_json(&contents)
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedScenario>> {
    let file = fs::File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<NamedScenario>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut scenarios = Vec::new();

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario(idx + 1));
    }

    log::debug!("Loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_scenarios_from_reader() {
        let data = "\
Name,InitialAmount,AnnualContribution,ExpectedReturn,Duration
base,5000,500,0.20,10
,1000,0,0.05,3
";
        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 2);

        assert_eq!(scenarios[0].name, "base");
        assert_eq!(scenarios[0].params, InvestmentParameters::default());

        // Blank name falls back to the row number
        assert_eq!(scenarios[1].name, "scenario-2");
        assert_eq!(scenarios[1].params.duration_years, 3);
    }

    #[test]
    fn test_name_column_is_optional() {
        let data = "InitialAmount,AnnualContribution,ExpectedReturn,Duration\n100, 10, 0.1, 2\n";
        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();
        assert_eq!(scenarios[0].name, "scenario-1");
        assert_eq!(scenarios[0].params.initial_amount, 100.0);
    }

    #[test]
    fn test_bad_row_is_an_error() {
        let data = "InitialAmount,AnnualContribution,ExpectedReturn,Duration\nlots,10,0.1,2\n";
        assert!(load_scenarios_from_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn test_parse_params_json_defaults_missing_fields() {
        let params = parse_params_json(r#"{"initial_amount": 250.0, "duration_years": 4}"#).unwrap();
        assert_eq!(params.initial_amount, 250.0);
        assert_eq!(params.duration_years, 4);
        assert_eq!(params.annual_contribution, 500.0);
        assert_eq!(params.expected_return, 0.20);
    }

    #[test]
    fn test_parse_params_json_rejects_garbage() {
        assert!(parse_params_json("not json").is_err());
    }
}
