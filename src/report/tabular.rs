//! CSV rendering of yearly results

use std::io::Write;

use crate::error::{Error, Result};
use crate::projection::{CalculationOutcome, YearResult};

const HEADER: [&str; 4] = ["Year", "TotalAmount", "TotalContributions", "TotalInterestEarned"];

fn year_fields(row: &YearResult) -> [String; 4] {
    [
        row.year.to_string(),
        format!("{:.2}", row.total_amount),
        format!("{:.2}", row.total_contributions),
        format!("{:.2}", row.total_interest_earned),
    ]
}

/// Write one projection as a CSV table
///
/// A failed projection has no rows to show, so it is returned as an error.
pub fn write_csv<W: Write>(writer: W, outcome: &CalculationOutcome) -> Result<()> {
    let result = outcome.as_ref().map_err(|err| Error::Validation(err.clone()))?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;
    for row in &result.years {
        csv_writer.write_record(year_fields(row))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write many projections into a single table keyed by scenario name
///
/// Failed scenarios are logged and left out of the table.
pub fn write_batch_csv<W: Write>(writer: W, outcomes: &[(String, CalculationOutcome)]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["Scenario"];
    header.extend(HEADER);
    csv_writer.write_record(&header)?;

    for (name, outcome) in outcomes {
        match outcome {
            Ok(result) => {
                for row in &result.years {
                    let fields = year_fields(row);
                    csv_writer.write_record(std::iter::once(name.as_str()).chain(fields.iter().map(String::as_str)))?;
                }
            }
            Err(err) => log::warn!("Scenario {} omitted from CSV: {}", name, err),
        }
    }

    csv_writer.flush()?;
    Ok(())
}
