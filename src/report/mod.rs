//! Rendering of projection outcomes as text, CSV or JSON

mod text;
mod tabular;
mod json;

pub use text::{write_text, write_summary, round_whole, SEPARATOR};
pub use tabular::{write_csv, write_batch_csv};
pub use json::{write_json, write_batch_json};

use std::io::Write;

use crate::error::Result;
use crate::projection::CalculationOutcome;

/// Output format for rendered results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

/// Render one outcome in the requested format
pub fn write_outcome<W: Write>(writer: &mut W, format: OutputFormat, outcome: &CalculationOutcome) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(writer, outcome),
        OutputFormat::Csv => write_csv(writer, outcome),
        OutputFormat::Json => write_json(writer, outcome),
    }
}

/// Render a batch of named outcomes in the requested format
pub fn write_batch<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    outcomes: &[(String, CalculationOutcome)],
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (name, outcome) in outcomes {
                writeln!(writer, "== {} ==", name)?;
                write_text(writer, outcome)?;
            }
            Ok(())
        }
        OutputFormat::Csv => write_batch_csv(writer, outcomes),
        OutputFormat::Json => write_batch_json(writer, outcomes),
    }
}

/// Print the text rendering to stdout
pub fn print_results(outcome: &CalculationOutcome) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_text(&mut handle, outcome)
}
