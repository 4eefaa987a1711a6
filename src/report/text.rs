//! Plain-text rendering, one block per year

use std::io::Write;

use crate::error::Result;
use crate::projection::{CalculationOutcome, ProjectionSummary};

pub const SEPARATOR: &str = "------------------------";

/// Round to the nearest whole number, halves away from zero
///
/// Returns the rounded value with negative zero folded to zero so small
/// negative amounts never render as "-0".
pub fn round_whole(value: f64) -> f64 {
    let rounded = value.round();
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Write the yearly blocks, or `Error: <message>` for a failed projection
pub fn write_text<W: Write>(writer: &mut W, outcome: &CalculationOutcome) -> Result<()> {
    let result = match outcome {
        Ok(result) => result,
        Err(err) => {
            writeln!(writer, "Error: {}", err)?;
            return Ok(());
        }
    };

    for row in &result.years {
        writeln!(writer, "{}", row.year)?;
        writeln!(writer, "Total: {:.0}", round_whole(row.total_amount))?;
        writeln!(writer, "Total Contributions: {:.0}", round_whole(row.total_contributions))?;
        writeln!(writer, "Total Interest Earned: {:.0}", round_whole(row.total_interest_earned))?;
        writeln!(writer, "{}", SEPARATOR)?;
    }

    Ok(())
}

/// Write the end-of-projection totals
pub fn write_summary<W: Write>(writer: &mut W, summary: &ProjectionSummary) -> Result<()> {
    writeln!(writer, "Summary ({} years):", summary.years)?;
    writeln!(writer, "  Final Amount: {:.0}", round_whole(summary.final_amount))?;
    writeln!(writer, "  Total Contributions: {:.0}", round_whole(summary.total_contributions))?;
    writeln!(writer, "  Total Interest Earned: {:.0}", round_whole(summary.total_interest_earned))?;
    Ok(())
}
