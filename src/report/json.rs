//! JSON rendering mirroring the tagged success/failure outcome

use serde::Serialize;
use std::io::Write;

use crate::error::Result;
use crate::projection::{CalculationOutcome, YearResult};

#[derive(Debug, Serialize)]
struct OutcomeJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a [YearResult]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> OutcomeJson<'a> {
    fn new(name: Option<&'a str>, outcome: &'a CalculationOutcome) -> Self {
        match outcome {
            Ok(result) => Self {
                name,
                success: true,
                data: Some(result.years.as_slice()),
                error: None,
            },
            Err(err) => Self {
                name,
                success: false,
                data: None,
                error: Some(err.to_string()),
            },
        }
    }
}

/// Write `{"success":true,"data":[...]}` or `{"success":false,"error":"..."}`
pub fn write_json<W: Write>(writer: &mut W, outcome: &CalculationOutcome) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &OutcomeJson::new(None, outcome))?;
    writeln!(writer)?;
    Ok(())
}

/// Write an array of named outcomes
pub fn write_batch_json<W: Write>(writer: &mut W, outcomes: &[(String, CalculationOutcome)]) -> Result<()> {
    let entries: Vec<OutcomeJson<'_>> = outcomes
        .iter()
        .map(|(name, outcome)| OutcomeJson::new(Some(name.as_str()), outcome))
        .collect();
    serde_json::to_writer_pretty(&mut *writer, &entries)?;
    writeln!(writer)?;
    Ok(())
}
