//! Investment Projection CLI
//!
//! Projects an investment year by year and prints the balances. With no
//! arguments it runs the default scenario: 5000 initial, 500 per year,
//! 20% return, 10 years.

use anyhow::{bail, Context};
use clap::Parser;
use investment_projection::{
    params::{load_params_json, load_scenarios},
    report::{self, OutputFormat},
    InvestmentParameters, ProjectionConfig, ScenarioRunner, ValidationMode,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "investment_projection")]
#[command(about = "Year-by-year compound investment projection")]
struct Args {
    /// Starting balance [default: 5000]
    #[arg(long, allow_negative_numbers = true)]
    initial_amount: Option<f64>,

    /// Amount added at the end of each year [default: 500]
    #[arg(long, allow_negative_numbers = true)]
    annual_contribution: Option<f64>,

    /// Fractional annual return, e.g. 0.2 for 20% [default: 0.2]
    #[arg(long, allow_negative_numbers = true)]
    expected_return: Option<f64>,

    /// Number of years to project [default: 10]
    #[arg(long, allow_negative_numbers = true)]
    duration: Option<i64>,

    /// JSON file with parameters; explicit flags override its values
    #[arg(long, conflicts_with = "scenarios")]
    params: Option<PathBuf>,

    /// CSV file of scenarios (Name,InitialAmount,AnnualContribution,ExpectedReturn,Duration)
    #[arg(long)]
    scenarios: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print end-of-projection totals after a text report
    #[arg(long)]
    summary: bool,

    /// Project even when parameters fail validation
    #[arg(long)]
    lenient: bool,
}

impl Args {
    fn parameters(&self) -> anyhow::Result<InvestmentParameters> {
        let mut params = match &self.params {
            Some(path) => load_params_json(path)
                .with_context(|| format!("Failed to load parameters from {}", path.display()))?,
            None => InvestmentParameters::default(),
        };

        if let Some(v) = self.initial_amount {
            params.initial_amount = v;
        }
        if let Some(v) = self.annual_contribution {
            params.annual_contribution = v;
        }
        if let Some(v) = self.expected_return {
            params.expected_return = v;
        }
        if let Some(v) = self.duration {
            params.duration_years = v;
        }

        Ok(params)
    }

    fn config(&self) -> ProjectionConfig {
        ProjectionConfig {
            validation: if self.lenient {
                ValidationMode::Lenient
            } else {
                ValidationMode::Enforce
            },
        }
    }
}

fn open_output(path: Option<&PathBuf>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Unable to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let runner = ScenarioRunner::new(args.config());
    let mut out = open_output(args.output.as_ref())?;

    if let Some(path) = &args.scenarios {
        let scenarios = load_scenarios(path)
            .with_context(|| format!("Failed to load scenarios from {}", path.display()))?;

        let outcomes = runner.run_batch(&scenarios);
        report::write_batch(&mut out, args.format, &outcomes)?;
        out.flush()?;

        let failed = outcomes.iter().filter(|(_, o)| o.is_err()).count();
        if failed > 0 {
            bail!("{} of {} scenarios failed validation", failed, outcomes.len());
        }
        return Ok(());
    }

    let params = args.parameters()?;
    log::debug!("Projecting {:?}", params);
    let outcome = runner.run(&params);

    match (&outcome, args.format) {
        // CSV has no failure row; report the error through the exit path instead
        (Err(_), OutputFormat::Csv) => {}
        _ => report::write_outcome(&mut out, args.format, &outcome)?,
    }

    if let (Ok(result), true, OutputFormat::Text) = (&outcome, args.summary, args.format) {
        writeln!(out)?;
        report::write_summary(&mut out, &result.summary())?;
    }
    out.flush()?;

    if let Err(err) = outcome {
        bail!(err);
    }
    Ok(())
}
