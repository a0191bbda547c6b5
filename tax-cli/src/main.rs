use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use tax_cli::{batch, console, logging, report, utils};
use tax_core::{FilingStatus, breakdown};
use tracing::{debug, info};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Progressive federal income tax calculator.
///
/// With no arguments, prompts for a filing status and taxable income.
/// Filing status codes: 0 single, 1 married filing jointly or qualified
/// widow(er), 2 married filing separately, 3 head of household.
#[derive(Debug, Parser)]
#[command(name = "tax-calc", version, about)]
struct Cli {
    /// Filing status code (0-3). Requires --income.
    #[arg(short, long, requires = "income", allow_negative_numbers = true)]
    status: Option<i32>,

    /// Taxable income, e.g. 52000 or "$52,000.00". Requires --status.
    #[arg(
        short,
        long,
        requires = "status",
        allow_negative_numbers = true,
        value_parser = utils::parse_decimal
    )]
    income: Option<Decimal>,

    /// Also list the tax charged in each bracket.
    #[arg(short, long, default_value_t = false)]
    breakdown: bool,

    /// CSV file with `status,income` rows; results are written to stdout.
    #[arg(long, conflicts_with_all = ["status", "income", "breakdown"])]
    batch: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    logging::init_tracing();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "run failed");
            if cli.batch.is_some() {
                eprintln!("Error: {err:#}");
            } else {
                eprint!("{}", console::render_failure(&err));
            }
            // Same code clap uses for bad arguments.
            if console::is_invalid_argument(&err) {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(path) = &cli.batch {
        let rows = batch::run_batch_file(path, &mut out)
            .with_context(|| format!("Failed to process batch file: {}", path.display()))?;
        info!(rows, "processed {}", path.display());
        return Ok(());
    }

    match (cli.status, cli.income) {
        (Some(code), Some(income)) => {
            let status = FilingStatus::try_from(code)?;
            let result = breakdown(status, income)?;
            write!(out, "{}", report::render_report(&result, cli.breakdown))?;
        }
        _ => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            console::run_session(&mut input, &mut out, cli.breakdown)?;
        }
    }

    out.flush()?;
    Ok(())
}
