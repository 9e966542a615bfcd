//! RocLab CLI — stream prices through the ROC oscillator.
//!
//! Commands:
//! - `stream` — feed every price through `advance` and print one reading per row
//! - `probe` — load a price history, then print what hypothetical next prices
//!   would read without committing them

mod input;
mod logging;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use tracing::info;

use roclab_core::{as_percent, RocCalculator, RocConfig};

#[derive(Parser)]
#[command(
    name = "roclab",
    about = "RocLab CLI — streaming rate-of-change momentum oscillator"
)]
struct Cli {
    /// Log level used when RUST_LOG is unset (error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// Price file (CSV). Reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Lookback period. Defaults to 5.
    #[arg(long)]
    period: Option<usize>,

    /// Path to a TOML config file with a `period` key.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name of the price column in a CSV with a header row.
    #[arg(long, default_value = "close")]
    column: String,

    /// Input has no header row; the first field of each line is the price.
    #[arg(long, default_value_t = false)]
    no_header: bool,

    /// Print readings as percent instead of fractions.
    #[arg(long, default_value_t = false)]
    percent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Feed each price through the oscillator and print every reading.
    Stream {
        #[command(flatten)]
        source: SourceArgs,

        /// Emit one JSON object per line instead of tab-separated text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print what each hypothetical next price would read, without committing it.
    Probe {
        #[command(flatten)]
        source: SourceArgs,

        /// Hypothetical next prices to evaluate against the loaded history.
        #[arg(long = "next", required = true, num_args = 1.., allow_negative_numbers = true)]
        next: Vec<f64>,
    },
}

/// One output row of `stream --json`. Non-finite readings serialize as null.
#[derive(Debug, Serialize)]
struct Reading {
    index: usize,
    value: f64,
    roc: Option<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level)?;

    match cli.command {
        Commands::Stream { source, json } => run_stream(&source, json),
        Commands::Probe { source, next } => run_probe(&source, &next),
    }
}

fn build_calculator(source: &SourceArgs) -> Result<RocCalculator> {
    if source.period.is_some() && source.config.is_some() {
        bail!("--period and --config are mutually exclusive");
    }

    let config = match (&source.config, source.period) {
        (Some(path), _) => RocConfig::load(path)?,
        (None, Some(period)) => RocConfig::new(period),
        (None, None) => RocConfig::default(),
    };

    Ok(config.build()?)
}

fn scale(reading: Option<f64>, percent: bool) -> Option<f64> {
    if percent {
        reading.map(as_percent)
    } else {
        reading
    }
}

fn format_reading(reading: Option<f64>) -> String {
    match reading {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

fn run_stream(source: &SourceArgs, json: bool) -> Result<()> {
    let mut roc = build_calculator(source)?;
    let reader = input::open_input(source.input.as_deref())?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let count = write_stream(&mut roc, reader, source, json, &mut out)?;
    out.flush()?;

    info!(count, period = roc.period(), "stream complete");
    Ok(())
}

/// Advance `roc` through every price in `reader`, writing one line per price.
fn write_stream<R: Read, W: Write>(
    roc: &mut RocCalculator,
    reader: R,
    source: &SourceArgs,
    json: bool,
    out: &mut W,
) -> Result<usize> {
    let mut index = 0;
    input::for_each_price(reader, &source.column, !source.no_header, |value| {
        let reading = scale(roc.advance(value), source.percent);
        if json {
            let row = Reading {
                index,
                value,
                roc: reading,
            };
            serde_json::to_writer(&mut *out, &row)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{index}\t{value}\t{}", format_reading(reading))?;
        }
        index += 1;
        Ok(())
    })
}

fn run_probe(source: &SourceArgs, next: &[f64]) -> Result<()> {
    let mut roc = build_calculator(source)?;
    let reader = input::open_input(source.input.as_deref())?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let count = write_what_if(&mut roc, reader, source, next, &mut out)?;
    out.flush()?;

    info!(count, period = roc.period(), warm = roc.is_warm(), "what-if complete");
    Ok(())
}

/// Load the history in `reader`, then write the reading each `next` value
/// would produce. None of the `next` values are committed.
fn write_what_if<R: Read, W: Write>(
    roc: &mut RocCalculator,
    reader: R,
    source: &SourceArgs,
    next: &[f64],
    out: &mut W,
) -> Result<usize> {
    let count = input::for_each_price(reader, &source.column, !source.no_header, |value| {
        roc.advance(value);
        Ok(())
    })?;

    for &candidate in next {
        let reading = scale(roc.probe(candidate), source.percent);
        writeln!(out, "{candidate}\t{}", format_reading(reading))?;
    }

    Ok(count)
}
