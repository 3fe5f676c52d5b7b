//! Spanwise command-line front end

mod args;
mod constants;
mod output;

use std::fmt;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use serde_json::Value;
use spanwise::{HumanizeError, humanize_value, normalize_unit, to_milliseconds};

use args::Args;
use constants::*;
use output::{Format, render};

/// Errors surfaced by the CLI
#[derive(Debug)]
enum CliError {
    /// The duration or unit was rejected
    Humanize(HumanizeError),
    /// The result could not be serialized
    Json(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Humanize(e) => write!(f, "{} ({})", e, e.kind()),
            CliError::Json(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {}

impl From<HumanizeError> for CliError {
    fn from(err: HumanizeError) -> Self {
        CliError::Humanize(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Json(err)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(args.debug);

    match run(&args) {
        Ok(out) => {
            println!("{}", out);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}{}", ERR_PREFIX, e);
            ExitCode::from(EXIT_HUMANIZE_ERROR)
        }
    }
}

/// Initialize logging, honoring `RUST_LOG` unless `--debug` is given
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

/// Parse the duration argument as JSON so non-numbers reach the humanizer
///
/// Anything that is not valid JSON is passed through as a string.
fn parse_duration(raw: &str) -> Value {
    serde_json::from_str(raw.trim()).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn run(args: &Args) -> Result<String, CliError> {
    let duration = parse_duration(&args.duration);
    let unit = Value::String(args.unit.clone());
    let as_object = Value::Bool(args.object);

    let result = humanize_value(&duration, Some(&unit), Some(&as_object))?;

    if let (Some(value), Ok(unit)) = (duration.as_f64(), normalize_unit(&args.unit)) {
        log::debug!("{}{}", MSG_UNIT_RESOLVED, unit);
        log::debug!("{}{}", MSG_TOTAL_MILLISECONDS, to_milliseconds(value, unit));
    }

    Ok(render(&result, Format::from_flag(args.json))?)
}
