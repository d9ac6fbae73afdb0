//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use ficha_transform::normalization::parse_timestamp;

#[derive(Parser)]
#[command(
    name = "ficha-clean",
    version,
    about = "Sanitize Ficha A registry exports",
    long_about = "Sanitize a Ficha A household registry export.\n\n\
                  Normalizes flags, categories and dates, nulls values outside each\n\
                  column's domain, filters implausible measurements and corrects\n\
                  blood-pressure units, then reports the remaining missing values."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a registry CSV file and write the result next to it.
    Clean(CleanArgs),

    /// List the declared column groups.
    Columns,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Registry CSV export to clean.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Cleaned CSV path (default: <INPUT> with `_desafio` replaced by `_tratado`).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write the cleaning report as JSON.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,

    /// Clean and report without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Null boolean cells outside 0/1/true/false instead of failing.
    #[arg(long = "null-invalid-booleans")]
    pub null_invalid_booleans: bool,

    /// Reference time for future-date detection (default: now).
    #[arg(long = "now", value_name = "DATETIME", value_parser = parse_reference_time)]
    pub now: Option<NaiveDateTime>,
}

fn parse_reference_time(raw: &str) -> Result<NaiveDateTime, String> {
    parse_timestamp(raw).ok_or_else(|| format!("unrecognized date or time: {raw}"))
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
