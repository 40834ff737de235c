//! CLI argument definitions for the ATC export integrity checker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "atc-integrity",
    version,
    about = "Integrity checker for ATC export files",
    long_about = "Check semicolon-delimited ATC exports for structural and semantic defects.\n\n\
                  Supports daily configuration (*_config.csv), sector configuration\n\
                  (*_sect_config.csv) and flight record (*_flights.csv) exports."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Check export files and write an integrity report for each.
    Check(CheckArgs),

    /// List the supported export schemas.
    Schemas,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Export files, or directories whose CSV files should all be checked.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Report every check, including the ones that found nothing.
    #[arg(long = "detail")]
    pub detail: bool,

    /// Drop rows failing a consistency check before the checks that follow.
    #[arg(long = "remove-inconsistent")]
    pub remove_inconsistent: bool,

    /// Directory for reports (default: a `reports` directory next to each input).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print reports to stdout without writing any files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the batch summary as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
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
