//! CLI argument definitions for playbill.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use playbill_model::DEFAULT_SOURCE;

#[derive(Parser)]
#[command(
    name = "playbill",
    version,
    about = "Convert a theatre attendance CSV log into JSON for the static site",
    long_about = "Convert a theatre attendance CSV log into the JSON document \
                  read by the static site.\n\n\
                  Rows without a date or title are skipped with a warning. A header \
                  missing any required column aborts the run without output."
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
    /// Build the JSON document from the CSV log.
    Build(BuildArgs),

    /// List the required CSV columns.
    Columns,
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Attendance log to read.
    #[arg(long = "input", value_name = "CSV", default_value = "data/shows.csv")]
    pub input: PathBuf,

    /// Where to write the JSON document. Parent directories are created.
    #[arg(
        long = "output",
        value_name = "JSON",
        default_value = "site/data/shows.json"
    )]
    pub output: PathBuf,

    /// Provenance string recorded in the document's `source` field.
    #[arg(long = "source", value_name = "NAME", default_value = DEFAULT_SOURCE)]
    pub source: String,

    /// Write single-line JSON instead of indented JSON.
    #[arg(long = "compact")]
    pub compact: bool,

    /// Parse and validate without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
