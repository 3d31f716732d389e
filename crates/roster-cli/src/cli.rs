//! CLI argument definitions for the roster organizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "camp-roster",
    version,
    about = "Registration roster organizer - grade sheets, team division, attendance",
    long_about = "Organize camp registration spreadsheets.\n\n\
                  Groups children by grade with inferred sibling columns, divides\n\
                  them into team buckets with statistics, and builds worker\n\
                  attendance check-in sheets."
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
    /// Group registrations by grade with sibling columns.
    Organize(ProcessArgs),

    /// Divide registrations into team buckets with statistics.
    Teams(ProcessArgs),

    /// Build a worker attendance check-in sheet.
    Attendance(AttendanceArgs),
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Registration spreadsheet to read (first worksheet is used).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: a timestamped file next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Drop rows whose registration number marks a cancellation.
    #[arg(long = "hide-cancelled")]
    pub hide_cancelled: bool,

    /// Drop rows with a blank or 無 registration number.
    #[arg(long = "hide-no-number")]
    pub hide_no_number: bool,

    /// Summary sheet ordering.
    #[arg(long = "sort-by", value_enum, default_value = "registration-number")]
    pub sort_by: SortByArg,
}

#[derive(Parser)]
pub struct AttendanceArgs {
    /// Worker roster spreadsheet to read.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: a timestamped file next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortByArg {
    /// Numeric registration number order.
    RegistrationNumber,
    /// Original input row order.
    OriginalIndex,
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
