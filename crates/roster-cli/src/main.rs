//! Registration roster organizer CLI.

use clap::{ColorChoice, Parser};
use roster_cli::logging::{LogConfig, LogFormat, init_logging};
use roster_cli::pipeline::{default_output_path, run_attendance, run_organize, run_teams};
use roster_model::{ProcessOptions, SortBy};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{AttendanceArgs, Cli, Command, LogFormatArg, LogLevelArg, ProcessArgs, SortByArg};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Organize(args) => run_process(&args, "organized", run_organize),
        Command::Teams(args) => run_process(&args, "team-divided", run_teams),
        Command::Attendance(args) => run_attendance_command(&args),
    };
    std::process::exit(exit_code);
}

fn run_process<F>(args: &ProcessArgs, prefix: &str, run: F) -> i32
where
    F: FnOnce(
        &std::path::Path,
        std::path::PathBuf,
        &ProcessOptions,
    ) -> anyhow::Result<roster_cli::pipeline::RunResult>,
{
    let options = ProcessOptions::new()
        .with_hide_cancelled(args.hide_cancelled)
        .with_hide_no_number(args.hide_no_number)
        .with_sort_by(match args.sort_by {
            SortByArg::RegistrationNumber => SortBy::RegistrationNumber,
            SortByArg::OriginalIndex => SortBy::OriginalIndex,
        });
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input, prefix));
    match run(&args.input, output, &options) {
        Ok(result) => {
            print_summary(&result);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}

fn run_attendance_command(args: &AttendanceArgs) -> i32 {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input, "worker-attendance"));
    match run_attendance(&args.input, output) {
        Ok(result) => {
            print_summary(&result);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
