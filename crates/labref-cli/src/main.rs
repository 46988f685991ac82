//! `labref`: reference range parsing and result flagging from the shell.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use labref_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_classify, run_parse, run_report};
use crate::summary::{print_classifications, print_parse, print_report, print_statuses};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Parse(args) => {
            let descriptor = run_parse(&args);
            exit_code(print_parse(&args.text, descriptor.as_ref(), args.json))
        }
        Command::Classify(args) => {
            let (descriptor, values) = run_classify(&args);
            exit_code(print_classifications(descriptor.as_ref(), &values, args.json))
        }
        Command::Report(args) => {
            exit_code(run_report(&args).and_then(|report| print_report(&report, args.json)))
        }
        Command::Statuses => {
            print_statuses();
            0
        }
    };
    std::process::exit(exit_code);
}

fn exit_code(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let config = match cli.log_level {
        Some(level) => LogConfig::default().with_level(match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }),
        None if cli.verbosity.is_present() => {
            LogConfig::default().with_level(cli.verbosity.tracing_level_filter())
        }
        None => LogConfig::default().with_fallback_level(cli.verbosity.tracing_level_filter()),
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
        .with_format(match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        })
        .with_timestamps(cli.log_timestamps)
        .with_ansi(with_ansi)
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data)
}
