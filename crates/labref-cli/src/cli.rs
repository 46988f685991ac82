//! CLI argument definitions for the `labref` tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use labref_model::Sex;

#[derive(Parser)]
#[command(
    name = "labref",
    version,
    about = "Parse lab reference ranges and flag results as NORMAL, HIGH, LOW or BOUNDARY",
    long_about = "Parse free-text laboratory reference ranges and classify result values.\n\n\
                  Understands \"7.94 - 20.07\", \"< 40\", \"> 100\", en/em-dash separators,\n\
                  trailing units and multi-line qualified ranges (\"Adult: 13 - 17 g/dL\")."
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

    /// Prefix log events with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include result values in log output.
    ///
    /// Entered values are patient data and are redacted from logs unless
    /// this flag is given.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a reference range and show its structured form.
    Parse(ParseArgs),

    /// Classify one or more values against a reference range.
    Classify(ClassifyArgs),

    /// Evaluate a result sheet and print a flagged report.
    Report(ReportArgs),

    /// Show the status colour table.
    Statuses,
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Reference range text, e.g. "13 - 17 g/dL" or "< 200".
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Print the descriptor as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// Reference range text to classify against.
    #[arg(long, short = 'r', value_name = "TEXT")]
    pub reference: String,

    /// Result values (numbers or text such as "12.5 g/dL").
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,

    /// Print results as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Result sheet (.json or .csv).
    #[arg(value_name = "SHEET")]
    pub sheet: PathBuf,

    /// Test catalog (.json or .csv) used to fill in missing references.
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Patient sex for gender-specific ranges (overrides the sheet).
    #[arg(long, value_parser = parse_sex)]
    pub sex: Option<Sex>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Only list rows flagged HIGH, LOW or BOUNDARY.
    #[arg(long = "flagged-only")]
    pub flagged_only: bool,
}

fn parse_sex(value: &str) -> Result<Sex, String> {
    value.parse::<Sex>().map_err(|error| error.to_string())
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
