//! CLI argument definitions for the table manipulator.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tabby",
    version,
    about = "Simple table manipulator",
    long_about = "Simple table manipulator.\n\n\
                  Loads a .csv, .tsv, .xls or .xlsx file, optionally replaces values\n\
                  and fills missing cells (empty, None, NaN), then prints the table\n\
                  or saves it next to the input format."
)]
pub struct Cli {
    /// Path to the input file.
    #[arg(value_name = "FILENAME")]
    pub filename: PathBuf,

    /// Save the table to NAME.<input extension>.
    #[arg(short = 'o', long = "output", value_name = "NAME")]
    pub output: Option<String>,

    /// Change values in a column ("all" for every column).
    #[arg(
        short = 'c',
        long = "change",
        num_args = 3,
        action = ArgAction::Set,
        value_names = ["COLUMN", "OLD", "NEW"],
        allow_hyphen_values = true
    )]
    pub change: Option<Vec<String>>,

    /// Replace NaN, None or empty cells with the column mean or mode.
    #[arg(short = 'n', long = "nan")]
    pub nan: bool,

    /// Display table dimensions.
    #[arg(short = 'd', long = "dimensions")]
    pub dimensions: bool,

    /// Display the list of columns and their types instead of the table.
    #[arg(short = 'l', long = "list-columns")]
    pub list_columns: bool,

    /// Render the table header in bold.
    #[arg(long = "bold-header")]
    pub bold_header: bool,

    /// Adjust log verbosity (-v info, -vv debug, -vvv trace, -q errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Allow cell values to appear in logs.
    #[arg(long = "log-data")]
    pub log_data: bool,
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
