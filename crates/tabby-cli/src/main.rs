//! Tabby: a simple table manipulator.

use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use tabby_cli::logging::{LogConfig, LogFormat, init_logging};
use tabby_cli::pipeline::run;
use tabby_cli::present::{PresentOptions, write_views};
use tabby_cli::types::{RunOptions, ValueChange};
use tabby_transform::ColumnTarget;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match execute(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn execute(cli: &Cli) -> Result<()> {
    let result = run(&run_options_from_cli(cli))?;
    let options = PresentOptions {
        dimensions: cli.dimensions,
        list_columns: cli.list_columns,
        bold_header: cli.bold_header,
        styling: match cli.color.color {
            ColorChoice::Always => Some(true),
            ColorChoice::Never => Some(false),
            ColorChoice::Auto => None,
        },
    };
    let mut stdout = io::stdout().lock();
    write_views(&mut stdout, &result.table, &options).context("write to stdout")?;
    stdout.flush().context("write to stdout")
}

fn run_options_from_cli(cli: &Cli) -> RunOptions {
    let change = cli.change.as_deref().and_then(|values| match values {
        [column, old_value, new_value] => Some(ValueChange {
            target: ColumnTarget::from(column.as_str()),
            old_value: old_value.clone(),
            new_value: new_value.clone(),
        }),
        _ => None,
    });
    RunOptions {
        input: cli.filename.clone(),
        output: cli.output.clone(),
        change,
        impute: cli.nan,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let mut config = LogConfig::default()
        .with_level(level_filter)
        .with_format(format)
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data);
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
