//! vizprep CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use vizprep_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use vizprep_cli::commands::{exit_code, run_choropleth, run_roles, run_series};
use vizprep_cli::config::load_config;
use vizprep_cli::logging::{LogConfig, LogFormat, init_logging};
use vizprep_cli::summary::{print_choropleth, print_json, print_roles, print_series};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            exit_code(&error)
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match &cli.command {
        Command::Roles(args) => {
            let report = run_roles(args)?;
            if args.json {
                print_json(&report)?;
            } else {
                print_roles(&report);
            }
        }
        Command::Series(args) => {
            let report = run_series(args, &config)?;
            if args.json {
                print_json(&report)?;
            } else {
                print_series(&report, args.chart);
            }
        }
        Command::Choropleth(args) => {
            let report = run_choropleth(args, &config)?;
            if args.json {
                print_json(&report)?;
            } else {
                print_choropleth(&report);
            }
        }
    }
    Ok(())
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
