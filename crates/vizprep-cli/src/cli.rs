//! CLI argument definitions for vizprep.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "vizprep",
    version,
    about = "Prepare loosely structured tables for charts and maps",
    long_about = "Infer period, category and measure columns in a CSV table, normalize\n\
                  long or wide layouts into per-category series, and derive the scale\n\
                  domains a bar chart, line chart or diverging choropleth needs."
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

    /// TOML file with domain and choropleth defaults.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show which columns were picked as period, category and measure.
    Roles(RolesArgs),

    /// Aggregate a table into per-category series and scale domains.
    Series(SeriesArgs),

    /// Score region values on a symmetric diverging scale.
    Choropleth(ChoroplethArgs),
}

#[derive(Args)]
pub struct RolesArgs {
    /// CSV file to inspect (`-` reads stdin).
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct SeriesArgs {
    /// CSV file to aggregate (`-` reads stdin).
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Chart the domains are derived for.
    #[arg(long = "chart", value_enum, default_value = "bar")]
    pub chart: ChartArg,

    /// Let the value axis start above zero for all-positive data.
    #[arg(long = "no-zero-floor")]
    pub no_zero_floor: bool,

    /// Extend the value axis to round tick bounds.
    #[arg(long = "nice")]
    pub nice: bool,

    /// Also derive a symmetric diverging domain over all values.
    #[arg(long = "diverging")]
    pub diverging: bool,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ChoroplethArgs {
    /// CSV file with one row per region (`-` reads stdin).
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Column holding the region key.
    #[arg(long = "key", value_name = "COLUMN")]
    pub key: Option<String>,

    /// Column holding the signed value.
    #[arg(long = "value", value_name = "COLUMN")]
    pub value: Option<String>,

    /// Contrast exponent in (0, 1]; lower values boost small differences.
    #[arg(long = "gamma", value_name = "GAMMA")]
    pub gamma: Option<f64>,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ChartArg {
    /// Banded period axis, rounded value axis.
    Bar,
    /// Continuous period axis.
    Line,
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
