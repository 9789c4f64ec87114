use std::io;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{info, info_span, warn};

use vizprep_core::{DivergingScale, LegendStop, PreparedChart, derive_diverging, infer_roles, prepare_chart};
use vizprep_ingest::{keyed_values, parse_raw_table, read_raw_table};
use vizprep_model::{
    AggregateResult, ColumnRoles, DivergingDomain, DomainOptions, Layout, RawTable, ScaleDomains,
    ShapeError,
};

use crate::cli::{ChartArg, ChoroplethArgs, RolesArgs, SeriesArgs};
use crate::config::Config;

/// Input path that reads the table from stdin.
pub const STDIN_PATH: &str = "-";

/// Exit code for tables whose shape leaves nothing to draw.
pub const EXIT_SHAPE_ERROR: i32 = 2;

pub fn load_table(path: &Path) -> Result<RawTable> {
    if path == Path::new(STDIN_PATH) {
        return parse_raw_table(io::stdin().lock()).context("read table from stdin");
    }
    read_raw_table(path).with_context(|| format!("load table: {}", path.display()))
}

/// 2 when the failure is a [`ShapeError`] anywhere in the chain, else 1.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    if error.chain().any(|cause| cause.is::<ShapeError>()) {
        EXIT_SHAPE_ERROR
    } else {
        1
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RolesReport {
    pub headers: Vec<String>,
    pub roles: ColumnRoles,
    pub layout: Layout,
    /// Whether the chosen period column exists in the table.
    pub period_present: bool,
}

pub fn run_roles(args: &RolesArgs) -> Result<RolesReport> {
    let table = load_table(&args.input)?;
    Ok(roles_report(&table))
}

pub fn roles_report(table: &RawTable) -> RolesReport {
    let roles = infer_roles(table);
    RolesReport {
        headers: table.headers().to_vec(),
        layout: roles.layout(),
        period_present: table.has_column(&roles.period_column),
        roles,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesReport {
    pub roles: ColumnRoles,
    pub aggregate: AggregateResult,
    pub domains: ScaleDomains,
    pub dropped_rows: usize,
}

impl From<PreparedChart> for SeriesReport {
    fn from(prepared: PreparedChart) -> Self {
        Self {
            roles: prepared.roles,
            aggregate: prepared.aggregate,
            domains: prepared.domains,
            dropped_rows: prepared.dropped_rows,
        }
    }
}

/// Config defaults with the series flags applied on top.
pub fn series_options(args: &SeriesArgs, base: &DomainOptions) -> DomainOptions {
    let mut options = base.clone();
    if args.no_zero_floor {
        options.force_zero_floor = false;
    }
    // Bars are measured against a rounded axis.
    if args.nice || args.chart == ChartArg::Bar {
        options.nice_value_range = true;
    }
    if args.diverging {
        options.diverging = true;
    }
    options
}

pub fn run_series(args: &SeriesArgs, config: &Config) -> Result<SeriesReport> {
    let span = info_span!("series", input = %args.input.display(), chart = ?args.chart);
    let _guard = span.enter();

    let table = load_table(&args.input)?;
    let options = series_options(args, &config.domains);
    let prepared = prepare_chart(&table, &options)
        .with_context(|| format!("prepare series: {}", args.input.display()))?;
    Ok(prepared.into())
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionScore {
    pub key: String,
    pub label: String,
    pub value: Option<f64>,
    /// Signed score in `[-1, 1]` after the gamma curve.
    pub score: Option<f64>,
    /// Color interpolator input in `[0, 1]`.
    pub position: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChoroplethReport {
    pub key_column: String,
    pub value_column: String,
    pub domain: DivergingDomain,
    pub gamma: f64,
    pub regions: Vec<RegionScore>,
    pub legend_ticks: [f64; 3],
    pub legend_stops: Vec<LegendStop>,
}

pub fn run_choropleth(args: &ChoroplethArgs, config: &Config) -> Result<ChoroplethReport> {
    let span = info_span!("choropleth", input = %args.input.display());
    let _guard = span.enter();

    let key_column = args
        .key
        .as_deref()
        .or(config.choropleth.key_column.as_deref())
        .context("no key column: pass --key or set choropleth.key_column")?;
    let value_column = args
        .value
        .as_deref()
        .or(config.choropleth.value_column.as_deref())
        .context("no value column: pass --value or set choropleth.value_column")?;

    let mut options = config.domains.clone();
    if let Some(gamma) = args.gamma {
        options.gamma = gamma;
    }
    let table = load_table(&args.input)?;
    choropleth_report(
        &table,
        key_column,
        value_column,
        &options,
        config.choropleth.legend_segments,
        &args.input,
    )
}

pub fn choropleth_report(
    table: &RawTable,
    key_column: &str,
    value_column: &str,
    options: &DomainOptions,
    legend_segments: usize,
    origin: &Path,
) -> Result<ChoroplethReport> {
    let values = keyed_values(table, key_column, value_column, origin)?;
    if values.is_empty() {
        bail!("no regions with a key in column '{key_column}'");
    }
    let domain = derive_diverging(values.finite_values(), options.diverging_tick_count);
    let scale = DivergingScale::new(&domain, options);
    let gamma = scale.gamma();
    if gamma != options.gamma {
        warn!(requested = options.gamma, used = gamma, "gamma outside (0, 1], using default");
    }
    let regions: Vec<RegionScore> = values
        .entries()
        .iter()
        .map(|entry| RegionScore {
            key: entry.key.clone(),
            label: entry.label.clone(),
            value: entry.value,
            score: entry.value.and_then(|v| scale.normalize(v)),
            position: entry.value.and_then(|v| scale.position(v)),
        })
        .collect();
    info!(
        regions = regions.len(),
        missing = regions.iter().filter(|r| r.position.is_none()).count(),
        bound = domain.bound,
        "scored regions"
    );

    Ok(ChoroplethReport {
        key_column: key_column.to_string(),
        value_column: value_column.to_string(),
        gamma,
        regions,
        legend_ticks: scale.legend_ticks(),
        legend_stops: scale.legend_stops(legend_segments),
        domain,
    })
}
