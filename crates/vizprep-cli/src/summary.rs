use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use vizprep_model::ColumnRole;

use crate::cli::ChartArg;
use crate::commands::{ChoroplethReport, RolesReport, SeriesReport};

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize report")?;
    println!("{text}");
    Ok(())
}

pub fn print_roles(report: &RolesReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Role"),
        header_cell("Column"),
        header_cell("Rule"),
    ]);
    apply_table_style(&mut table);
    let roles = &report.roles;
    let rows = [
        (ColumnRole::Period, Some(&roles.period_column)),
        (ColumnRole::Category, roles.category_column.as_ref()),
        (ColumnRole::Measure, roles.measure_column.as_ref()),
    ];
    for (role, column) in rows {
        let rule = match roles.hit_for(role) {
            Some(hit) => Cell::new(&hit.rule),
            None if role == ColumnRole::Period => Cell::new("fallback").fg(Color::Yellow),
            None => dim_cell("-"),
        };
        let column = match column {
            Some(name) => Cell::new(name),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(role).add_attribute(Attribute::Bold),
            column,
            rule,
        ]);
    }
    println!("{table}");
    println!("Layout: {}", report.layout);
    if !report.period_present {
        eprintln!(
            "warning: period column '{}' is not in the table",
            roles.period_column
        );
    }
}

pub fn print_series(report: &SeriesReport, chart: ChartArg) {
    let aggregate = &report.aggregate;
    let mut header = vec![header_cell("Period")];
    header.extend(aggregate.categories.iter().map(|c| header_cell(c)));
    header.push(header_cell("Total"));

    let mut table = Table::new();
    table.set_header(header);
    apply_table_style(&mut table);
    for idx in 1..=aggregate.categories.len() + 1 {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    let totals = aggregate.period_totals();
    for (&period, total) in aggregate.periods.iter().zip(totals) {
        let mut cells = vec![Cell::new(period).add_attribute(Attribute::Bold)];
        cells.extend(
            aggregate
                .series
                .iter()
                .map(|series| value_cell(series.value_at(period).unwrap_or(0.0))),
        );
        cells.push(Cell::new(format_number(total)).add_attribute(Attribute::Bold));
        table.add_row(cells);
    }
    println!("{table}");

    let domains = &report.domains;
    println!("Layout: {}", aggregate.layout);
    println!(
        "Value axis: [{}, {}]",
        format_number(domains.value_range.min),
        format_number(domains.value_range.max)
    );
    if let (ChartArg::Line, Some(extent)) = (chart, domains.period_extent) {
        println!(
            "Period axis: {} to {} ({} ticks)",
            extent.min, extent.max, domains.period_tick_count
        );
    }
    if let Some(diverging) = &domains.diverging {
        println!(
            "Diverging domain: [{}, {}] (max |value| {})",
            format_number(diverging.lower()),
            format_number(diverging.upper()),
            format_number(diverging.max_abs)
        );
    }
    if report.dropped_rows > 0 {
        println!("Dropped rows: {}", report.dropped_rows);
    }
}

pub fn print_choropleth(report: &ChoroplethReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(&report.key_column),
        header_cell(&report.value_column),
        header_cell("Score"),
        header_cell("Position"),
    ]);
    apply_table_style(&mut table);
    for idx in 1..=3 {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    for region in &report.regions {
        table.add_row(vec![
            Cell::new(&region.label),
            region.value.map_or_else(|| dim_cell("no data"), value_cell),
            optional_cell(region.score),
            optional_cell(region.position),
        ]);
    }
    println!("{table}");
    let [low, mid, high] = report.legend_ticks;
    println!(
        "Legend: {} | {} | {} (gamma {})",
        format_number(low),
        format_number(mid),
        format_number(high),
        report.gamma
    );
}

/// Whole numbers without decimals, everything else to two places.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn value_cell(value: f64) -> Cell {
    let cell = Cell::new(format_number(value));
    if value < 0.0 {
        cell.fg(Color::Red)
    } else if value == 0.0 {
        cell.fg(Color::DarkGrey)
    } else {
        cell
    }
}

fn optional_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format!("{value:.3}")),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
