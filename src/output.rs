use crate::error::AppError;
use crate::reports::{DomainPanel, MetricResult, StateReportCard};
use crate::types::{MetricRow, ReportDocument};
use crate::util::{format_optional, format_rank, quartile_label};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), AppError> {
    let mut wtr = csv::Writer::from_path(path)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

fn metric_row(panel: &DomainPanel, m: &MetricResult) -> MetricRow {
    MetricRow {
        domain: panel.title.clone(),
        metric: m.def.label.to_string(),
        value: format_optional(m.value, m.def.unit),
        national_avg: format_optional(m.national_avg, m.def.unit),
        rank: format_rank(m),
        quartile: quartile_label(m).to_string(),
    }
}

/// Display rows for one panel, skipping metrics without a value.
pub fn panel_rows(panel: &DomainPanel) -> Vec<MetricRow> {
    panel
        .metrics_with_data()
        .map(|m| metric_row(panel, m))
        .collect()
}

/// Every metric of the card, including those without data.
pub fn report_rows(card: &StateReportCard) -> Vec<MetricRow> {
    card.panels
        .iter()
        .flat_map(|panel| panel.metrics.iter().map(move |m| metric_row(panel, m)))
        .collect()
}

pub fn report_document(card: &StateReportCard, generated_on: NaiveDate) -> ReportDocument<'_> {
    ReportDocument {
        generated_on,
        state: &card.state,
        summary: card.summary(),
        panels: &card.panels,
    }
}

pub fn render_table<T>(rows: &[T], max_rows: usize) -> Option<String>
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        return None;
    }
    Some(Table::new(slice).with(Style::markdown()).to_string())
}

pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    match render_table(rows, max_rows) {
        Some(table_str) => println!("{}\n", table_str),
        None => println!("(no rows)\n"),
    }
}

pub fn preview_panel(panel: &DomainPanel, max_rows: usize) {
    let summary = panel.summary();
    print!("{}", panel.title);
    if panel.data_available {
        print!(" ({} metrics", summary.metrics_with_data);
        if summary.top_quartile > 0 {
            print!(" · {} top 25%", summary.top_quartile);
        }
        print!(")");
    }
    println!("\n");
    if !panel.data_available {
        println!("Data unavailable for this state\n");
        return;
    }
    preview_table_rows(&panel_rows(panel), max_rows);
}
