//! Plain-text report for the console.
//!
//! Renders the per-city summary table, the hottest and coldest day, the
//! precipitation day lists and the skipped cities. Pure string building;
//! printing is left to the binary.

pub mod chart;

use crate::engine::ingest::Ingested;
use crate::engine::Analysis;
use crate::types::ForecastRecord;

pub const NO_DATA: &str = "No data to process";

const HEADERS: [&str; 7] = [
    "City",
    "Min avg temp",
    "Max avg temp",
    "Avg feels like",
    "Max wind",
    "Max pressure",
    "Avg humidity",
];

/// Render the full report. `analysis` is `None` when the table is empty.
pub fn render_report(ingested: &Ingested, analysis: Option<&Analysis<'_>>) -> String {
    let mut lines: Vec<String> = Vec::new();

    match analysis {
        Some(analysis) => {
            lines.push("Forecast summary by city".to_string());
            lines.extend(summary_table(analysis));

            lines.push(String::new());
            lines.push(format!("Hottest day: {}", extreme_line(analysis.hottest)));
            lines.push(format!("Coldest day: {}", extreme_line(analysis.coldest)));

            for days in analysis.conditions.iter().filter(|d| !d.records.is_empty()) {
                lines.push(String::new());
                lines.push(format!("{}:", days.category.label()));
                lines.extend(days.records.iter().map(|r| format!("  {} {}", r.city, r.date)));
            }
        }
        None => lines.push(NO_DATA.to_string()),
    }

    if !ingested.skipped.is_empty() {
        lines.push(String::new());
        let cities = ingested.skipped_cities();
        lines.push(format!("Skipped cities ({}): {}", cities.len(), cities.join(", ")));
        lines.extend(ingested.skipped.iter().map(|e| format!("  {e}")));
    }

    lines.join("\n")
}

fn extreme_line(record: &ForecastRecord) -> String {
    format!("{} on {}, avg {:.1}°C", record.city, record.date, record.temp_avg)
}

fn summary_table(analysis: &Analysis<'_>) -> Vec<String> {
    let rows: Vec<[String; 7]> = analysis
        .summaries
        .iter()
        .map(|s| {
            [
                s.city.clone(),
                format!("{:.1}", s.min_avg_temp),
                format!("{:.1}", s.max_avg_temp),
                format!("{:.1}", s.avg_feels_like),
                format!("{:.1}", s.max_wind_speed),
                format!("{:.0}", s.max_pressure_mm),
                format!("{:.1}", s.avg_humidity),
            ]
        })
        .collect();

    // Column widths in chars; city names are Cyrillic.
    let mut widths: [usize; 7] = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(i, (cell, &w))| {
                if i == 0 {
                    format!("{cell:<w$}")
                } else {
                    format!("{cell:>w$}")
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();

    let mut out = vec![format_row(header.as_slice()), format_row(rule.as_slice())];
    out.extend(rows.iter().map(|row| format_row(row.as_slice())));
    out
}
