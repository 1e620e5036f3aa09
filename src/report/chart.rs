//! Chart series export.
//!
//! Builds the per-city minimum-temperature series the plotter draws (one
//! line per configured city, date on the x axis) and writes it as JSON.
//! A skipped city keeps its legend entry with no points.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::config::City;
use crate::types::ForecastTable;

pub const CHART_TITLE: &str = "Minimum temperature by city";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub temp_min: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub city: String,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChartDocument {
    title: String,
    x_label: String,
    y_label: String,
    series: Vec<ChartSeries>,
}

/// One series per configured city, in config order; points in table order.
pub fn chart_series(table: &ForecastTable, cities: &[City]) -> Vec<ChartSeries> {
    cities
        .iter()
        .map(|city| ChartSeries {
            city: city.name.clone(),
            points: table
                .for_city(&city.name)
                .map(|r| ChartPoint { date: r.date, temp_min: r.temp_min })
                .collect(),
        })
        .collect()
}

/// Write the series as a JSON document for an external plotter.
pub fn write_chart(path: &str, series: &[ChartSeries]) -> Result<()> {
    let doc = ChartDocument {
        title: CHART_TITLE.to_string(),
        x_label: "Date".to_string(),
        y_label: "Temperature".to_string(),
        series: series.to_vec(),
    };
    let json = serde_json::to_string_pretty(&doc).context("Failed to serialise chart series")?;

    if let Some(dir) = Path::new(path).parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create chart directory {}", dir.display()))?;
    }
    std::fs::write(path, json).context(format!("Failed to write chart to {path}"))?;

    info!(path, series = series.len(), "Chart series written");
    Ok(())
}
