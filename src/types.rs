//! Shared types for the POGODA pipeline.
//!
//! These types form the data model used across all modules: the flat
//! per-day forecast record, the table that collects them, the per-city
//! summary, and the domain error enum.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

// ---------------------------------------------------------------------------
// Forecast record
// ---------------------------------------------------------------------------

/// One city, one calendar day, taken from the provider's daytime part.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRecord {
    pub city: String,
    pub date: NaiveDate,
    pub temp_min: f64,
    pub temp_max: f64,
    pub temp_avg: f64,
    pub feels_like: f64,
    /// Provider condition code, e.g. "light-rain". Open vocabulary.
    pub condition: String,
    pub wind_speed: f64,
    /// Pressure in mm Hg (provider unit).
    pub pressure_mm: f64,
    /// Relative humidity, 0–100. Not validated.
    pub humidity: f64,
}

impl fmt::Display for ForecastRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {:.0}..{:.0}°C (avg {:.0}, feels {:.0}), {}, wind {:.1} m/s, {:.0} mm, {:.0}%",
            self.city,
            self.date,
            self.temp_min,
            self.temp_max,
            self.temp_avg,
            self.feels_like,
            self.condition,
            self.wind_speed,
            self.pressure_mm,
            self.humidity,
        )
    }
}

// ---------------------------------------------------------------------------
// Forecast table
// ---------------------------------------------------------------------------

/// Ordered collection of records across all cities.
///
/// Rows are appended city by city during ingestion and never mutated
/// afterwards; downstream consumers only get shared references.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastTable {
    records: Vec<ForecastRecord>,
}

impl ForecastTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from records already in table order.
    pub fn from_records(records: Vec<ForecastRecord>) -> Self {
        Self { records }
    }

    /// Append one city's normalized records. Ingestion only.
    pub(crate) fn append(&mut self, records: Vec<ForecastRecord>) {
        self.records.extend(records);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ForecastRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct city names in first-seen order.
    pub fn cities(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.city.as_str()) {
                seen.push(&record.city);
            }
        }
        seen
    }

    /// Records for one city, in table order.
    pub fn for_city<'a>(&'a self, city: &'a str) -> impl Iterator<Item = &'a ForecastRecord> + 'a {
        self.records.iter().filter(move |r| r.city == city)
    }
}

impl<'a> IntoIterator for &'a ForecastTable {
    type Item = &'a ForecastRecord;
    type IntoIter = std::slice::Iter<'a, ForecastRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ---------------------------------------------------------------------------
// City summary
// ---------------------------------------------------------------------------

/// Per-city statistics over all forecast days of that city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CitySummary {
    pub city: String,
    pub days: usize,
    pub min_avg_temp: f64,
    pub max_avg_temp: f64,
    pub avg_feels_like: f64,
    pub max_wind_speed: f64,
    pub max_pressure_mm: f64,
    pub avg_humidity: f64,
}

impl fmt::Display for CitySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: avg temp {:.1}..{:.1}, feels {:.1}, wind ≤{:.1}, pressure ≤{:.0}, humidity {:.1}% ({} days)",
            self.city,
            self.min_avg_temp,
            self.max_avg_temp,
            self.avg_feels_like,
            self.max_wind_speed,
            self.max_pressure_mm,
            self.avg_humidity,
            self.days,
        )
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Per-city failures. Ingestion contains every one of these; none of them
/// stops a run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PipelineError {
    #[error("Fetch failed for {city} (status {}): {message}", display_status(.status))]
    FetchFailure {
        city: String,
        status: Option<u16>,
        message: String,
    },

    #[error("Malformed payload for {city}: {field} {detail}")]
    MalformedPayload {
        city: String,
        field: String,
        detail: String,
    },
}

impl PipelineError {
    /// The city this failure is scoped to.
    pub fn city(&self) -> &str {
        match self {
            PipelineError::FetchFailure { city, .. } => city,
            PipelineError::MalformedPayload { city, .. } => city,
        }
    }

    pub(crate) fn missing(city: &str, field: impl Into<String>) -> Self {
        PipelineError::MalformedPayload {
            city: city.to_string(),
            field: field.into(),
            detail: "is missing".to_string(),
        }
    }
}

fn display_status(status: &Option<u16>) -> String {
    status.map_or_else(|| "n/a".to_string(), |s| s.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
