//! Record normalizer.
//!
//! Decodes one city's raw provider document into flat `ForecastRecord`s.
//! Every field is decoded as optional and then required explicitly, so a
//! missing field is reported with its JSON path instead of a generic serde
//! message.

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::types::{ForecastRecord, PipelineError};

const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Provider document (Yandex Weather v2 → Rust)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ForecastDocument {
    #[serde(default)]
    forecasts: Option<Vec<DayEntry>>,
}

#[derive(Debug, Deserialize)]
struct DayEntry {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    parts: Option<DayParts>,
}

/// Only the daytime part is read; night/morning/evening are ignored.
#[derive(Debug, Deserialize)]
struct DayParts {
    #[serde(default)]
    day: Option<DayPart>,
}

#[derive(Debug, Deserialize)]
struct DayPart {
    #[serde(default)]
    temp_min: Option<f64>,
    #[serde(default)]
    temp_max: Option<f64>,
    #[serde(default)]
    temp_avg: Option<f64>,
    #[serde(default)]
    feels_like: Option<f64>,
    #[serde(default)]
    condition: Option<String>,
    #[serde(default)]
    wind_speed: Option<f64>,
    #[serde(default)]
    pressure_mm: Option<f64>,
    #[serde(default)]
    humidity: Option<f64>,
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Convert one city's payload into records, in payload day order.
pub fn normalize(payload: &serde_json::Value, city: &str) -> Result<Vec<ForecastRecord>, PipelineError> {
    let doc = ForecastDocument::deserialize(payload).map_err(|e| PipelineError::MalformedPayload {
        city: city.to_string(),
        field: "payload".to_string(),
        detail: format!("has an unexpected shape: {e}"),
    })?;

    let entries = doc
        .forecasts
        .ok_or_else(|| PipelineError::missing(city, "forecasts"))?;

    let mut records: Vec<ForecastRecord> = Vec::with_capacity(entries.len());
    for (i, entry) in entries.into_iter().enumerate() {
        let record = normalize_day(entry, i, city)?;
        if records.iter().any(|r| r.date == record.date) {
            return Err(PipelineError::MalformedPayload {
                city: city.to_string(),
                field: format!("forecasts[{i}].date"),
                detail: format!("repeats {}", record.date),
            });
        }
        records.push(record);
    }

    debug!(city, days = records.len(), "Payload normalized");
    Ok(records)
}

fn normalize_day(entry: DayEntry, i: usize, city: &str) -> Result<ForecastRecord, PipelineError> {
    let path = |field: &str| format!("forecasts[{i}].{field}");

    let raw_date = entry.date.ok_or_else(|| PipelineError::missing(city, path("date")))?;
    let date = NaiveDate::parse_from_str(&raw_date, DATE_FORMAT).map_err(|_| {
        PipelineError::MalformedPayload {
            city: city.to_string(),
            field: path("date"),
            detail: format!("is not a YYYY-MM-DD date: {raw_date:?}"),
        }
    })?;

    let day = entry
        .parts
        .ok_or_else(|| PipelineError::missing(city, path("parts")))?
        .day
        .ok_or_else(|| PipelineError::missing(city, path("parts.day")))?;

    let day_path = |field: &str| path(&format!("parts.day.{field}"));
    let require = |value: Option<f64>, field: &str| {
        value.ok_or_else(|| PipelineError::missing(city, day_path(field)))
    };

    Ok(ForecastRecord {
        city: city.to_string(),
        date,
        temp_min: require(day.temp_min, "temp_min")?,
        temp_max: require(day.temp_max, "temp_max")?,
        temp_avg: require(day.temp_avg, "temp_avg")?,
        feels_like: require(day.feels_like, "feels_like")?,
        condition: day
            .condition
            .ok_or_else(|| PipelineError::missing(city, day_path("condition")))?,
        wind_speed: require(day.wind_speed, "wind_speed")?,
        pressure_mm: require(day.pressure_mm, "pressure_mm")?,
        humidity: require(day.humidity, "humidity")?,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
