//! In-memory forecast source for integration testing.
//!
//! Serves canned payloads (or canned failures) per city name and records
//! the order in which cities were requested. No network access.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use pogoda::config::City;
use pogoda::data::ForecastSource;
use pogoda::types::PipelineError;

/// A deterministic source keyed by city name.
///
/// Cities with no canned response fail with a 404 `FetchFailure`.
#[derive(Default)]
pub struct InMemorySource {
    responses: HashMap<String, Result<Value, PipelineError>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `payload` for `city`.
    pub fn with_payload(mut self, city: &str, payload: Value) -> Self {
        self.responses.insert(city.to_string(), Ok(payload));
        self
    }

    /// Fail `city` with the given HTTP status.
    pub fn with_status(mut self, city: &str, status: u16, message: &str) -> Self {
        self.responses.insert(
            city.to_string(),
            Err(PipelineError::FetchFailure {
                city: city.to_string(),
                status: Some(status),
                message: message.to_string(),
            }),
        );
        self
    }

    /// City names in the order they were fetched.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ForecastSource for InMemorySource {
    async fn fetch(&self, city: &City) -> Result<Value, PipelineError> {
        self.calls.lock().unwrap().push(city.name.clone());
        match self.responses.get(&city.name) {
            Some(response) => response.clone(),
            None => Err(PipelineError::FetchFailure {
                city: city.name.clone(),
                status: Some(404),
                message: "no canned response".to_string(),
            }),
        }
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}

/// One forecast day in the provider's wire shape.
pub struct Day<'a> {
    pub date: &'a str,
    pub temp_min: f64,
    pub temp_max: f64,
    pub temp_avg: f64,
    pub feels_like: f64,
    pub condition: &'a str,
}

/// Build a provider payload from `days`, with fixed wind, pressure and humidity.
pub fn payload(days: &[Day<'_>]) -> Value {
    let forecasts: Vec<Value> = days
        .iter()
        .map(|d| {
            json!({
                "date": d.date,
                "parts": {
                    "night": { "temp_avg": d.temp_min },
                    "day": {
                        "temp_min": d.temp_min,
                        "temp_max": d.temp_max,
                        "temp_avg": d.temp_avg,
                        "feels_like": d.feels_like,
                        "condition": d.condition,
                        "wind_speed": 3.5,
                        "pressure_mm": 752,
                        "humidity": 81
                    }
                }
            })
        })
        .collect();
    json!({ "now": 1704067200, "forecasts": forecasts })
}

pub fn city(name: &str) -> City {
    City {
        name: name.to_string(),
        lat: 0.0,
        lon: 0.0,
    }
}
