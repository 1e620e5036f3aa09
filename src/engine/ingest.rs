//! Ingestion: fetch results → forecast table.
//!
//! Cities are fetched one after another in configured order. A city whose
//! fetch fails, or whose payload cannot be normalized, is skipped and
//! recorded; it never affects the other cities and never stops the run.

use tracing::{info, warn};
use uuid::Uuid;

use super::normalizer::normalize;
use crate::config::City;
use crate::data::ForecastSource;
use crate::types::{ForecastTable, PipelineError};

/// What the fetch collaborator produced for one city.
#[derive(Debug, Clone)]
pub struct CityFetch {
    pub city: String,
    pub result: Result<serde_json::Value, PipelineError>,
}

/// Outcome of one ingestion run.
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    pub table: ForecastTable,
    /// One entry per skipped city, in city order.
    pub skipped: Vec<PipelineError>,
}

impl Ingested {
    pub fn skipped_cities(&self) -> Vec<&str> {
        self.skipped.iter().map(|e| e.city()).collect()
    }
}

/// Build the table from per-city fetch results.
pub fn ingest(fetches: impl IntoIterator<Item = CityFetch>) -> Ingested {
    let mut out = Ingested::default();

    for fetch in fetches {
        let records = fetch
            .result
            .and_then(|payload| normalize(&payload, &fetch.city));

        match records {
            Ok(records) => {
                info!(city = %fetch.city, days = records.len(), "City ingested");
                out.table.append(records);
            }
            Err(e) => {
                warn!(city = %fetch.city, error = %e, "Skipping city");
                out.skipped.push(e);
            }
        }
    }

    out
}

/// Query the source for every city, sequentially, in configured order.
pub async fn fetch_all(source: &dyn ForecastSource, cities: &[City]) -> Vec<CityFetch> {
    let mut fetches = Vec::with_capacity(cities.len());
    for city in cities {
        let result = source.fetch(city).await;
        fetches.push(CityFetch {
            city: city.name.clone(),
            result,
        });
    }
    fetches
}

/// Fetch every city and ingest the results into a fresh table.
pub async fn run_ingestion(source: &dyn ForecastSource, cities: &[City]) -> Ingested {
    let run_id = Uuid::new_v4();
    info!(%run_id, source = source.name(), cities = cities.len(), "Ingestion started");

    let ingested = ingest(fetch_all(source, cities).await);

    info!(
        %run_id,
        records = ingested.table.len(),
        cities = ?ingested.table.cities(),
        skipped = ?ingested.skipped_cities(),
        "Ingestion finished"
    );
    ingested
}
