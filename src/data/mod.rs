//! Forecast data sources.
//!
//! Defines the `ForecastSource` trait, the seam between the pipeline and
//! whatever supplies raw per-city forecast payloads, and the Yandex
//! Weather implementation used in production.

pub mod yandex;

use async_trait::async_trait;

use crate::config::City;
use crate::types::PipelineError;

/// Abstraction over forecast providers.
///
/// A source returns the provider's raw JSON document for one city, or a
/// `PipelineError` scoped to that city. Decoding the document is the
/// normalizer's job, not the source's.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ForecastSource: Send + Sync {
    /// Fetch the raw forecast payload for one city.
    async fn fetch(&self, city: &City) -> Result<serde_json::Value, PipelineError>;

    /// Source name for logging.
    fn name(&self) -> &str;
}
