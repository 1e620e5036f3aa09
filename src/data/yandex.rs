//! Yandex Weather forecast source.
//!
//! API: `https://api.weather.yandex.ru/v2/forecast`
//! Auth: `X-Yandex-API-Key` header.
//! Query: `lat`, `lon`, `limit` (days, max 7), `hours=false` to drop the
//! hourly breakdown we never read.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use super::ForecastSource;
use crate::config::{City, ProviderConfig};
use crate::types::PipelineError;

const SOURCE_NAME: &str = "yandex";
const API_KEY_HEADER: &str = "X-Yandex-API-Key";

pub struct YandexWeatherClient {
    http: Client,
    base_url: String,
    api_key: SecretString,
    forecast_days: u32,
}

impl YandexWeatherClient {
    pub fn new(provider: &ProviderConfig, api_key: SecretString) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(provider.timeout_secs))
            .user_agent(concat!("POGODA/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client for Yandex Weather")?;

        Ok(Self {
            http,
            base_url: provider.base_url.clone(),
            api_key,
            forecast_days: provider.forecast_days,
        })
    }

    fn query(&self, city: &City) -> [(&'static str, String); 4] {
        [
            ("lat", city.lat.to_string()),
            ("lon", city.lon.to_string()),
            ("limit", self.forecast_days.to_string()),
            ("hours", "false".to_string()),
        ]
    }
}

#[async_trait]
impl ForecastSource for YandexWeatherClient {
    async fn fetch(&self, city: &City) -> Result<serde_json::Value, PipelineError> {
        debug!(city = %city.name, lat = city.lat, lon = city.lon, "Requesting forecast");

        let failure = |status: Option<u16>, message: String| PipelineError::FetchFailure {
            city: city.name.clone(),
            status,
            message,
        };

        let resp = self
            .http
            .get(&self.base_url)
            .query(&self.query(city))
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .send()
            .await
            .map_err(|e| failure(e.status().map(|s| s.as_u16()), e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(failure(Some(status.as_u16()), body));
        }

        resp.json::<serde_json::Value>()
            .await
            .map_err(|e| PipelineError::MalformedPayload {
                city: city.name.clone(),
                field: "body".to_string(),
                detail: format!("is not valid JSON: {e}"),
            })
    }

    fn name(&self) -> &str {
        SOURCE_NAME
    }
}
