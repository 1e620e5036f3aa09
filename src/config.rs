//! Configuration loading from TOML with environment variable resolution.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! The provider API key is referenced by env-var name in the config and
//! resolved at runtime into a [`SecretString`].

use anyhow::{bail, Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::fs;

/// Default Yandex Weather forecast endpoint.
const DEFAULT_BASE_URL: &str = "https://api.weather.yandex.ru/v2/forecast";

/// The provider serves at most 7 forecast days.
const MAX_FORECAST_DAYS: u32 = 7;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    #[serde(default)]
    pub report: ReportConfig,
    /// Cities in iteration order. Table order follows this order.
    pub cities: Vec<City>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub api_key_env: String,
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ReportConfig {
    /// Where to write the per-city temp_min series as JSON, if anywhere.
    #[serde(default)]
    pub chart_out: Option<String>,
}

/// A configured city and its coordinates.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct City {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_forecast_days() -> u32 {
    MAX_FORECAST_DAYS
}

fn default_timeout_secs() -> u64 {
    15
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Presence checks only. Coordinates are trusted as configured.
    pub fn validate(&self) -> Result<()> {
        if self.cities.is_empty() {
            bail!("No cities configured");
        }
        for (i, city) in self.cities.iter().enumerate() {
            if city.name.trim().is_empty() {
                bail!("City #{} has an empty name", i + 1);
            }
            if self.cities[..i].iter().any(|c| c.name == city.name) {
                bail!("City configured twice: {}", city.name);
            }
        }
        if self.provider.api_key_env.trim().is_empty() {
            bail!("provider.api_key_env is empty");
        }
        if !(1..=MAX_FORECAST_DAYS).contains(&self.provider.forecast_days) {
            bail!(
                "provider.forecast_days must be between 1 and {MAX_FORECAST_DAYS}, got {}",
                self.provider.forecast_days
            );
        }
        Ok(())
    }

    /// Resolve an environment variable name to its value.
    pub fn resolve_env(env_name: &str) -> Result<String> {
        std::env::var(env_name)
            .with_context(|| format!("Environment variable not set: {env_name}"))
    }

    /// Resolve the provider API key referenced by `provider.api_key_env`.
    pub fn api_key(&self) -> Result<SecretString> {
        let key = SecretString::new(Self::resolve_env(&self.provider.api_key_env)?);
        if key.expose_secret().trim().is_empty() {
            bail!("Environment variable is empty: {}", self.provider.api_key_env);
        }
        Ok(key)
    }
}
