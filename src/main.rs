//! POGODA: multi-city weather forecast digest
//!
//! Entry point. Loads configuration, initialises structured logging,
//! fetches every configured city once, prints the report and optionally
//! exports the temperature chart series.

use anyhow::Result;
use tracing::info;

use pogoda::config;
use pogoda::data::yandex::YandexWeatherClient;
use pogoda::engine::ingest::run_ingestion;
use pogoda::engine::Analysis;
use pogoda::report::{chart, render_report};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("POGODA_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::AppConfig::load(&config_path)?;

    init_logging();

    info!(
        config = %config_path,
        cities = cfg.cities.len(),
        forecast_days = cfg.provider.forecast_days,
        "POGODA starting up"
    );

    let client = YandexWeatherClient::new(&cfg.provider, cfg.api_key()?)?;
    let ingested = run_ingestion(&client, &cfg.cities).await;

    let analysis = Analysis::run(&ingested.table);
    println!("{}", render_report(&ingested, analysis.as_ref()));

    if let Some(path) = cfg.report.chart_out.as_deref() {
        if ingested.table.is_empty() {
            info!(path, "No data, chart not written");
        } else {
            chart::write_chart(path, &chart::chart_series(&ingested.table, &cfg.cities))?;
        }
    }

    info!(
        records = ingested.table.len(),
        skipped = ingested.skipped.len(),
        "POGODA finished"
    );
    Ok(())
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pogoda=info"));

    let json_logging = std::env::var("POGODA_LOG_JSON").is_ok();

    // Logs go to stderr so the report on stdout stays clean.
    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
