//! Full pipeline: source → ingestion → analysis → report and chart.

use serde_json::json;

use pogoda::engine::ingest::run_ingestion;
use pogoda::engine::Analysis;
use pogoda::report::{chart, render_report, NO_DATA};
use pogoda::types::PipelineError;

use crate::mock_source::{city, payload, Day, InMemorySource};

fn day<'a>(date: &'a str, temp_avg: f64, condition: &'a str) -> Day<'a> {
    Day {
        date,
        temp_min: temp_avg - 4.0,
        temp_max: temp_avg + 3.0,
        temp_avg,
        feels_like: temp_avg - 2.0,
        condition,
    }
}

#[tokio::test]
async fn test_two_city_digest() {
    let source = InMemorySource::new()
        .with_payload("Сочи", payload(&[day("2024-01-01", 10.0, "light-rain")]))
        .with_payload("Уфа", payload(&[day("2024-01-01", -15.0, "snow")]));
    let cities = vec![city("Сочи"), city("Уфа")];

    let ingested = run_ingestion(&source, &cities).await;
    assert_eq!(ingested.table.len(), 2);
    assert!(ingested.skipped.is_empty());

    let analysis = Analysis::run(&ingested.table).unwrap();
    assert_eq!(analysis.hottest.city, "Сочи");
    assert_eq!(analysis.coldest.city, "Уфа");
    for summary in &analysis.summaries {
        assert_eq!(summary.min_avg_temp, summary.max_avg_temp);
        assert_eq!(summary.days, 1);
    }

    let report = render_report(&ingested, Some(&analysis));
    assert!(report.contains("Hottest day: Сочи on 2024-01-01"));
    assert!(report.contains("Coldest day: Уфа on 2024-01-01"));
    assert!(report.contains("Days with rain:\n  Сочи 2024-01-01"));
    assert!(report.contains("Days with snow:\n  Уфа 2024-01-01"));
    assert!(!report.contains("Days with thunderstorms"));
}

#[tokio::test]
async fn test_failing_city_is_isolated() {
    let days = [day("2024-01-01", 1.0, "cloudy"), day("2024-01-02", 3.0, "overcast")];
    let source = InMemorySource::new()
        .with_payload("Калининград", payload(&days))
        .with_status("Новосибирск", 403, "Forbidden")
        .with_payload("Сочи", payload(&[day("2024-01-01", 9.0, "clear")]));
    let cities = vec![city("Калининград"), city("Новосибирск"), city("Сочи")];

    let ingested = run_ingestion(&source, &cities).await;

    assert_eq!(source.calls(), vec!["Калининград", "Новосибирск", "Сочи"]);
    assert_eq!(ingested.table.cities(), vec!["Калининград", "Сочи"]);
    assert_eq!(ingested.table.len(), 3);
    assert_eq!(
        ingested.skipped,
        vec![PipelineError::FetchFailure {
            city: "Новосибирск".into(),
            status: Some(403),
            message: "Forbidden".into(),
        }]
    );

    // Same table as a run that never configured the failing city.
    let healthy = InMemorySource::new()
        .with_payload("Калининград", payload(&days))
        .with_payload("Сочи", payload(&[day("2024-01-01", 9.0, "clear")]));
    let baseline = run_ingestion(&healthy, &[city("Калининград"), city("Сочи")]).await;
    assert_eq!(ingested.table, baseline.table);

    let analysis = Analysis::run(&ingested.table).unwrap();
    let report = render_report(&ingested, Some(&analysis));
    assert!(report.contains("Skipped cities (1): Новосибирск\n"));
    assert!(report.contains("Fetch failed for Новосибирск (status 403): Forbidden"));
}

#[tokio::test]
async fn test_malformed_payload_is_skipped() {
    let source = InMemorySource::new()
        .with_payload("Уфа", json!({ "forecasts": [{ "date": "2024-01-01", "parts": {} }] }))
        .with_payload("Сочи", payload(&[day("2024-01-01", 9.0, "clear")]));

    let ingested = run_ingestion(&source, &[city("Уфа"), city("Сочи")]).await;

    assert_eq!(ingested.table.cities(), vec!["Сочи"]);
    match &ingested.skipped[0] {
        PipelineError::MalformedPayload { city, field, .. } => {
            assert_eq!(city, "Уфа");
            assert!(field.starts_with("forecasts[0].parts.day"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_every_city_failing_reports_no_data() {
    let source = InMemorySource::new();
    let cities = [city("Сочи"), city("Уфа")];
    let ingested = run_ingestion(&source, &cities).await;

    assert!(ingested.table.is_empty());
    assert_eq!(ingested.skipped_cities(), vec!["Сочи", "Уфа"]);

    let analysis = Analysis::run(&ingested.table);
    assert!(analysis.is_none());

    let report = render_report(&ingested, analysis.as_ref());
    assert!(report.starts_with(NO_DATA));
    let series = chart::chart_series(&ingested.table, &cities);
    assert_eq!(series.len(), 2);
    assert!(series.iter().all(|s| s.points.is_empty()));
}

#[tokio::test]
async fn test_chart_series_follow_configured_cities() {
    let source = InMemorySource::new()
        .with_payload(
            "Уфа",
            payload(&[day("2024-01-01", -15.0, "snow"), day("2024-01-02", -12.0, "snow")]),
        )
        .with_payload("Сочи", payload(&[day("2024-01-01", 10.0, "light-rain")]));

    let cities = [city("Уфа"), city("Калининград"), city("Сочи")];
    let ingested = run_ingestion(&source, &cities).await;
    let series = chart::chart_series(&ingested.table, &cities);

    let names: Vec<_> = series.iter().map(|s| s.city.as_str()).collect();
    assert_eq!(names, vec!["Уфа", "Калининград", "Сочи"]);
    assert!(series[1].points.is_empty());
    let ufa: Vec<_> = series[0].points.iter().map(|p| p.temp_min).collect();
    assert_eq!(ufa, vec![-19.0, -16.0]);
}
