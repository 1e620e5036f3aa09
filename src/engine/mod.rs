//! Forecast pipeline.
//!
//! Normalization and ingestion build the table; aggregation, extremum
//! finding and condition classification then read it. The three analysis
//! steps are independent pure functions over the finished table.

pub mod aggregator;
pub mod classifier;
pub mod extremum;
pub mod ingest;
pub mod normalizer;

use tracing::{debug, info};

use crate::types::{CitySummary, ForecastRecord, ForecastTable};
use classifier::ConditionDays;

/// Everything the presentation layer needs from one non-empty table.
#[derive(Debug, Clone)]
pub struct Analysis<'a> {
    pub summaries: Vec<CitySummary>,
    pub hottest: &'a ForecastRecord,
    pub coldest: &'a ForecastRecord,
    pub conditions: Vec<ConditionDays<'a>>,
}

impl<'a> Analysis<'a> {
    /// Run every analysis step once. `None` means there is no data.
    pub fn run(table: &'a ForecastTable) -> Option<Self> {
        if table.is_empty() {
            info!("Forecast table is empty, nothing to analyse");
            return None;
        }

        let summaries = aggregator::aggregate(table);
        let hottest = extremum::find_hottest_day(table)?;
        let coldest = extremum::find_coldest_day(table)?;
        let conditions = classifier::classify(table);

        for summary in &summaries {
            debug!(summary = %summary, "City summary");
        }
        for days in &conditions {
            debug!(category = %days.category, days = days.records.len(), "Condition days");
        }
        debug!(
            cities = summaries.len(),
            hottest = %hottest,
            coldest = %coldest,
            "Analysis complete"
        );

        Some(Self {
            summaries,
            hottest,
            coldest,
            conditions,
        })
    }
}
