//! Table-wide temperature extremes.
//!
//! Both finders scan the whole table (all cities, all days) and keep the
//! first record holding the extreme `temp_avg`; later ties never replace it.

use crate::types::{ForecastRecord, ForecastTable};

/// Record with the highest `temp_avg`, or `None` for an empty table.
pub fn find_hottest_day(table: &ForecastTable) -> Option<&ForecastRecord> {
    first_extreme(table, |candidate, best| candidate > best)
}

/// Record with the lowest `temp_avg`, or `None` for an empty table.
pub fn find_coldest_day(table: &ForecastTable) -> Option<&ForecastRecord> {
    first_extreme(table, |candidate, best| candidate < best)
}

fn first_extreme(
    table: &ForecastTable,
    beats: impl Fn(f64, f64) -> bool,
) -> Option<&ForecastRecord> {
    table.iter().fold(None, |best: Option<&ForecastRecord>, record| match best {
        Some(b) if !beats(record.temp_avg, b.temp_avg) => Some(b),
        _ => Some(record),
    })
}
