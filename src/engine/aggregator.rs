//! Per-city aggregation.
//!
//! Groups the table by exact city name and folds each group into a
//! running accumulator, emitting one `CitySummary` per city in the
//! order cities first appear in the table.

use crate::types::{CitySummary, ForecastRecord, ForecastTable};

/// Running min/max/sum state for one city.
#[derive(Debug, Clone)]
struct CityAccumulator {
    min_avg_temp: f64,
    max_avg_temp: f64,
    feels_like_sum: f64,
    max_wind_speed: f64,
    max_pressure_mm: f64,
    humidity_sum: f64,
    count: usize,
}

impl CityAccumulator {
    fn new(record: &ForecastRecord) -> Self {
        Self {
            min_avg_temp: record.temp_avg,
            max_avg_temp: record.temp_avg,
            feels_like_sum: record.feels_like,
            max_wind_speed: record.wind_speed,
            max_pressure_mm: record.pressure_mm,
            humidity_sum: record.humidity,
            count: 1,
        }
    }

    fn update(&mut self, record: &ForecastRecord) {
        self.min_avg_temp = self.min_avg_temp.min(record.temp_avg);
        self.max_avg_temp = self.max_avg_temp.max(record.temp_avg);
        self.feels_like_sum += record.feels_like;
        self.max_wind_speed = self.max_wind_speed.max(record.wind_speed);
        self.max_pressure_mm = self.max_pressure_mm.max(record.pressure_mm);
        self.humidity_sum += record.humidity;
        self.count += 1;
    }

    fn finish(self, city: String) -> CitySummary {
        let n = self.count as f64;
        CitySummary {
            city,
            days: self.count,
            min_avg_temp: self.min_avg_temp,
            max_avg_temp: self.max_avg_temp,
            avg_feels_like: self.feels_like_sum / n,
            max_wind_speed: self.max_wind_speed,
            max_pressure_mm: self.max_pressure_mm,
            avg_humidity: self.humidity_sum / n,
        }
    }
}

/// Summarise every city in the table. Empty table → empty vector.
pub fn aggregate(table: &ForecastTable) -> Vec<CitySummary> {
    let mut groups: Vec<(&str, CityAccumulator)> = Vec::new();

    for record in table {
        match groups.iter_mut().find(|(city, _)| *city == record.city) {
            Some((_, acc)) => acc.update(record),
            None => groups.push((record.city.as_str(), CityAccumulator::new(record))),
        }
    }

    groups
        .into_iter()
        .map(|(city, acc)| acc.finish(city.to_string()))
        .collect()
}
