//! Condition classifier.
//!
//! The provider's condition vocabulary is open-ended and compound
//! ("light-rain", "wet-snow", "thunderstorm-with-rain"), so matching is a
//! plain case-sensitive substring test against the raw code.
//!
//! Matching assumes the provider returns English condition codes. A
//! localized vocabulary would silently match nothing.

use std::fmt;

use crate::types::{ForecastRecord, ForecastTable};

/// Every record whose condition contains `token`, in table order.
///
/// An empty token is a substring of every condition and matches all rows.
pub fn filter_by_condition<'a>(table: &'a ForecastTable, token: &str) -> Vec<&'a ForecastRecord> {
    table.iter().filter(|r| r.condition.contains(token)).collect()
}

/// Precipitation categories reported downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionCategory {
    Rain,
    Thunderstorm,
    Snow,
}

impl ConditionCategory {
    pub const ALL: [ConditionCategory; 3] = [
        ConditionCategory::Rain,
        ConditionCategory::Thunderstorm,
        ConditionCategory::Snow,
    ];

    /// Substring searched for in the provider's condition code.
    pub fn token(self) -> &'static str {
        match self {
            ConditionCategory::Rain => "rain",
            ConditionCategory::Thunderstorm => "thunderstorm",
            ConditionCategory::Snow => "snow",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConditionCategory::Rain => "Days with rain",
            ConditionCategory::Thunderstorm => "Days with thunderstorms",
            ConditionCategory::Snow => "Days with snow",
        }
    }
}

impl fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Matching days for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionDays<'a> {
    pub category: ConditionCategory,
    pub records: Vec<&'a ForecastRecord>,
}

/// Run the classifier once per category, in `ConditionCategory::ALL` order.
pub fn classify(table: &ForecastTable) -> Vec<ConditionDays<'_>> {
    ConditionCategory::ALL
        .iter()
        .map(|&category| ConditionDays {
            category,
            records: filter_by_condition(table, category.token()),
        })
        .collect()
}
