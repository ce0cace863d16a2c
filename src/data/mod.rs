//! Core data models for City Air Quality CLI
//!
//! This module contains the data types used throughout the application for
//! representing cities, live readings, pollutant breakdowns, forecasts, and
//! historical series, along with the cached fetch entry point for each
//! resource kind.

pub mod city;
pub mod history;
pub mod live;
pub mod pollutants;
pub mod predictions;

pub use city::{all_cities, get_city_by_name, City};
pub use history::{fetch_history_cached, HistoryResponse, HistorySample};
pub use live::CurrentAqi;
pub use pollutants::{fetch_pollutants_cached, PollutantReading};
pub use predictions::{
    fetch_predictions_cached, DailyForecast, PredictionPoint, PredictionResponse, WeeklyForecast,
};

use serde::{Deserialize, Serialize};

/// AQI category bands for a PM2.5 value, per US EPA breakpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    /// Categorizes a PM2.5 value
    pub fn from_pm25(pm25: f64) -> Self {
        if pm25 <= 50.0 {
            AqiCategory::Good
        } else if pm25 <= 100.0 {
            AqiCategory::Moderate
        } else if pm25 <= 150.0 {
            AqiCategory::UnhealthyForSensitiveGroups
        } else if pm25 <= 200.0 {
            AqiCategory::Unhealthy
        } else if pm25 <= 300.0 {
            AqiCategory::VeryUnhealthy
        } else {
            AqiCategory::Hazardous
        }
    }

    /// Human-readable label matching the backend's category strings
    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for SG",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aqi_category_band_edges() {
        assert_eq!(AqiCategory::from_pm25(0.0), AqiCategory::Good);
        assert_eq!(AqiCategory::from_pm25(50.0), AqiCategory::Good);
        assert_eq!(AqiCategory::from_pm25(50.1), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_pm25(100.0), AqiCategory::Moderate);
        assert_eq!(
            AqiCategory::from_pm25(150.0),
            AqiCategory::UnhealthyForSensitiveGroups
        );
        assert_eq!(AqiCategory::from_pm25(200.0), AqiCategory::Unhealthy);
        assert_eq!(AqiCategory::from_pm25(300.0), AqiCategory::VeryUnhealthy);
        assert_eq!(AqiCategory::from_pm25(301.0), AqiCategory::Hazardous);
    }

    #[test]
    fn test_aqi_category_labels_are_distinct() {
        let categories = [
            AqiCategory::Good,
            AqiCategory::Moderate,
            AqiCategory::UnhealthyForSensitiveGroups,
            AqiCategory::Unhealthy,
            AqiCategory::VeryUnhealthy,
            AqiCategory::Hazardous,
        ];

        for (i, a) in categories.iter().enumerate() {
            for (j, b) in categories.iter().enumerate() {
                if i == j {
                    assert_eq!(a.label(), b.label());
                } else {
                    assert_ne!(a.label(), b.label());
                }
            }
        }
    }
}
