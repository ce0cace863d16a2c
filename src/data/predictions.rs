//! Hourly PM2.5 forecast models and cached fetch
//!
//! Predictions are the most expensive resource the backend serves (a model
//! inference per request), so they are cached for a full hour. A response is
//! only considered valid if it carries at least one forecast point; the model
//! occasionally returns an empty series while retraining, and those responses
//! must not be cached.

use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError};
use crate::cache::{CacheConfig, CacheKey, ResourceKind, ResponseCache};

/// A single hour of forecast PM2.5 with its 95% confidence interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    /// Offset from the forecast start, in hours
    pub hour_index: u32,
    /// Timestamp of the forecast hour, as rendered by the backend
    pub datetime: Option<String>,
    /// Predicted PM2.5 concentration
    pub pm25: f64,
    /// Lower bound of the 95% confidence interval
    pub lower_95: f64,
    /// Upper bound of the 95% confidence interval
    pub upper_95: f64,
}

/// Hourly forecast series for a city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// City the forecast is for
    pub city: String,
    /// Requested forecast horizon in hours
    pub duration_hours: u32,
    /// One point per forecast hour
    pub predictions: Vec<PredictionPoint>,
}

/// One day of the aggregated weekly forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Calendar date of the aggregate
    pub date: String,
    /// Mean predicted PM2.5 over the day
    pub avg_pm25: f64,
    /// Lowest predicted hourly PM2.5
    pub min_pm25: f64,
    /// Highest predicted hourly PM2.5
    pub max_pm25: f64,
}

/// 7-day aggregated forecast for a city
///
/// Fetched on demand for the weekly view; not routed through the cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyForecast {
    pub city: String,
    pub days: u32,
    pub daily_forecast: Vec<DailyForecast>,
}

/// A forecast is servable only if it contains at least one point
fn has_forecast_points(response: &PredictionResponse) -> bool {
    !response.predictions.is_empty()
}

/// Cache identity for a city's prediction series
pub fn cache_key(city: &str) -> CacheKey {
    CacheKey::new(ResourceKind::Prediction, city)
}

fn cache_config() -> CacheConfig<PredictionResponse> {
    CacheConfig::for_kind(ResourceKind::Prediction).with_validator(has_forecast_points)
}

/// Fetches the hourly forecast for a city through the response cache
///
/// Serves a stored series while it is younger than the prediction TTL;
/// otherwise calls the backend and caches the result if it carries at least
/// one point.
pub async fn fetch_predictions_cached(
    cache: &ResponseCache,
    api: &ApiClient,
    city: &str,
    duration_hours: u32,
) -> Result<PredictionResponse, ApiError> {
    cache
        .get_or_fetch(&cache_key(city), &cache_config(), || {
            api.predict(city, duration_hours)
        })
        .await
}
