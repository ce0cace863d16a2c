//! Historical PM2.5 series models and cached fetch
//!
//! History is keyed by city AND day range: a 7-day and a 30-day series are
//! different resources and must never collide in the store. The series does
//! not change within the hour, so it shares the longer TTL with predictions.
//! There is no extra validity rule beyond the entry existing.

use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError};
use crate::cache::{CacheConfig, CacheKey, ResourceKind, ResponseCache};

/// One hourly PM2.5 observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySample {
    /// Observation timestamp, as rendered by the backend
    pub datetime: String,
    /// Observed PM2.5 concentration
    pub pm25: f64,
}

/// Historical series for a city over a day range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// City the series is for
    pub city: String,
    /// Number of past days covered
    pub days: u32,
    /// Hourly samples, oldest first
    pub samples: Vec<HistorySample>,
}

/// Cache identity for a city's history over `days` days
pub fn cache_key(city: &str, days: u32) -> CacheKey {
    CacheKey::new(ResourceKind::History, city).with_param(days)
}

fn cache_config() -> CacheConfig<HistoryResponse> {
    CacheConfig::for_kind(ResourceKind::History)
}

/// Fetches the historical series for a city through the response cache
pub async fn fetch_history_cached(
    cache: &ResponseCache,
    api: &ApiClient,
    city: &str,
    days: u32,
) -> Result<HistoryResponse, ApiError> {
    cache
        .get_or_fetch(&cache_key(city, days), &cache_config(), || {
            api.history(city, days)
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_range_is_part_of_cache_identity() {
        let week = cache_key("Delhi", 7);
        let month = cache_key("Delhi", 30);
        assert_ne!(week.storage_key(), month.storage_key());
    }

    #[test]
    fn test_cache_config_has_no_extra_validity_rule() {
        let config = cache_config();
        assert_eq!(config.ttl, ResourceKind::History.ttl());
        // Existence is enough; an empty series is still cacheable
        let empty = HistoryResponse {
            city: "Delhi".to_string(),
            days: 7,
            samples: vec![],
        };
        assert!((config.is_valid)(&empty));
    }

    #[test]
    fn test_parses_backend_response() {
        let json = r#"{
            "city": "Kolkata",
            "days": 7,
            "samples": [
                {"datetime": "2024-01-01 00:00:00", "pm25": 95.0},
                {"datetime": "2024-01-01 01:00:00", "pm25": 97.5}
            ]
        }"#;

        let history: HistoryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(history.city, "Kolkata");
        assert_eq!(history.samples.len(), 2);
        assert!((history.samples[1].pm25 - 97.5).abs() < 0.001);
    }
}
