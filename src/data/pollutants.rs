//! Live pollutant breakdown models and cached fetch
//!
//! Pollutant readings change faster than forecasts, so they get the shorter
//! TTL from the resource table. Every field is optional: stations report
//! different subsets, and the backend passes through whatever it has. A
//! reading with no known pollutant at all is treated as invalid and never
//! cached.

use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError};
use crate::cache::{CacheConfig, CacheKey, ResourceKind, ResponseCache};

/// Pollutant concentrations for a city, in µg/m³ (CO in mg/m³)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutantReading {
    /// City the reading is for
    pub city: Option<String>,
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
    pub no2: Option<f64>,
    pub so2: Option<f64>,
    pub o3: Option<f64>,
    pub co: Option<f64>,
}

impl PollutantReading {
    /// Pollutant name/value pairs for the fields that are present
    pub fn known_pollutants(&self) -> Vec<(&'static str, f64)> {
        [
            ("PM2.5", self.pm25),
            ("PM10", self.pm10),
            ("NO2", self.no2),
            ("SO2", self.so2),
            ("O3", self.o3),
            ("CO", self.co),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
    }
}

/// A reading is servable only if at least one known pollutant is present
fn has_known_pollutant(reading: &PollutantReading) -> bool {
    reading.pm25.is_some()
        || reading.pm10.is_some()
        || reading.no2.is_some()
        || reading.so2.is_some()
        || reading.o3.is_some()
        || reading.co.is_some()
}

/// Cache identity for a city's pollutant reading
pub fn cache_key(city: &str) -> CacheKey {
    CacheKey::new(ResourceKind::Pollutants, city)
}

fn cache_config() -> CacheConfig<PollutantReading> {
    CacheConfig::for_kind(ResourceKind::Pollutants).with_validator(has_known_pollutant)
}

/// Fetches the pollutant breakdown for a city through the response cache
pub async fn fetch_pollutants_cached(
    cache: &ResponseCache,
    api: &ApiClient,
    city: &str,
) -> Result<PollutantReading, ApiError> {
    cache
        .get_or_fetch(&cache_key(city), &cache_config(), || api.pollutants(city))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_reading() -> PollutantReading {
        PollutantReading {
            city: Some("Delhi".to_string()),
            pm25: None,
            pm10: None,
            no2: None,
            so2: None,
            o3: None,
            co: None,
        }
    }

    #[test]
    fn test_reading_with_no_pollutants_is_invalid() {
        assert!(!has_known_pollutant(&empty_reading()));
    }

    #[test]
    fn test_any_single_pollutant_makes_reading_valid() {
        let mut co_only = empty_reading();
        co_only.co = Some(0.8);
        assert!(has_known_pollutant(&co_only));

        let mut no2_only = empty_reading();
        no2_only.no2 = Some(41.0);
        assert!(has_known_pollutant(&no2_only));
    }

    #[test]
    fn test_known_pollutants_lists_present_fields_only() {
        let reading = PollutantReading {
            city: Some("Delhi".to_string()),
            pm25: Some(82.5),
            pm10: None,
            no2: Some(41.0),
            so2: None,
            o3: None,
            co: None,
        };

        let known = reading.known_pollutants();
        assert_eq!(known.len(), 2);
        assert_eq!(known[0].0, "PM2.5");
        assert_eq!(known[1].0, "NO2");
    }

    #[test]
    fn test_cache_config_uses_pollutants_ttl() {
        let config = cache_config();
        assert_eq!(config.ttl, ResourceKind::Pollutants.ttl());
    }

    #[test]
    fn test_cache_key_is_city_scoped() {
        assert_eq!(cache_key("Chennai").storage_key(), "v1_pollutants_chennai");
    }

    #[test]
    fn test_parses_partial_backend_response() {
        // Stations routinely omit fields; missing keys must parse as None
        let json = r#"{"city": "Delhi", "pm25": 82.5, "no2": 41.0}"#;
        let reading: PollutantReading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.pm25, Some(82.5));
        assert_eq!(reading.no2, Some(41.0));
        assert!(reading.pm10.is_none());
        assert!(reading.co.is_none());
        assert!(has_known_pollutant(&reading));
    }
}
