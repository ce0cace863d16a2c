//! HTTP client for the air quality backend
//!
//! This module provides typed access to the backend's JSON endpoints: current
//! AQI, hourly PM2.5 predictions, weekly forecast aggregates, live pollutant
//! readings, and historical series.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::data::history::HistoryResponse;
use crate::data::live::CurrentAqi;
use crate::data::pollutants::PollutantReading;
use crate::data::predictions::{PredictionResponse, WeeklyForecast};

/// Default backend address when no base URL is configured
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Errors that can occur when talking to the backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("API {path} failed: {status} - {body}")]
    Status {
        path: String,
        status: StatusCode,
        body: String,
    },

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Client for the air quality backend API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Creates a client pointing at the default backend address
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (deployments, testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetches the latest PM2.5 reading and AQI category for a city
    pub async fn current_aqi(&self, city: &str) -> Result<CurrentAqi, ApiError> {
        self.fetch_json(&format!("/current_aqi?city={}", urlencoded(city)))
            .await
    }

    /// Fetches hourly PM2.5 predictions with confidence intervals
    pub async fn predict(
        &self,
        city: &str,
        duration_hours: u32,
    ) -> Result<PredictionResponse, ApiError> {
        self.fetch_json(&format!(
            "/predict?city={}&duration_hours={}",
            urlencoded(city),
            duration_hours
        ))
        .await
    }

    /// Fetches the 7-day aggregated PM2.5 forecast
    pub async fn weekly_forecast(&self, city: &str) -> Result<WeeklyForecast, ApiError> {
        self.fetch_json(&format!("/forecast/weekly?city={}", urlencoded(city)))
            .await
    }

    /// Fetches the live pollutant breakdown for a city
    pub async fn pollutants(&self, city: &str) -> Result<PollutantReading, ApiError> {
        self.fetch_json(&format!("/pollutants?city={}", urlencoded(city)))
            .await
    }

    /// Fetches the historical PM2.5 series for the last `days` days
    pub async fn history(&self, city: &str, days: u32) -> Result<HistoryResponse, ApiError> {
        self.fetch_json(&format!(
            "/history?city={}&days={}",
            urlencoded(city),
            days
        ))
        .await
    }

    /// Performs a GET against the backend and decodes the JSON body
    ///
    /// Non-success statuses surface as [`ApiError::Status`] carrying the body
    /// text, which the backend uses for its error messages.
    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status,
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

/// URL-encodes a string for use in query parameters
fn urlencoded(s: &str) -> String {
    s.replace(' ', "%20").replace('\'', "%27")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urlencoded_escapes_spaces_and_quotes() {
        assert_eq!(urlencoded("New Delhi"), "New%20Delhi");
        assert_eq!(urlencoded("King's Town"), "King%27s%20Town");
        assert_eq!(urlencoded("Mumbai"), "Mumbai");
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let client = ApiClient::with_base_url("http://example.com/");
        assert_eq!(client.base_url, "http://example.com");
    }
}
