//! Live AQI reading for a city
//!
//! The current reading is always fetched fresh; it is the one resource the
//! product never serves from the cache.

use serde::{Deserialize, Serialize};

use super::AqiCategory;

/// The latest PM2.5 reading and its AQI categorization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentAqi {
    /// City the reading is for
    pub city: String,
    /// Latest PM2.5 concentration
    pub pm25: f64,
    /// Observation timestamp, as rendered by the backend
    pub datetime: Option<String>,
    /// Category label assigned by the backend
    pub category: String,
    /// Display color hint assigned by the backend
    pub color: Option<String>,
}

impl CurrentAqi {
    /// Category band recomputed from the PM2.5 value
    ///
    /// The backend sends its own label; this gives callers the typed band for
    /// threshold logic without string matching.
    pub fn category_band(&self) -> AqiCategory {
        AqiCategory::from_pm25(self.pm25)
    }
}
