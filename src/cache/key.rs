//! Cache key construction for air quality resources
//!
//! Keys are built deterministically from the resource kind, a case-normalized
//! subject (city name), and an optional extra query parameter such as the
//! history day range. Each resource kind carries a schema version that is
//! embedded in the key, so bumping the version invalidates every stored entry
//! of that kind at once (used when a payload shape changes).

use std::fmt;
use std::time::Duration;

/// The categories of API responses that are cached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Hourly PM2.5 forecast for a city
    Prediction,
    /// Live pollutant breakdown for a city
    Pollutants,
    /// Historical PM2.5 series for a city and day range
    History,
}

impl ResourceKind {
    /// Short identifier used inside storage keys
    pub const fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Prediction => "prediction",
            ResourceKind::Pollutants => "pollutants",
            ResourceKind::History => "history",
        }
    }

    /// Maximum age before a stored entry of this kind is considered stale
    ///
    /// Predictions and history change slowly within the hour; pollutant
    /// readings are refreshed twice as often.
    pub const fn ttl(&self) -> Duration {
        match self {
            ResourceKind::Prediction => Duration::from_secs(60 * 60),
            ResourceKind::Pollutants => Duration::from_secs(30 * 60),
            ResourceKind::History => Duration::from_secs(60 * 60),
        }
    }

    /// Schema version embedded in storage keys for this kind
    ///
    /// Bump when the payload shape changes so stale entries written by older
    /// builds are never parsed. Predictions are at 2 after a malformed-payload
    /// fix invalidated the v1 entries.
    pub const fn schema_version(&self) -> u32 {
        match self {
            ResourceKind::Prediction => 2,
            ResourceKind::Pollutants => 1,
            ResourceKind::History => 1,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a cached response
///
/// Two logically identical queries always produce the same key, and two
/// distinct queries (different city, different day range) never collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKey {
    kind: ResourceKind,
    subject: String,
    param: Option<String>,
}

impl CacheKey {
    /// Creates a key for the given resource kind and subject (city name)
    ///
    /// The subject is normalized: trimmed, lowercased, spaces replaced with
    /// underscores, so "New Delhi" and "new delhi" address the same entry.
    pub fn new(kind: ResourceKind, subject: &str) -> Self {
        let subject = subject.trim().to_lowercase().replace(' ', "_");
        Self {
            kind,
            subject,
            param: None,
        }
    }

    /// Attaches an extra query parameter that is part of the resource identity
    ///
    /// History uses this for the day range, since a 7-day and a 30-day series
    /// for the same city are different resources.
    pub fn with_param(mut self, param: impl fmt::Display) -> Self {
        self.param = Some(param.to_string());
        self
    }

    /// The resource kind this key belongs to
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Renders the key as the string used in the backing store
    ///
    /// Format: `v{version}_{kind}_{subject}` with `_{param}` appended when an
    /// extra parameter is present, e.g. `v2_prediction_delhi` or
    /// `v1_history_delhi_7`.
    pub fn storage_key(&self) -> String {
        let mut key = format!(
            "v{}_{}_{}",
            self.kind.schema_version(),
            self.kind.as_str(),
            self.subject
        );
        if let Some(param) = &self.param {
            key.push('_');
            key.push_str(param);
        }
        key
    }
}
