//! Command-line interface parsing for City Air Quality CLI
//!
//! This module handles parsing of CLI arguments using clap, including city
//! selection, the history window, and cache control flags.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::data::{get_city_by_name, City};

/// Largest history window the backend will serve
const MAX_HISTORY_DAYS: u32 = 90;

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified city has no monitoring coverage
    #[error("Unsupported city: '{0}'. Supported cities: Delhi, Mumbai, Bengaluru, Hyderabad, Chennai, Kolkata")]
    UnsupportedCity(String),

    /// The history window is out of range
    #[error("History window must be between 1 and 90 days, got {0}")]
    InvalidHistoryDays(u32),

    /// The forecast horizon is out of range
    #[error("Forecast horizon must be between 1 and 168 hours, got {0}")]
    InvalidForecastHours(u32),
}

/// City Air Quality CLI - view air quality conditions and PM2.5 forecasts
#[derive(Parser, Debug)]
#[command(name = "cityaq")]
#[command(about = "City air quality conditions and PM2.5 forecasts")]
#[command(version)]
pub struct Cli {
    /// City to report on
    #[arg(default_value = "Delhi")]
    pub city: String,

    /// Number of past days of history to include
    #[arg(long, value_name = "DAYS", default_value_t = 7)]
    pub history_days: u32,

    /// Forecast horizon in hours
    #[arg(long, value_name = "HOURS", default_value_t = 24)]
    pub forecast_hours: u32,

    /// Include the 7-day aggregated forecast
    #[arg(long)]
    pub weekly: bool,

    /// Drop the city's cached entries before fetching
    #[arg(long)]
    pub fresh: bool,

    /// Backend base URL (defaults to the local backend)
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Directory for the response cache (defaults to the XDG cache path)
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,
}

/// Configuration derived from validated CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// The resolved city entry
    pub city: &'static City,
    /// Validated history window in days
    pub history_days: u32,
    /// Validated forecast horizon in hours
    pub forecast_hours: u32,
    /// Whether to include the weekly aggregate
    pub weekly: bool,
    /// Whether to invalidate the city's cache entries first
    pub fresh: bool,
    /// Backend base URL override
    pub api_base: Option<String>,
    /// Cache directory override
    pub cache_dir: Option<PathBuf>,
}

impl StartupConfig {
    /// Validates parsed CLI arguments into a startup configuration.
    ///
    /// # Arguments
    /// * `cli` - The parsed CLI struct
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with the resolved city
    /// * `Err(CliError)` if the city is unsupported or a window is out of range
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let city = get_city_by_name(&cli.city)
            .ok_or_else(|| CliError::UnsupportedCity(cli.city.clone()))?;

        if cli.history_days == 0 || cli.history_days > MAX_HISTORY_DAYS {
            return Err(CliError::InvalidHistoryDays(cli.history_days));
        }

        if cli.forecast_hours == 0 || cli.forecast_hours > 168 {
            return Err(CliError::InvalidForecastHours(cli.forecast_hours));
        }

        Ok(StartupConfig {
            city,
            history_days: cli.history_days,
            forecast_hours: cli.forecast_hours,
            weekly: cli.weekly,
            fresh: cli.fresh,
            api_base: cli.api_base.clone(),
            cache_dir: cli.cache_dir.clone(),
        })
    }
}
