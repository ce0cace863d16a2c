//! City Air Quality CLI - view air quality conditions for supported cities
//!
//! Fetches the live AQI reading, pollutant breakdown, PM2.5 forecast, and
//! recent history for a city and prints a plain-text report. Forecast,
//! pollutant, and history responses are served through an on-disk response
//! cache so repeated runs within the TTL window skip the network.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use cityaq::api::{ApiClient, ApiError};
use cityaq::cache::{CacheStore, FileStore, MemoryStore, ResponseCache};
use cityaq::cli::{Cli, StartupConfig};
use cityaq::data::{
    fetch_history_cached, fetch_pollutants_cached, fetch_predictions_cached, history, pollutants,
    predictions, AqiCategory, CurrentAqi, HistoryResponse, PollutantReading, PredictionResponse,
    WeeklyForecast,
};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so the report itself stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    let store: Arc<dyn CacheStore> = match &config.cache_dir {
        Some(dir) => Arc::new(FileStore::with_dir(dir.clone())),
        None => match FileStore::new() {
            Some(store) => Arc::new(store),
            None => {
                warn!("no usable cache directory, caching in memory for this run");
                Arc::new(MemoryStore::new())
            }
        },
    };
    let cache = ResponseCache::new(store);

    let api = match &config.api_base {
        Some(base) => ApiClient::with_base_url(base.clone()),
        None => ApiClient::new(),
    };

    let city = config.city.name;

    if config.fresh {
        cache.invalidate(&predictions::cache_key(city));
        cache.invalidate(&pollutants::cache_key(city));
        cache.invalidate(&history::cache_key(city, config.history_days));
    }

    // The live reading is always fetched fresh; the rest go through the cache
    let (current, forecast, reading, history) = futures::future::join4(
        api.current_aqi(city),
        fetch_predictions_cached(&cache, &api, city, config.forecast_hours),
        fetch_pollutants_cached(&cache, &api, city),
        fetch_history_cached(&cache, &api, city, config.history_days),
    )
    .await;

    println!("Air quality for {}", city);
    println!("{}", "=".repeat(18 + city.len()));

    print_section("Current", current, print_current);
    print_section("Pollutants", reading, print_pollutants);
    print_section("Forecast", forecast, print_forecast);
    print_section("History", history, print_history);

    if config.weekly {
        print_section("Weekly forecast", api.weekly_forecast(city).await, print_weekly);
    }

    ExitCode::SUCCESS
}

/// Prints one report section, or a one-line notice if its fetch failed
fn print_section<T>(title: &str, result: Result<T, ApiError>, print: fn(&T)) {
    println!();
    println!("{title}");
    println!("{}", "-".repeat(title.len()));
    match result {
        Ok(value) => print(&value),
        Err(err) => println!("  unavailable: {err}"),
    }
}

fn print_current(current: &CurrentAqi) {
    println!(
        "  PM2.5 {:.1} ug/m3 - {}",
        current.pm25,
        current.category_band().label()
    );
    if let Some(datetime) = &current.datetime {
        println!("  observed at {datetime}");
    }
}

fn print_pollutants(reading: &PollutantReading) {
    let known = reading.known_pollutants();
    if known.is_empty() {
        println!("  no pollutant data reported");
        return;
    }
    for (name, value) in known {
        println!("  {name:<6} {value:8.1}");
    }
}

fn print_forecast(forecast: &PredictionResponse) {
    if forecast.predictions.is_empty() {
        println!("  no forecast available");
        return;
    }
    for point in forecast.predictions.iter().take(12) {
        let label = point
            .datetime
            .clone()
            .unwrap_or_else(|| format!("+{}h", point.hour_index));
        println!(
            "  {label:<20} PM2.5 {:6.1}  ({:.1} - {:.1})  {}",
            point.pm25,
            point.lower_95,
            point.upper_95,
            AqiCategory::from_pm25(point.pm25).label()
        );
    }
    if forecast.predictions.len() > 12 {
        println!("  ... {} more hours", forecast.predictions.len() - 12);
    }
}

fn print_history(history: &HistoryResponse) {
    if history.samples.is_empty() {
        println!("  no samples in the last {} days", history.days);
        return;
    }
    let values: Vec<f64> = history.samples.iter().map(|s| s.pm25).collect();
    let avg = values.iter().sum::<f64>() / values.len() as f64;
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    println!(
        "  last {} days: {} samples, PM2.5 avg {:.1}, min {:.1}, max {:.1}",
        history.days,
        history.samples.len(),
        avg,
        min,
        max
    );
}

fn print_weekly(weekly: &WeeklyForecast) {
    for day in &weekly.daily_forecast {
        println!(
            "  {}  avg {:6.1}  ({:.1} - {:.1})",
            day.date, day.avg_pm25, day.min_pm25, day.max_pm25
        );
    }
}
