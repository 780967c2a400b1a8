use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::fetcher::{WeatherFetcher, WeatherRecord};

/// Cities shown when no city was requested, in display order.
pub const DEFAULT_CITIES: [&str; 7] = [
    "Paris",
    "New York",
    "Tokyo",
    "London",
    "Berlin",
    "Fès",
    "Casablanca",
];

/// Message shown in place of weather data when a lookup fails
pub const CITY_NOT_FOUND_MESSAGE: &str = "Ville introuvable, essayez à nouveau.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherError {
    pub city: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryResult {
    Weather(WeatherRecord),
    Error(WeatherError),
}

impl QueryResult {
    pub fn city(&self) -> &str {
        match self {
            QueryResult::Weather(record) => &record.city,
            QueryResult::Error(err) => &err.city,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, QueryResult::Error(_))
    }
}

/// Resolve which cities to query.
///
/// An empty or absent request falls back to [`DEFAULT_CITIES`]; anything else
/// replaces the defaults with exactly that value, passed through unchanged.
pub fn resolve_cities(requested: Option<&str>) -> Vec<String> {
    match requested.filter(|city| !city.is_empty()) {
        Some(city) => vec![city.to_string()],
        None => DEFAULT_CITIES.iter().map(|city| city.to_string()).collect(),
    }
}

#[derive(Clone)]
pub struct WeatherService {
    fetcher: WeatherFetcher,
}

impl WeatherService {
    pub fn new(fetcher: WeatherFetcher) -> Self {
        Self { fetcher }
    }

    /// Look up every resolved city in order, one request at a time.
    ///
    /// Never fails: a city whose lookup fails gets a [`WeatherError`] entry
    /// and the remaining cities are still queried.
    #[instrument(skip(self))]
    pub async fn handle(&self, requested: Option<&str>) -> Vec<QueryResult> {
        let cities = resolve_cities(requested);
        debug!("Querying weather for {} cities", cities.len());

        let mut results = Vec::with_capacity(cities.len());
        for city in cities {
            match self.fetcher.fetch(&city).await {
                Ok(record) => results.push(QueryResult::Weather(record)),
                Err(_) => {
                    warn!("No weather data for {}, showing error entry", city);
                    results.push(QueryResult::Error(WeatherError {
                        city,
                        message: CITY_NOT_FOUND_MESSAGE.to_string(),
                    }));
                }
            }
        }

        let failed = results.iter().filter(|r| r.is_error()).count();
        info!(
            "Weather lookup complete: {} ok, {} failed",
            results.len() - failed,
            failed
        );

        results
    }
}
