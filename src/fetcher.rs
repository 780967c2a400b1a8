use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use crate::config::WeatherApiConfig;
use crate::fetch_error::FetchError;

/// Current conditions for one city, as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub city: String,
    pub temperature: f64,
    pub description: String,
    pub wind_speed: f64,
    pub humidity: u8,
}

// Subset of the provider's `/weather` payload that we read
#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    main: MainSection,
    weather: Vec<ConditionSection>,
    wind: WindSection,
}

#[derive(Debug, Deserialize)]
struct MainSection {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct ConditionSection {
    description: String,
}

#[derive(Debug, Deserialize)]
struct WindSection {
    speed: f64,
}

#[derive(Clone)]
pub struct WeatherFetcher {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    units: String,
    lang: String,
}

impl WeatherFetcher {
    pub fn new(config: &WeatherApiConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            endpoint: format!("{}/weather", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            units: config.units.clone(),
            lang: config.lang.clone(),
        })
    }

    /// Fetch current weather for `city` with a single request.
    ///
    /// Every failure is logged here; callers only see the typed error.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch(&self, city: &str) -> Result<WeatherRecord, FetchError> {
        match self.request(city).await {
            Ok(record) => {
                debug!(
                    "Weather for {}: {:.1}°C, {}, wind {:.1} m/s, humidity {}%",
                    record.city, record.temperature, record.description, record.wind_speed, record.humidity
                );
                Ok(record)
            }
            Err(e) => {
                error!("Weather lookup failed for {}: {}", city, e);
                Err(e)
            }
        }
    }

    async fn request(&self, city: &str) -> Result<WeatherRecord, FetchError> {
        debug!("Sending HTTP request to weather API");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
                ("lang", self.lang.as_str()),
            ])
            .send()
            .await
            // The URL carries the API key, keep it out of the error text
            .map_err(|e| FetchError::Request(e.without_url()))?;

        let status = response.status();
        debug!("Received HTTP response with status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Request(e.without_url()))?;

        if status != StatusCode::OK {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_weather(city, &body)
    }
}

/// Build a [`WeatherRecord`] from a successful `/weather` response body.
pub fn parse_weather(city: &str, body: &str) -> Result<WeatherRecord, FetchError> {
    let response: CurrentWeatherResponse = serde_json::from_str(body)?;
    let condition = response
        .weather
        .into_iter()
        .next()
        .ok_or(FetchError::MissingCondition)?;

    Ok(WeatherRecord {
        city: city.to_string(),
        temperature: response.main.temp,
        description: condition.description,
        wind_speed: response.wind.speed,
        humidity: response.main.humidity,
    })
}
