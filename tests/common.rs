#![allow(dead_code)]

use city_weather_service::config::WeatherApiConfig;
use city_weather_service::fetcher::WeatherFetcher;
use city_weather_service::services::WeatherService;
use mockito::{Matcher, Mock, ServerGuard};

pub const TEST_API_KEY: &str = "test-api-key";

pub const PARIS_BODY: &str = r#"{"main":{"temp":18.5,"humidity":60},"weather":[{"description":"clear sky"}],"wind":{"speed":3.2}}"#;

/// Fetcher pointed at the mock server
pub fn test_fetcher(server: &ServerGuard) -> WeatherFetcher {
    let config = WeatherApiConfig::new(TEST_API_KEY.to_string(), server.url());
    WeatherFetcher::new(&config).expect("Failed to create weather fetcher")
}

pub fn test_service(server: &ServerGuard) -> WeatherService {
    WeatherService::new(test_fetcher(server))
}

/// Body in the provider's format for the given values
pub fn weather_body(temp: f64, humidity: u8, description: &str, wind: f64) -> String {
    serde_json::json!({
        "main": { "temp": temp, "humidity": humidity },
        "weather": [ { "description": description } ],
        "wind": { "speed": wind },
    })
    .to_string()
}

/// Mock a 200 response for one city, matching every fixed query parameter
pub async fn mock_city(server: &mut ServerGuard, city: &str, body: &str) -> Mock {
    server
        .mock("GET", "/weather")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), city.into()),
            Matcher::UrlEncoded("appid".into(), TEST_API_KEY.into()),
            Matcher::UrlEncoded("units".into(), "metric".into()),
            Matcher::UrlEncoded("lang".into(), "fr".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}
