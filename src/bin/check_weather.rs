use clap::Parser;

use city_weather_service::config::{
    WeatherApiConfig, DEFAULT_LANG, DEFAULT_TIMEOUT_SECS, DEFAULT_UNITS, DEFAULT_WEATHER_API_URL,
};
use city_weather_service::fetcher::WeatherFetcher;
use city_weather_service::services::{QueryResult, WeatherService};

#[derive(Parser)]
#[command(name = "check-weather")]
#[command(about = "Look up current weather from the terminal", long_about = None)]
struct Cli {
    /// City to look up (default city list when omitted)
    city: Option<String>,

    /// Weather API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Weather API base URL
    #[arg(long, env = "WEATHER_API_URL", default_value = DEFAULT_WEATHER_API_URL)]
    api_url: String,

    /// Response language passed to the provider
    #[arg(long, env = "WEATHER_LANG", default_value = DEFAULT_LANG)]
    lang: String,

    /// Unit system passed to the provider
    #[arg(long, env = "WEATHER_UNITS", default_value = DEFAULT_UNITS)]
    units: String,

    /// Outbound request timeout in seconds
    #[arg(long, env = "WEATHER_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

impl Cli {
    /// Same provider settings the server builds from the environment
    fn weather_config(&self) -> WeatherApiConfig {
        WeatherApiConfig {
            api_key: self.api_key.clone(),
            base_url: self.api_url.clone(),
            units: self.units.clone(),
            lang: self.lang.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let service = WeatherService::new(WeatherFetcher::new(&cli.weather_config())?);
    let results = service.handle(cli.city.as_deref()).await;

    for result in &results {
        match result {
            QueryResult::Weather(record) => println!(
                "{:<12} {:>6.1}°C  {:<20} wind {:>4.1} m/s  humidity {:>3}%",
                record.city, record.temperature, record.description, record.wind_speed, record.humidity
            ),
            QueryResult::Error(err) => println!("{:<12} {}", err.city, err.message),
        }
    }

    let failed = results.iter().filter(|r| r.is_error()).count();
    println!("\n{} cities checked, {} failed", results.len(), failed);

    Ok(())
}
