use std::env;
use std::fmt;

pub const DEFAULT_WEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_UNITS: &str = "metric";
pub const DEFAULT_LANG: &str = "fr";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("OPENWEATHER_API_KEY must be set to a non-empty value")]
    MissingApiKey,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub weather: WeatherApiConfig,
}

/// Settings for the upstream weather provider.
#[derive(Clone)]
pub struct WeatherApiConfig {
    pub api_key: String,
    pub base_url: String,
    pub units: String,
    pub lang: String,
    pub timeout_secs: u64,
}

impl WeatherApiConfig {
    /// Provider settings with default units, language and timeout
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            units: DEFAULT_UNITS.to_string(),
            lang: DEFAULT_LANG.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

// Keeps the key out of the startup log line.
impl fmt::Debug for WeatherApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherApiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("units", &self.units)
            .field("lang", &self.lang)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("OPENWEATHER_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            weather: WeatherApiConfig {
                api_key,
                base_url: env::var("WEATHER_API_URL")
                    .unwrap_or_else(|_| DEFAULT_WEATHER_API_URL.to_string()),
                units: env::var("WEATHER_UNITS").unwrap_or_else(|_| DEFAULT_UNITS.to_string()),
                lang: env::var("WEATHER_LANG").unwrap_or_else(|_| DEFAULT_LANG.to_string()),
                timeout_secs: env::var("WEATHER_TIMEOUT_SECS")
                    .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
                    .parse()
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            },
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 7] = [
        "OPENWEATHER_API_KEY",
        "WEATHER_API_URL",
        "WEATHER_UNITS",
        "WEATHER_LANG",
        "WEATHER_TIMEOUT_SECS",
        "SERVER_HOST",
        "SERVER_PORT",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_missing_api_key_is_an_error() {
        clear_env();
        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    #[serial]
    fn test_blank_api_key_is_an_error() {
        clear_env();
        env::set_var("OPENWEATHER_API_KEY", "   ");
        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_defaults_applied() {
        clear_env();
        env::set_var("OPENWEATHER_API_KEY", "secret-key");

        let config = Config::from_env().unwrap();
        assert_eq!(config.weather.api_key, "secret-key");
        assert_eq!(config.weather.base_url, DEFAULT_WEATHER_API_URL);
        assert_eq!(config.weather.units, "metric");
        assert_eq!(config.weather.lang, "fr");
        assert_eq!(config.weather.timeout_secs, 10);
        assert_eq!(config.server_addr(), "0.0.0.0:8080");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_overrides_and_bad_numbers() {
        clear_env();
        env::set_var("OPENWEATHER_API_KEY", "secret-key");
        env::set_var("WEATHER_API_URL", "http://localhost:9999");
        env::set_var("WEATHER_TIMEOUT_SECS", "not-a-number");
        env::set_var("SERVER_PORT", "3000");

        let config = Config::from_env().unwrap();
        assert_eq!(config.weather.base_url, "http://localhost:9999");
        assert_eq!(config.weather.timeout_secs, 10);
        assert_eq!(config.server_port, 3000);

        clear_env();
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let weather = WeatherApiConfig::new("secret-key".to_string(), "http://x".to_string());
        let printed = format!("{:?}", weather);
        assert!(!printed.contains("secret-key"));
        assert!(printed.contains("<redacted>"));
    }
}
