pub mod weather_service;

pub use weather_service::{
    resolve_cities, QueryResult, WeatherError, WeatherService, CITY_NOT_FOUND_MESSAGE,
    DEFAULT_CITIES,
};
