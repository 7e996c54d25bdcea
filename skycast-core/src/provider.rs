use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{RawForecastSeries, WeatherSnapshot};
use crate::units::UnitSystem;

pub mod openweather;

/// Failure taxonomy of the fetch boundary. Derivation code never sees these:
/// a failed fetch is terminal until the caller re-triggers it, and previously
/// displayed data stays untouched.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("city '{city}' was not found")]
    CityNotFound { city: String },

    #[error("weather API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed weather response: {0}")]
    MalformedResponse(String),
}

/// Source of weather data, the only asynchronous and fallible seam in the
/// crate. Production code talks to OpenWeather; tests substitute stubs.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch the current conditions for a city by name.
    async fn fetch_current(
        &self,
        city: &str,
        units: UnitSystem,
    ) -> Result<WeatherSnapshot, FetchError>;

    /// Fetch the 5-day/3-hour forecast series for a city by name.
    async fn fetch_forecast(
        &self,
        city: &str,
        units: UnitSystem,
    ) -> Result<RawForecastSeries, FetchError>;
}
