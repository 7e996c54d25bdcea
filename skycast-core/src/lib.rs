//! Core library for the `skycast` weather client.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weather provider abstraction and its OpenWeather implementation
//! - Shared domain models (snapshots, forecast series, favorites)
//! - Pure derivation layers: unit conversion, condition classification,
//!   forecast aggregation, display formatting, and the scripted assistant
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or
//! services. Everything outside [`provider`] is synchronous and side-effect
//! free: derived values are pure functions of a fetched payload and the unit
//! preferences.

pub mod assistant;
pub mod classify;
pub mod config;
pub mod favorites;
pub mod forecast;
pub mod model;
pub mod provider;
pub mod units;
pub mod view;

pub use classify::ConditionBucket;
pub use config::Config;
pub use favorites::FavoriteList;
pub use forecast::{DailyForecastPoint, HourlyForecastPoint};
pub use model::{FavoriteCity, ForecastEntry, RawForecastSeries, WeatherSnapshot};
pub use provider::{FetchError, WeatherProvider, openweather::OpenWeatherProvider};
pub use units::{UnitPreferences, UnitSystem};
