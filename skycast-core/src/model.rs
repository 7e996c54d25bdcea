use serde::{Deserialize, Serialize};

/// One fetched current-weather reading for a location.
///
/// Immutable once constructed from an API response; a refresh replaces the
/// whole value. All quantities are in the API's native metric units; display
/// conversion happens in [`crate::units`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Upstream city id, the identity used by the favorites list.
    pub city_id: i64,
    pub location_name: String,
    pub temp_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub condition_main: String,
    pub condition_description: String,
    pub wind_speed_ms: f64,
    pub wind_dir_deg: Option<f64>,
    pub visibility_m: Option<i64>,
    pub sunrise_epoch_s: i64,
    pub sunset_epoch_s: i64,
    /// Offset of the location's local time from UTC, as reported upstream.
    pub utc_offset_secs: i32,
}

/// One 3-hour step of the 5-day forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub epoch_s: i64,
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub condition_main: String,
    pub condition_description: String,
}

/// Normalized 5-day/3-hour forecast response for one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawForecastSeries {
    pub city_name: String,
    pub utc_offset_secs: i32,
    pub entries: Vec<ForecastEntry>,
}

/// Entry of the favorites list. Snapshot is the last successful reading, if
/// any; a failed refresh leaves it alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteCity {
    pub id: String,
    pub display_name: String,
    pub last_known: Option<WeatherSnapshot>,
}

impl FavoriteCity {
    /// A favorite known only by name, before its first successful fetch.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            display_name: name,
            last_known: None,
        }
    }

    /// A favorite seeded from a fetched snapshot, keyed by the upstream id.
    pub fn from_snapshot(snapshot: WeatherSnapshot) -> Self {
        Self {
            id: snapshot.city_id.to_string(),
            display_name: snapshot.location_name.clone(),
            last_known: Some(snapshot),
        }
    }
}
