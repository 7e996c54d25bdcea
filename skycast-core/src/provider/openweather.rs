use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::model::{ForecastEntry, RawForecastSeries, WeatherSnapshot};
use crate::units::UnitSystem;

use super::{FetchError, WeatherProvider};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Client for the OpenWeather "current weather" and "5 day / 3 hour"
/// endpoints.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the provider at a different host; tests use this to talk to a
    /// local mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
        units: UnitSystem,
    ) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!(%url, city, units = units.as_str(), "requesting weather data");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", units.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::CityNotFound {
                city: city.to_string(),
            });
        }

        let body = res.text().await?;
        if !status.is_success() {
            return Err(FetchError::Api {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|err| FetchError::MalformedResponse(err.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    pressure: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
    deg: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    id: i64,
    name: String,
    timezone: i32,
    visibility: Option<i64>,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    sys: OwSys,
}

#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwForecastMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
    timezone: i32,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    list: Vec<OwForecastEntry>,
}

fn condition(weather: &[OwWeather]) -> (String, String) {
    weather
        .first()
        .map(|w| (w.main.clone(), w.description.clone()))
        .unwrap_or_else(|| ("Unknown".to_string(), String::new()))
}

#[async_trait::async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch_current(
        &self,
        city: &str,
        units: UnitSystem,
    ) -> Result<WeatherSnapshot, FetchError> {
        let parsed: OwCurrentResponse = self.get_json("weather", city, units).await?;
        let (condition_main, condition_description) = condition(&parsed.weather);

        Ok(WeatherSnapshot {
            city_id: parsed.id,
            location_name: parsed.name,
            temp_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            pressure_hpa: parsed.main.pressure,
            temp_min_c: parsed.main.temp_min,
            temp_max_c: parsed.main.temp_max,
            condition_main,
            condition_description,
            wind_speed_ms: parsed.wind.speed,
            wind_dir_deg: parsed.wind.deg,
            visibility_m: parsed.visibility,
            sunrise_epoch_s: parsed.sys.sunrise,
            sunset_epoch_s: parsed.sys.sunset,
            utc_offset_secs: parsed.timezone,
        })
    }

    async fn fetch_forecast(
        &self,
        city: &str,
        units: UnitSystem,
    ) -> Result<RawForecastSeries, FetchError> {
        let parsed: OwForecastResponse = self.get_json("forecast", city, units).await?;

        let entries = parsed
            .list
            .into_iter()
            .map(|item| {
                let (condition_main, condition_description) = condition(&item.weather);
                ForecastEntry {
                    epoch_s: item.dt,
                    temp: item.main.temp,
                    temp_min: item.main.temp_min,
                    temp_max: item.main.temp_max,
                    condition_main,
                    condition_description,
                }
            })
            .collect();

        Ok(RawForecastSeries {
            city_name: parsed.city.name,
            utc_offset_secs: parsed.city.timezone,
            entries,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
