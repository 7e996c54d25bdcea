//! Display-ready strings derived from a snapshot and the unit preferences.
//!
//! Everything here is pure formatting; the numbers come from [`crate::units`]
//! and [`crate::classify`].

use chrono::{DateTime, FixedOffset, Utc};

use crate::classify;
use crate::model::WeatherSnapshot;
use crate::units::{self, TemperatureUnit, UnitPreferences};

/// The "air conditions" block: one formatted string per tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirConditions {
    pub real_feel: String,
    pub wind: String,
    pub wind_direction: String,
    pub humidity: String,
    pub uv_index: i64,
    pub uv_band: &'static str,
    pub visibility: String,
    pub pressure: String,
    pub temp_range: String,
    pub sunrise: String,
    pub sunset: String,
    pub rain_chance: String,
}

/// Format a temperature in the preferred unit, e.g. "20°C".
pub fn format_temp(celsius: f64, unit: TemperatureUnit) -> String {
    format!("{}{}", units::temperature(celsius, unit), unit.suffix())
}

/// Format an epoch timestamp as a wall-clock time in the given UTC offset.
/// Out-of-range input renders as "--:--".
pub fn format_clock(epoch_s: i64, utc_offset_secs: i32, use_24h: bool) -> String {
    let offset =
        FixedOffset::east_opt(utc_offset_secs).unwrap_or_else(|| FixedOffset::east_opt(0).unwrap());
    let Some(time) = DateTime::<Utc>::from_timestamp(epoch_s, 0) else {
        return "--:--".to_string();
    };
    let local = time.with_timezone(&offset);
    if use_24h {
        local.format("%H:%M").to_string()
    } else {
        local.format("%I:%M %p").to_string()
    }
}

/// Derive the full air-conditions block from a snapshot.
pub fn air_conditions(snapshot: &WeatherSnapshot, prefs: &UnitPreferences) -> AirConditions {
    let uv_index = classify::uv_estimate(snapshot.pressure_hpa);
    let pressure_value = units::pressure(snapshot.pressure_hpa, prefs.pressure);

    let visibility = match snapshot.visibility_m {
        Some(meters) => format!(
            "{} {}",
            units::distance(meters as f64, prefs.distance),
            prefs.distance.suffix()
        ),
        None => "--".to_string(),
    };

    let wind_direction = match snapshot.wind_dir_deg {
        Some(deg) if deg.is_finite() => format!("{}°", deg.round() as i64),
        _ => "--".to_string(),
    };

    AirConditions {
        real_feel: format_temp(snapshot.feels_like_c, prefs.temperature),
        wind: format!(
            "{} {}",
            units::wind_speed(snapshot.wind_speed_ms, prefs.wind_speed),
            prefs.wind_speed.suffix()
        ),
        wind_direction,
        humidity: format!("{}%", snapshot.humidity_pct),
        uv_index,
        uv_band: classify::uv_band(uv_index),
        visibility,
        pressure: format!(
            "{:.*} {}",
            prefs.pressure.decimals(),
            pressure_value,
            prefs.pressure.suffix()
        ),
        temp_range: format!(
            "{} / {}",
            format_temp(snapshot.temp_max_c, prefs.temperature),
            format_temp(snapshot.temp_min_c, prefs.temperature)
        ),
        sunrise: format_clock(
            snapshot.sunrise_epoch_s,
            snapshot.utc_offset_secs,
            prefs.use_24h_clock,
        ),
        sunset: format_clock(
            snapshot.sunset_epoch_s,
            snapshot.utc_offset_secs,
            prefs.use_24h_clock,
        ),
        rain_chance: format!("{}%", classify::rain_chance_pct(&snapshot.condition_main)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{DistanceUnit, PressureUnit, WindSpeedUnit};

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            city_id: 1,
            location_name: "Lisbon".to_string(),
            temp_c: 20.0,
            feels_like_c: 18.4,
            humidity_pct: 65,
            pressure_hpa: 1013.0,
            temp_min_c: 17.0,
            temp_max_c: 23.0,
            condition_main: "Clouds".to_string(),
            condition_description: "broken clouds".to_string(),
            wind_speed_ms: 10.0,
            wind_dir_deg: Some(250.0),
            visibility_m: Some(10_000),
            // 2024-06-10 06:30:00 UTC and 20:45:00 UTC
            sunrise_epoch_s: 1_718_001_000,
            sunset_epoch_s: 1_718_052_300,
            utc_offset_secs: 3600,
        }
    }

    #[test]
    fn clock_honors_offset_and_format() {
        assert_eq!(format_clock(1_718_001_000, 3600, true), "07:30");
        assert_eq!(format_clock(1_718_001_000, 3600, false), "07:30 AM");
        assert_eq!(format_clock(1_718_052_300, 3600, true), "21:45");
        assert_eq!(format_clock(1_718_052_300, 3600, false), "09:45 PM");
    }

    #[test]
    fn air_conditions_with_metric_defaults() {
        let air = air_conditions(&snapshot(), &UnitPreferences::default());
        assert_eq!(air.real_feel, "18°C");
        assert_eq!(air.wind, "36 km/h");
        assert_eq!(air.wind_direction, "250°");
        assert_eq!(air.humidity, "65%");
        assert_eq!(air.uv_index, 10);
        assert_eq!(air.uv_band, "Very High");
        assert_eq!(air.visibility, "10 km");
        assert_eq!(air.pressure, "1013 hPa");
        assert_eq!(air.temp_range, "23°C / 17°C");
        assert_eq!(air.sunrise, "07:30");
        assert_eq!(air.sunset, "21:45");
        assert_eq!(air.rain_chance, "20%");
    }

    #[test]
    fn air_conditions_follow_the_preferences() {
        let prefs = UnitPreferences {
            temperature: TemperatureUnit::Fahrenheit,
            wind_speed: WindSpeedUnit::Knots,
            pressure: PressureUnit::Inches,
            distance: DistanceUnit::Miles,
            use_24h_clock: false,
        };
        let air = air_conditions(&snapshot(), &prefs);
        assert_eq!(air.real_feel, "65°F");
        assert_eq!(air.wind, "19 knots");
        assert_eq!(air.pressure, "29.91 inches");
        assert_eq!(air.visibility, "6.2 mi");
        assert_eq!(air.sunrise, "07:30 AM");
    }

    #[test]
    fn missing_optionals_render_as_dashes() {
        let mut snap = snapshot();
        snap.visibility_m = None;
        snap.wind_dir_deg = None;
        let air = air_conditions(&snap, &UnitPreferences::default());
        assert_eq!(air.visibility, "--");
        assert_eq!(air.wind_direction, "--");
    }

    #[test]
    fn out_of_range_timestamp_renders_as_placeholder() {
        assert_eq!(format_clock(i64::MAX, 0, true), "--:--");
    }
}
