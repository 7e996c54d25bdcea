use serde::{Deserialize, Serialize};

/// Unit system accepted by the upstream API's `units` query parameter.
///
/// This is a wire-level concern, distinct from the user-facing unit
/// preferences below: snapshots are always requested in metric so that the
/// stored values stay in the API's native units (°C, m/s, hPa, meters) and
/// conversion happens locally at display time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// System implied by a temperature preference: Fahrenheit reads as
    /// imperial, everything else as metric.
    pub fn for_temperature(unit: TemperatureUnit) -> Self {
        match unit {
            TemperatureUnit::Fahrenheit => UnitSystem::Imperial,
            TemperatureUnit::Celsius => UnitSystem::Metric,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WindSpeedUnit {
    #[default]
    KmPerHour,
    MetersPerSecond,
    Knots,
}

impl WindSpeedUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            WindSpeedUnit::KmPerHour => "km/h",
            WindSpeedUnit::MetersPerSecond => "m/s",
            WindSpeedUnit::Knots => "knots",
        }
    }
}

impl std::fmt::Display for WindSpeedUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PressureUnit {
    #[default]
    HectoPascal,
    Inches,
    KiloPascal,
    Millimeters,
}

impl PressureUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            PressureUnit::HectoPascal => "hPa",
            PressureUnit::Inches => "inches",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::Millimeters => "mm",
        }
    }

    /// Decimal places the converted value is quantized to.
    pub fn decimals(&self) -> usize {
        match self {
            PressureUnit::HectoPascal | PressureUnit::Millimeters => 0,
            PressureUnit::Inches => 2,
            PressureUnit::KiloPascal => 1,
        }
    }
}

impl std::fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Miles,
}

impl DistanceUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
        }
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DistanceUnit::Kilometers => "Kilometers",
            DistanceUnit::Miles => "Miles",
        })
    }
}

/// User-selected display units, threaded explicitly into every derivation
/// call. The metric variant of each enum is its `Default`, so an unspecified
/// preference deterministically falls back to the metric conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPreferences {
    #[serde(default)]
    pub temperature: TemperatureUnit,
    #[serde(default)]
    pub wind_speed: WindSpeedUnit,
    #[serde(default)]
    pub pressure: PressureUnit,
    #[serde(default)]
    pub distance: DistanceUnit,
    #[serde(default = "default_24h_clock")]
    pub use_24h_clock: bool,
}

fn default_24h_clock() -> bool {
    true
}

impl Default for UnitPreferences {
    fn default() -> Self {
        Self {
            temperature: TemperatureUnit::default(),
            wind_speed: WindSpeedUnit::default(),
            pressure: PressureUnit::default(),
            distance: DistanceUnit::default(),
            use_24h_clock: true,
        }
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Convert a temperature in °C to the requested display unit, rounded to a
/// whole degree.
pub fn temperature(celsius: f64, unit: TemperatureUnit) -> i64 {
    let celsius = sanitize(celsius);
    let converted = match unit {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
    };
    converted.round() as i64
}

/// Convert a wind speed in m/s to the requested display unit, rounded to a
/// whole number.
pub fn wind_speed(meters_per_second: f64, unit: WindSpeedUnit) -> i64 {
    let v = sanitize(meters_per_second);
    let converted = match unit {
        WindSpeedUnit::KmPerHour => v * 3.6,
        WindSpeedUnit::Knots => v * 1.944,
        WindSpeedUnit::MetersPerSecond => v,
    };
    converted.round() as i64
}

/// Convert a pressure in hPa to the requested display unit. Inches of
/// mercury keep two decimals and kPa one; the other units are integral.
pub fn pressure(hectopascals: f64, unit: PressureUnit) -> f64 {
    let p = sanitize(hectopascals);
    match unit {
        PressureUnit::HectoPascal => p.round(),
        PressureUnit::Inches => (p * 0.02953 * 100.0).round() / 100.0,
        PressureUnit::KiloPascal => (p * 0.1 * 10.0).round() / 10.0,
        PressureUnit::Millimeters => (p * 0.75006).round(),
    }
}

/// Convert a distance in meters to the requested display unit, quantized to
/// one decimal place.
pub fn distance(meters: f64, unit: DistanceUnit) -> f64 {
    let m = sanitize(meters);
    match unit {
        DistanceUnit::Kilometers => (m / 1000.0 * 10.0).round() / 10.0,
        DistanceUnit::Miles => (m * 0.000621371 * 10.0).round() / 10.0,
    }
}
