//! Mapping from the API's free-text condition strings to display categories.
//!
//! Two matching strategies coexist on purpose: the coarse bucket and the icon
//! use case-insensitive substring priority (so "light rain" buckets as rainy),
//! while the rain-chance label matches the top-level condition category
//! exactly. Collapsing them into one scheme changes observable output.

use serde::{Deserialize, Serialize};

/// Coarse condition category used for icon-sized summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionBucket {
    Sunny,
    Cloudy,
    Rainy,
}

impl ConditionBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionBucket::Sunny => "sunny",
            ConditionBucket::Cloudy => "cloudy",
            ConditionBucket::Rainy => "rainy",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            ConditionBucket::Sunny => "\u{2600}",  // BLACK SUN WITH RAYS
            ConditionBucket::Cloudy => "\u{2601}", // CLOUD
            ConditionBucket::Rainy => "\u{1F327}", // CLOUD WITH RAIN
        }
    }
}

impl std::fmt::Display for ConditionBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket a condition string. Rain is checked before cloud, anything else is
/// treated as sunny.
pub fn bucket(condition: &str) -> ConditionBucket {
    let lower = condition.to_lowercase();
    if lower.contains("rain") {
        ConditionBucket::Rainy
    } else if lower.contains("cloud") {
        ConditionBucket::Cloudy
    } else {
        ConditionBucket::Sunny
    }
}

/// Icon selected for a condition string, one step finer than the bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionIcon {
    Rain,
    Thunderstorm,
    Snow,
    Fog,
    Cloud,
    Sun,
}

impl ConditionIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            ConditionIcon::Rain => "\u{1F327}",         // CLOUD WITH RAIN
            ConditionIcon::Thunderstorm => "\u{26C8}",  // THUNDER CLOUD AND RAIN
            ConditionIcon::Snow => "\u{2744}",          // SNOWFLAKE
            ConditionIcon::Fog => "\u{1F32B}",          // FOG
            ConditionIcon::Cloud => "\u{2601}",         // CLOUD
            ConditionIcon::Sun => "\u{2600}",           // BLACK SUN WITH RAYS
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConditionIcon::Rain => "rain",
            ConditionIcon::Thunderstorm => "thunderstorm",
            ConditionIcon::Snow => "snow",
            ConditionIcon::Fog => "fog",
            ConditionIcon::Cloud => "cloud",
            ConditionIcon::Sun => "sun",
        }
    }
}

/// Pick an icon by substring priority; first match wins.
pub fn icon(condition: &str) -> ConditionIcon {
    let lower = condition.to_lowercase();
    if lower.contains("rain") {
        ConditionIcon::Rain
    } else if lower.contains("thunderstorm") {
        ConditionIcon::Thunderstorm
    } else if lower.contains("snow") {
        ConditionIcon::Snow
    } else if lower.contains("mist") || lower.contains("fog") {
        ConditionIcon::Fog
    } else if lower.contains("cloud") {
        ConditionIcon::Cloud
    } else {
        ConditionIcon::Sun
    }
}

/// Discrete rain-chance label for a top-level condition category.
///
/// Not a forecast probability: a fixed table keyed on the exact category the
/// API reports ("Rain", "Drizzle", ...), unmatched categories read as 0.
pub fn rain_chance_pct(condition_main: &str) -> u8 {
    match condition_main.to_lowercase().as_str() {
        "rain" => 100,
        "thunderstorm" => 90,
        "snow" => 80,
        "drizzle" => 70,
        "mist" | "fog" => 40,
        "clouds" => 20,
        _ => 0,
    }
}

/// Stand-in for a UV reading, derived from surface pressure.
///
/// The free API tier exposes no UV data; the value shown is `pressure / 100`
/// rounded, kept for parity with the app this replaces. It is a placeholder,
/// not a meteorological UV index.
pub fn uv_estimate(pressure_hpa: f64) -> i64 {
    if !pressure_hpa.is_finite() {
        return 0;
    }
    (pressure_hpa / 100.0).round() as i64
}

/// Exposure band for a UV-style index value.
pub fn uv_band(index: i64) -> &'static str {
    match index {
        i64::MIN..=2 => "Low",
        3..=5 => "Moderate",
        6..=7 => "High",
        8..=10 => "Very High",
        _ => "Extreme",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_checks_rain_before_cloud() {
        assert_eq!(bucket("rain and clouds"), ConditionBucket::Rainy);
        assert_eq!(bucket("Clouds"), ConditionBucket::Cloudy);
        assert_eq!(bucket("Clear"), ConditionBucket::Sunny);
        assert_eq!(bucket("light RAIN"), ConditionBucket::Rainy);
    }

    #[test]
    fn icon_priority_order() {
        assert_eq!(icon("Thunderstorm"), ConditionIcon::Thunderstorm);
        assert_eq!(icon("thunderstorm with light rain"), ConditionIcon::Rain);
        assert_eq!(icon("Snow"), ConditionIcon::Snow);
        assert_eq!(icon("Mist"), ConditionIcon::Fog);
        assert_eq!(icon("fog"), ConditionIcon::Fog);
        assert_eq!(icon("broken clouds"), ConditionIcon::Cloud);
        assert_eq!(icon("Clear"), ConditionIcon::Sun);

        assert_eq!(icon("Thunderstorm").name(), "thunderstorm");
        assert_eq!(icon("Clear").name(), "sun");
    }

    #[test]
    fn rain_chance_is_an_exact_category_match() {
        assert_eq!(rain_chance_pct("Rain"), 100);
        assert_eq!(rain_chance_pct("Thunderstorm"), 90);
        assert_eq!(rain_chance_pct("Snow"), 80);
        assert_eq!(rain_chance_pct("Drizzle"), 70);
        assert_eq!(rain_chance_pct("Mist"), 40);
        assert_eq!(rain_chance_pct("Fog"), 40);
        assert_eq!(rain_chance_pct("Clouds"), 20);
        assert_eq!(rain_chance_pct("Clear"), 0);
        // substring of a known category is not a match
        assert_eq!(rain_chance_pct("light rain"), 0);
    }

    #[test]
    fn uv_estimate_tracks_pressure() {
        assert_eq!(uv_estimate(1013.0), 10);
        assert_eq!(uv_estimate(250.0), 3);
        assert_eq!(uv_estimate(f64::NAN), 0);
    }

    #[test]
    fn uv_bands() {
        assert_eq!(uv_band(0), "Low");
        assert_eq!(uv_band(2), "Low");
        assert_eq!(uv_band(3), "Moderate");
        assert_eq!(uv_band(5), "Moderate");
        assert_eq!(uv_band(7), "High");
        assert_eq!(uv_band(10), "Very High");
        assert_eq!(uv_band(11), "Extreme");
    }
}
