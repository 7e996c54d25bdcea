//! Scripted weather assistant.
//!
//! An ordered table of (keywords, responder) pairs, evaluated top to bottom
//! with case-insensitive substring matching; the first rule whose keyword
//! appears in the input wins. Stateless: the reply is a pure function of the
//! question, the current snapshot, and the unit preferences.

use crate::model::WeatherSnapshot;
use crate::units::{self, UnitPreferences};

/// Opening line shown before the first exchange.
pub const GREETING: &str = "Hello! I'm your weather assistant. How can I help you today?";

const NO_DATA: &str =
    "I'm sorry, I don't have access to the current weather data. Please try again later.";

const FALLBACK: &str =
    "I'm not sure I understand. Could you please rephrase your question about the weather?";

type Responder = fn(&WeatherSnapshot, &UnitPreferences) -> String;

/// Rules in priority order; the first matching keyword set answers.
const RULES: &[(&[&str], Responder)] = &[
    (&["temperature", "temp", "hot", "cold"], answer_temperature),
    (&["rain", "precipitation", "umbrella"], answer_rain),
    (&["wind", "breeze"], answer_wind),
    (&["humidity"], answer_humidity),
    (&["forecast", "tomorrow", "week"], answer_forecast),
    (&["hello", "hi", "hey"], answer_greeting),
];

fn answer_temperature(snapshot: &WeatherSnapshot, prefs: &UnitPreferences) -> String {
    let unit = prefs.temperature;
    format!(
        "The current temperature is {}{}. It feels like {}{}.",
        units::temperature(snapshot.temp_c, unit),
        unit.suffix(),
        units::temperature(snapshot.feels_like_c, unit),
        unit.suffix(),
    )
}

fn answer_rain(snapshot: &WeatherSnapshot, _prefs: &UnitPreferences) -> String {
    if snapshot.condition_main.to_lowercase().contains("rain") {
        "Yes, there's a chance of rain. I recommend carrying an umbrella.".to_string()
    } else {
        "No rain expected in the near future. You can leave your umbrella at home.".to_string()
    }
}

fn answer_wind(snapshot: &WeatherSnapshot, prefs: &UnitPreferences) -> String {
    let unit = prefs.wind_speed;
    format!(
        "The current wind speed is {} {}.",
        units::wind_speed(snapshot.wind_speed_ms, unit),
        unit.suffix(),
    )
}

fn answer_humidity(snapshot: &WeatherSnapshot, _prefs: &UnitPreferences) -> String {
    format!("The current humidity is {}%.", snapshot.humidity_pct)
}

fn answer_forecast(_snapshot: &WeatherSnapshot, _prefs: &UnitPreferences) -> String {
    "I can provide you with weather forecasts. Would you like to know about tomorrow's \
     weather or the weekly forecast?"
        .to_string()
}

fn answer_greeting(_snapshot: &WeatherSnapshot, _prefs: &UnitPreferences) -> String {
    "Hello! How can I help you with the weather today?".to_string()
}

/// Answer a free-text question about the currently loaded weather.
pub fn respond(
    input: &str,
    snapshot: Option<&WeatherSnapshot>,
    prefs: &UnitPreferences,
) -> String {
    let Some(snapshot) = snapshot else {
        return NO_DATA.to_string();
    };

    let lower = input.to_lowercase();
    for (keywords, responder) in RULES {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return responder(snapshot, prefs);
        }
    }

    FALLBACK.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{TemperatureUnit, WindSpeedUnit};

    fn snapshot(condition: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            city_id: 1,
            location_name: "Lisbon".to_string(),
            temp_c: 20.0,
            feels_like_c: 18.4,
            humidity_pct: 65,
            pressure_hpa: 1013.0,
            temp_min_c: 17.0,
            temp_max_c: 23.0,
            condition_main: condition.to_string(),
            condition_description: condition.to_lowercase(),
            wind_speed_ms: 10.0,
            wind_dir_deg: None,
            visibility_m: None,
            sunrise_epoch_s: 0,
            sunset_epoch_s: 0,
            utc_offset_secs: 0,
        }
    }

    #[test]
    fn no_snapshot_asks_to_try_later() {
        let reply = respond("how hot is it?", None, &UnitPreferences::default());
        assert!(reply.contains("don't have access"));
    }

    #[test]
    fn temperature_uses_the_preferred_unit() {
        let snap = snapshot("Clear");
        let mut prefs = UnitPreferences::default();

        let reply = respond("how hot is it?", Some(&snap), &prefs);
        assert_eq!(
            reply,
            "The current temperature is 20°C. It feels like 18°C."
        );

        prefs.temperature = TemperatureUnit::Fahrenheit;
        let reply = respond("current temp please", Some(&snap), &prefs);
        assert_eq!(
            reply,
            "The current temperature is 68°F. It feels like 65°F."
        );
    }

    #[test]
    fn umbrella_advice_follows_the_condition() {
        let prefs = UnitPreferences::default();

        let reply = respond("do I need an umbrella?", Some(&snapshot("Rain")), &prefs);
        assert!(reply.contains("carrying an umbrella"));

        let reply = respond("do I need an umbrella?", Some(&snapshot("Clear")), &prefs);
        assert!(reply.contains("leave your umbrella"));
    }

    #[test]
    fn wind_uses_the_preferred_unit() {
        let snap = snapshot("Clear");
        let mut prefs = UnitPreferences::default();

        let reply = respond("is it windy?", Some(&snap), &prefs);
        assert_eq!(reply, "The current wind speed is 36 km/h.");

        prefs.wind_speed = WindSpeedUnit::Knots;
        let reply = respond("what about the breeze", Some(&snap), &prefs);
        assert_eq!(reply, "The current wind speed is 19 knots.");
    }

    #[test]
    fn humidity_and_forecast_and_greeting() {
        let snap = snapshot("Clouds");
        let prefs = UnitPreferences::default();

        let reply = respond("humidity?", Some(&snap), &prefs);
        assert_eq!(reply, "The current humidity is 65%.");

        let reply = respond("what about tomorrow?", Some(&snap), &prefs);
        assert!(reply.contains("weather forecasts"));

        let reply = respond("hello there", Some(&snap), &prefs);
        assert!(reply.starts_with("Hello!"));
    }

    #[test]
    fn rules_match_in_priority_order() {
        let snap = snapshot("Rain");
        let prefs = UnitPreferences::default();

        // "temp" outranks "rain" in the table
        let reply = respond("temp during rain?", Some(&snap), &prefs);
        assert!(reply.contains("current temperature"));
    }

    #[test]
    fn unmatched_input_falls_through() {
        let snap = snapshot("Clear");
        let prefs = UnitPreferences::default();
        let reply = respond("sing me a song", Some(&snap), &prefs);
        assert!(reply.contains("rephrase"));
    }
}
