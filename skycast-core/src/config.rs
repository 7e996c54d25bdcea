use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::units::UnitPreferences;

/// Top-level configuration stored on disk: the OpenWeather credential and the
/// default display units.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
///
/// [units]
/// temperature = "fahrenheit"
/// wind_speed = "knots"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_key: Option<String>,

    #[serde(default)]
    pub units: UnitPreferences,
}

impl Config {
    /// Return the configured API key, with a setup hint when missing.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `skycast configure` and enter your OpenWeather API key first."
            )
        })
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{TemperatureUnit, WindSpeedUnit};

    #[test]
    fn api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.api_key().unwrap_err();

        assert!(err.to_string().contains("No API key configured"));
        assert!(!cfg.is_configured());
    }

    #[test]
    fn set_api_key_round_trips() {
        let mut cfg = Config::default();
        cfg.set_api_key("OPEN_KEY".into());

        assert!(cfg.is_configured());
        assert_eq!(cfg.api_key().expect("key must exist"), "OPEN_KEY");
    }

    #[test]
    fn default_units_are_metric_with_24h_clock() {
        let cfg = Config::default();
        assert_eq!(cfg.units.temperature, TemperatureUnit::Celsius);
        assert!(cfg.units.use_24h_clock);
    }

    #[test]
    fn parses_a_partial_config_file() {
        let cfg: Config = toml::from_str(
            r#"
            api_key = "OPEN_KEY"

            [units]
            temperature = "fahrenheit"
            wind_speed = "knots"
            "#,
        )
        .expect("config must parse");

        assert_eq!(cfg.api_key.as_deref(), Some("OPEN_KEY"));
        assert_eq!(cfg.units.temperature, TemperatureUnit::Fahrenheit);
        assert_eq!(cfg.units.wind_speed, WindSpeedUnit::Knots);
        // unspecified preferences keep their defaults
        assert!(cfg.units.use_24h_clock);
    }

    #[test]
    fn serializes_round_trip() {
        let mut cfg = Config::default();
        cfg.set_api_key("OPEN_KEY".into());
        cfg.units.temperature = TemperatureUnit::Fahrenheit;

        let text = toml::to_string_pretty(&cfg).expect("serialize");
        let parsed: Config = toml::from_str(&text).expect("parse");

        assert_eq!(parsed.api_key.as_deref(), Some("OPEN_KEY"));
        assert_eq!(parsed.units.temperature, TemperatureUnit::Fahrenheit);
    }
}
