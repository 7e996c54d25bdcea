use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use inquire::{Confirm, Select, Text};

use skycast_core::units::{
    DistanceUnit, PressureUnit, TemperatureUnit, UnitPreferences, WindSpeedUnit,
};
use skycast_core::{
    Config, FavoriteCity, FavoriteList, OpenWeatherProvider, UnitSystem, WeatherProvider,
    assistant, classify, forecast, view,
};

/// Cities shown by `favorites` when none are given on the command line.
const DEFAULT_FAVORITES: [&str; 4] = ["Mingora", "Peshawar", "Islamabad", "Lahore"];

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and pick the default display units.
    Configure,

    /// Show current conditions and air details for a city.
    Current {
        /// City name, e.g. "Lisbon".
        city: String,
    },

    /// Show today's hourly strip and the 7-day outlook for a city.
    Forecast {
        /// City name, e.g. "Lisbon".
        city: String,
    },

    /// Refresh a set of favorite cities concurrently and list them.
    Favorites {
        /// City to include; repeat for several. Defaults to a built-in set.
        #[arg(long = "city")]
        cities: Vec<String>,
    },

    /// Ask the weather assistant a question about a city.
    Ask {
        /// City name the question is about.
        city: String,

        /// The question, e.g. "do I need an umbrella?".
        #[arg(trailing_var_arg = true, required = true)]
        question: Vec<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Current { city } => {
                let (provider, units) = setup()?;
                current(&provider, &city, &units).await
            }
            Command::Forecast { city } => {
                let (provider, units) = setup()?;
                forecast_views(&provider, &city, &units).await
            }
            Command::Favorites { cities } => {
                let (provider, units) = setup()?;
                favorites(&provider, cities, &units).await
            }
            Command::Ask { city, question } => {
                let (provider, units) = setup()?;
                ask(&provider, &city, &question.join(" "), &units).await
            }
        }
    }
}

/// Load config and build the provider, failing with a hint when the API key
/// is missing.
fn setup() -> Result<(OpenWeatherProvider, UnitPreferences)> {
    let config = Config::load()?;
    let provider = OpenWeatherProvider::new(config.api_key()?.to_string());
    Ok((provider, config.units))
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("OpenWeather API key:").prompt()?;
    config.set_api_key(api_key.trim().to_string());

    config.units.temperature = Select::new(
        "Temperature unit:",
        vec![TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit],
    )
    .prompt()?;

    config.units.wind_speed = Select::new(
        "Wind speed unit:",
        vec![
            WindSpeedUnit::KmPerHour,
            WindSpeedUnit::MetersPerSecond,
            WindSpeedUnit::Knots,
        ],
    )
    .prompt()?;

    config.units.pressure = Select::new(
        "Pressure unit:",
        vec![
            PressureUnit::HectoPascal,
            PressureUnit::Inches,
            PressureUnit::KiloPascal,
            PressureUnit::Millimeters,
        ],
    )
    .prompt()?;

    config.units.distance = Select::new(
        "Distance unit:",
        vec![DistanceUnit::Kilometers, DistanceUnit::Miles],
    )
    .prompt()?;

    config.units.use_24h_clock = Confirm::new("Use a 24-hour clock?")
        .with_default(config.units.use_24h_clock)
        .prompt()?;

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn current(
    provider: &OpenWeatherProvider,
    city: &str,
    units: &UnitPreferences,
) -> Result<()> {
    // snapshots are always fetched metric; conversion happens at display time
    let snapshot = provider.fetch_current(city, UnitSystem::Metric).await?;
    let air = view::air_conditions(&snapshot, units);

    println!(
        "{}  {}",
        snapshot.location_name, snapshot.condition_description
    );
    println!("Chance of rain: {}", air.rain_chance);
    println!(
        "{}  {}",
        classify::icon(&snapshot.condition_main).glyph(),
        view::format_temp(snapshot.temp_c, units.temperature)
    );
    println!();
    println!("AIR CONDITIONS");
    println!("  Real feel   {}", air.real_feel);
    println!("  Wind        {} ({})", air.wind, air.wind_direction);
    println!("  Humidity    {}", air.humidity);
    println!("  UV index    {} ({})", air.uv_index, air.uv_band);
    println!("  Visibility  {}", air.visibility);
    println!("  Pressure    {}", air.pressure);
    println!("  High / low  {}", air.temp_range);
    println!("  Sunrise     {}", air.sunrise);
    println!("  Sunset      {}", air.sunset);

    Ok(())
}

async fn forecast_views(
    provider: &OpenWeatherProvider,
    city: &str,
    units: &UnitPreferences,
) -> Result<()> {
    // the forecast is fetched in the preferred system, so its temperatures
    // are already native and only need the matching suffix
    let system = UnitSystem::for_temperature(units.temperature);
    let suffix = units.temperature.suffix();

    let series = provider.fetch_forecast(city, system).await?;
    let today = Utc::now()
        .with_timezone(&series_offset(series.utc_offset_secs))
        .date_naive();

    println!("{}", series.city_name);
    println!();
    println!("TODAY'S FORECAST");
    for point in forecast::hourly_outlook(&series) {
        println!(
            "  {:>9}  {}  {}{}",
            point.label,
            point.bucket.glyph(),
            point.temp_rounded,
            suffix
        );
    }

    println!();
    println!("7-DAY FORECAST");
    for day in forecast::daily_outlook(&series, today) {
        println!(
            "  {:<6} {}  {}{} / {}{}",
            day.day_label,
            day.bucket.glyph(),
            day.max_temp_rounded,
            suffix,
            day.min_temp_rounded,
            suffix
        );
    }

    Ok(())
}

async fn favorites(
    provider: &OpenWeatherProvider,
    cities: Vec<String>,
    units: &UnitPreferences,
) -> Result<()> {
    let mut list = FavoriteList::new();
    if cities.is_empty() {
        for name in DEFAULT_FAVORITES {
            list.add(FavoriteCity::named(name));
        }
    } else {
        for name in cities {
            list.add(FavoriteCity::named(name));
        }
    }

    list.refresh_all(provider, UnitSystem::Metric).await;

    let now = Utc::now().timestamp();
    for city in list.iter() {
        match &city.last_known {
            Some(snapshot) => {
                let local_time =
                    view::format_clock(now, snapshot.utc_offset_secs, units.use_24h_clock);
                println!(
                    "{:<16} {:>6}  {:>8}  {} {}",
                    city.display_name,
                    view::format_temp(snapshot.temp_c, units.temperature),
                    local_time,
                    classify::bucket(&snapshot.condition_main).glyph(),
                    snapshot.condition_description
                );
            }
            None => println!("{:<16} {:>6}  {:>8}", city.display_name, "--", "--"),
        }
    }

    Ok(())
}

async fn ask(
    provider: &OpenWeatherProvider,
    city: &str,
    question: &str,
    units: &UnitPreferences,
) -> Result<()> {
    let snapshot = match provider.fetch_current(city, UnitSystem::Metric).await {
        Ok(snapshot) => Some(snapshot),
        Err(err) => {
            tracing::warn!(city, error = %err, "could not load weather for the assistant");
            None
        }
    };

    println!("{}", assistant::GREETING);
    println!("> {question}");
    println!("{}", assistant::respond(question, snapshot.as_ref(), units));

    Ok(())
}

fn series_offset(utc_offset_secs: i32) -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(utc_offset_secs)
        .unwrap_or_else(|| chrono::FixedOffset::east_opt(0).unwrap())
}
