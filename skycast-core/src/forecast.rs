//! Hourly and daily outlooks derived from the raw 5-day/3-hour forecast.
//!
//! Both builders are pure: the reference date for "Today" is a parameter, so
//! repeated calls with the same series produce identical output.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Timelike, Utc};

use crate::classify::{self, ConditionBucket};
use crate::model::{ForecastEntry, RawForecastSeries};

/// Number of 3-hour steps shown in the hourly strip (nominally 24 hours).
const HOURLY_POINTS: usize = 8;

/// Days covered by the daily outlook, including today.
const DAILY_POINTS: i64 = 7;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One cell of the hourly strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyForecastPoint {
    /// Local 12-hour clock label, e.g. "03:00 PM".
    pub label: String,
    pub temp_rounded: i64,
    pub bucket: ConditionBucket,
    /// Local hour of day the sample falls on (0-23).
    pub source_hour: u8,
}

/// One row of the 7-day outlook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyForecastPoint {
    /// "Today" for the first row, weekday abbreviation afterwards.
    pub day_label: String,
    pub temp_rounded: i64,
    pub min_temp_rounded: i64,
    pub max_temp_rounded: i64,
    pub bucket: ConditionBucket,
}

fn series_offset(series: &RawForecastSeries) -> FixedOffset {
    // an out-of-range offset from the API degrades to UTC
    FixedOffset::east_opt(series.utc_offset_secs)
        .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap())
}

fn local_time(entry: &ForecastEntry, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    DateTime::<Utc>::from_timestamp(entry.epoch_s, 0).map(|dt| dt.with_timezone(&offset))
}

fn round_temp(value: f64) -> i64 {
    if value.is_finite() { value.round() as i64 } else { 0 }
}

/// Build the hourly strip: the first eight 3-hour samples, no interpolation.
/// A series shorter than eight entries simply yields fewer points.
pub fn hourly_outlook(series: &RawForecastSeries) -> Vec<HourlyForecastPoint> {
    let offset = series_offset(series);

    series
        .entries
        .iter()
        .take(HOURLY_POINTS)
        .filter_map(|entry| {
            let local = local_time(entry, offset)?;
            Some(HourlyForecastPoint {
                label: local.format("%I:%M %p").to_string(),
                temp_rounded: round_temp(entry.temp),
                bucket: classify::bucket(&entry.condition_main),
                source_hour: local.hour() as u8,
            })
        })
        .collect()
}

/// Build the 7-day outlook for consecutive calendar days starting at `today`
/// (a date in the city's local offset).
///
/// Each day uses the first forecast entry falling on that local date. Days
/// beyond the series' horizon reuse the last entry of the whole series, so
/// the outlook always has seven rows as long as the series is non-empty.
pub fn daily_outlook(series: &RawForecastSeries, today: NaiveDate) -> Vec<DailyForecastPoint> {
    let Some(last) = series.entries.last() else {
        return Vec::new();
    };
    let offset = series_offset(series);

    (0..DAILY_POINTS)
        .map(|i| {
            let date = today + Duration::days(i);
            let entry = series
                .entries
                .iter()
                .find(|e| local_time(e, offset).is_some_and(|dt| dt.date_naive() == date))
                .unwrap_or(last);

            let day_label = if i == 0 {
                "Today".to_string()
            } else {
                let weekday = date.weekday().num_days_from_sunday() as usize;
                WEEKDAYS[weekday].to_string()
            };

            DailyForecastPoint {
                day_label,
                temp_rounded: round_temp(entry.temp),
                min_temp_rounded: round_temp(entry.temp_min),
                max_temp_rounded: round_temp(entry.temp_max),
                bucket: classify::bucket(&entry.condition_main),
            }
        })
        .collect()
}
