use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A geographic fix produced by the location provider.
///
/// Consumed immediately by the forecast fetch; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Fallback display label when no location name is known.
    pub fn display_label(&self) -> String {
        format!("{:.2}, {:.2}", self.latitude, self.longitude)
    }
}

/// Current conditions at the requested location.
///
/// `observed_at` is local wall-clock time (the API is queried with
/// `timezone=auto`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub weather_code: i32,
    pub wind_speed_kmh: f64,
    pub wind_direction_deg: f64,
    pub observed_at: NaiveDateTime,
}

/// One forecast day. The upstream parallel arrays are zipped into this
/// struct, so index alignment holds by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub temp_max_c: f64,
    pub temp_min_c: f64,
    pub weather_code: i32,
    pub precipitation_probability_pct: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Full normalized weather result for one location at one point in time.
///
/// Built fresh on every fetch and replaced wholesale on the next one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    pub daily: Vec<DailyForecast>,
    pub location: LocationInfo,
}
