//! Open-Meteo forecast client.
//!
//! One GET against the forecast endpoint, normalized into a
//! [`WeatherSnapshot`]. No authentication, no other endpoints.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::FetchError,
    model::{Coordinate, CurrentConditions, DailyForecast, LocationInfo, WeatherSnapshot},
};

use super::ForecastSource;

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const DAILY_FIELDS: &str =
    "weather_code,temperature_2m_max,temperature_2m_min,precipitation_probability_max";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The view shows at most one week.
const MAX_DAILY_ROWS: usize = 7;

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
    base_url: String,
}

impl OpenMeteoProvider {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(FORECAST_URL)
    }

    /// Base URL override, used to point the client at a test server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, base_url: base_url.into() })
    }

    async fn fetch(
        &self,
        coordinate: Coordinate,
        label: Option<&str>,
    ) -> Result<WeatherSnapshot, FetchError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", coordinate.latitude.to_string()),
                ("longitude", coordinate.longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            tracing::warn!(%status, body = %truncate_body(&body), "Open-Meteo request failed");
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        let parsed: ForecastResponse =
            serde_json::from_str(&body).map_err(|err| FetchError::Parse(err.to_string()))?;

        normalize(parsed, coordinate, label)
    }
}

#[async_trait]
impl ForecastSource for OpenMeteoProvider {
    async fn fetch_weather(
        &self,
        coordinate: Coordinate,
        label: Option<&str>,
    ) -> Result<WeatherSnapshot, FetchError> {
        self.fetch(coordinate, label).await
    }
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    weathercode: i32,
    windspeed: f64,
    winddirection: f64,
    time: String,
}

#[derive(Debug, Deserialize)]
struct OmDaily {
    time: Vec<NaiveDate>,
    #[serde(default)]
    weather_code: Vec<Option<i32>>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    precipitation_probability_max: Vec<Option<u8>>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: OmCurrentWeather,
    daily: OmDaily,
}

fn normalize(
    response: ForecastResponse,
    coordinate: Coordinate,
    label: Option<&str>,
) -> Result<WeatherSnapshot, FetchError> {
    let current = CurrentConditions {
        temperature_c: response.current_weather.temperature,
        weather_code: response.current_weather.weathercode,
        wind_speed_kmh: response.current_weather.windspeed,
        wind_direction_deg: response.current_weather.winddirection,
        observed_at: parse_local_time(&response.current_weather.time)?,
    };

    let daily = &response.daily;
    let days = daily.time.len().min(MAX_DAILY_ROWS);

    // Per-index zero defaults keep short or null-holed arrays renderable.
    let mut rows = Vec::with_capacity(days);
    for (index, date) in daily.time.iter().take(MAX_DAILY_ROWS).enumerate() {
        rows.push(DailyForecast {
            date: *date,
            temp_max_c: number_at(&daily.temperature_2m_max, index),
            temp_min_c: number_at(&daily.temperature_2m_min, index),
            weather_code: daily.weather_code.get(index).copied().flatten().unwrap_or(0),
            precipitation_probability_pct: daily
                .precipitation_probability_max
                .get(index)
                .copied()
                .flatten()
                .unwrap_or(0)
                .min(100),
        });
    }

    let display_name =
        label.map_or_else(|| coordinate.display_label(), ToOwned::to_owned);

    Ok(WeatherSnapshot {
        current,
        daily: rows,
        location: LocationInfo {
            display_name,
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        },
    })
}

fn number_at(values: &[Option<f64>], index: usize) -> f64 {
    values.get(index).copied().flatten().unwrap_or(0.0)
}

/// Open-Meteo returns local wall-clock times, usually without seconds.
fn parse_local_time(value: &str) -> Result<NaiveDateTime, FetchError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| FetchError::Parse(format!("unexpected timestamp format: {value}")))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn provider_for(server: &MockServer) -> OpenMeteoProvider {
        OpenMeteoProvider::with_base_url(format!("{}/v1/forecast", server.uri()))
            .expect("client must build")
    }

    fn full_body() -> serde_json::Value {
        json!({
            "current_weather": {
                "temperature": 18.3,
                "weathercode": 1,
                "windspeed": 12.4,
                "winddirection": 230.0,
                "time": "2026-08-28T11:00"
            },
            "daily": {
                "time": [
                    "2026-08-28", "2026-08-29", "2026-08-30", "2026-08-31",
                    "2026-09-01", "2026-09-02", "2026-09-03"
                ],
                "weather_code": [1, 2, 3, 61, 71, 95, 0],
                "temperature_2m_max": [21.6, 19.0, 17.2, 14.8, 12.1, 15.5, 20.3],
                "temperature_2m_min": [11.2, 10.4, 9.8, 7.5, 4.9, 8.1, 10.9],
                "precipitation_probability_max": [10, 25, 40, 80, 60, 90, 5]
            }
        })
    }

    #[tokio::test]
    async fn maps_full_body_into_snapshot() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "52.52"))
            .and(query_param("longitude", "13.41"))
            .and(query_param("current_weather", "true"))
            .and(query_param("daily", DAILY_FIELDS))
            .and(query_param("timezone", "auto"))
            .respond_with(ResponseTemplate::new(200).set_body_json(full_body()))
            .mount(&server)
            .await;

        let provider = provider_for(&server).await;
        let snapshot = provider
            .fetch_weather(Coordinate::new(52.52, 13.41), None)
            .await
            .unwrap();

        assert_eq!(snapshot.current.temperature_c, 18.3);
        assert_eq!(snapshot.current.weather_code, 1);
        assert_eq!(snapshot.current.wind_speed_kmh, 12.4);
        assert_eq!(snapshot.current.wind_direction_deg, 230.0);
        assert_eq!(
            snapshot.current.observed_at,
            NaiveDateTime::parse_from_str("2026-08-28T11:00", "%Y-%m-%dT%H:%M").unwrap()
        );

        assert_eq!(snapshot.daily.len(), 7);
        assert_eq!(snapshot.daily[3].weather_code, 61);
        assert_eq!(snapshot.daily[3].temp_max_c, 14.8);
        assert_eq!(snapshot.daily[3].temp_min_c, 7.5);
        assert_eq!(snapshot.daily[3].precipitation_probability_pct, 80);

        assert_eq!(snapshot.location.display_name, "52.52, 13.41");
        assert_eq!(snapshot.location.latitude, 52.52);
    }

    #[tokio::test]
    async fn caller_label_wins_over_coordinate_format() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(full_body()))
            .mount(&server)
            .await;

        let provider = provider_for(&server).await;
        let snapshot = provider
            .fetch_weather(Coordinate::new(52.52, 13.41), Some("Aktueller Standort"))
            .await
            .unwrap();

        assert_eq!(snapshot.location.display_name, "Aktueller Standort");
    }

    #[tokio::test]
    async fn non_success_status_is_a_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let provider = provider_for(&server).await;
        let err = provider
            .fetch_weather(Coordinate::new(52.52, 13.41), None)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            FetchError::Status { status, .. } if status.as_u16() == 500
        ));
    }

    #[tokio::test]
    async fn body_without_expected_shape_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"elevation": 34.0})))
            .mount(&server)
            .await;

        let provider = provider_for(&server).await;
        let err = provider
            .fetch_weather(Coordinate::new(52.52, 13.41), None)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[tokio::test]
    async fn non_json_body_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
            .mount(&server)
            .await;

        let provider = provider_for(&server).await;
        let err = provider
            .fetch_weather(Coordinate::new(52.52, 13.41), None)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[tokio::test]
    async fn short_daily_arrays_yield_short_snapshot() {
        let server = MockServer::start().await;
        let body = json!({
            "current_weather": {
                "temperature": 9.0,
                "weathercode": 3,
                "windspeed": 20.0,
                "winddirection": 90.0,
                "time": "2026-08-28T07:00"
            },
            "daily": {
                "time": ["2026-08-28", "2026-08-29", "2026-08-30"],
                "weather_code": [3, 61, 80],
                "temperature_2m_max": [9.5, 10.1, 8.7],
                "temperature_2m_min": [4.0, 5.2, 3.3],
                "precipitation_probability_max": [0, 55, 70]
            }
        });
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let provider = provider_for(&server).await;
        let snapshot = provider
            .fetch_weather(Coordinate::new(52.52, 13.41), None)
            .await
            .unwrap();

        assert_eq!(snapshot.daily.len(), 3);
        assert_eq!(snapshot.daily[2].weather_code, 80);
    }

    #[tokio::test]
    async fn missing_and_null_daily_values_default_to_zero() {
        let server = MockServer::start().await;
        // Second weather code is null, min temps stop early, and the
        // precipitation array is absent entirely.
        let body = json!({
            "current_weather": {
                "temperature": 1.5,
                "weathercode": 71,
                "windspeed": 5.0,
                "winddirection": 10.0,
                "time": "2026-08-28T08:00"
            },
            "daily": {
                "time": ["2026-08-28", "2026-08-29"],
                "weather_code": [71, null],
                "temperature_2m_max": [2.0, 3.0],
                "temperature_2m_min": [-4.0]
            }
        });
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let provider = provider_for(&server).await;
        let snapshot = provider
            .fetch_weather(Coordinate::new(52.52, 13.41), None)
            .await
            .unwrap();

        assert_eq!(snapshot.daily.len(), 2);
        assert_eq!(snapshot.daily[1].weather_code, 0);
        assert_eq!(snapshot.daily[1].temp_min_c, 0.0);
        assert_eq!(snapshot.daily[0].precipitation_probability_pct, 0);
        assert_eq!(snapshot.daily[1].precipitation_probability_pct, 0);
    }

    #[tokio::test]
    async fn daily_rows_are_capped_at_one_week() {
        let server = MockServer::start().await;
        let dates: Vec<String> =
            (1..=10).map(|day| format!("2026-09-{day:02}")).collect();
        let body = json!({
            "current_weather": {
                "temperature": 22.0,
                "weathercode": 0,
                "windspeed": 8.0,
                "winddirection": 180.0,
                "time": "2026-09-01T12:00"
            },
            "daily": {
                "time": dates,
                "weather_code": [0, 1, 2, 3, 45, 51, 61, 71, 80, 95],
                "temperature_2m_max": [20.0, 21.0, 22.0, 23.0, 24.0, 25.0, 26.0, 27.0, 28.0, 29.0],
                "temperature_2m_min": [10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 19.0],
                "precipitation_probability_max": [0, 5, 10, 15, 20, 25, 30, 35, 40, 45]
            }
        });
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let provider = provider_for(&server).await;
        let snapshot = provider
            .fetch_weather(Coordinate::new(52.52, 13.41), None)
            .await
            .unwrap();

        assert_eq!(snapshot.daily.len(), 7);
        assert_eq!(snapshot.daily[6].weather_code, 61);
    }

    #[test]
    fn local_time_accepts_seconds_suffix() {
        assert!(parse_local_time("2026-08-28T11:00").is_ok());
        assert!(parse_local_time("2026-08-28T11:00:30").is_ok());
        assert!(parse_local_time("gestern").is_err());
    }
}
