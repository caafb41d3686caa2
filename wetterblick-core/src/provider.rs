use std::fmt::Debug;

use async_trait::async_trait;

use crate::{
    error::FetchError,
    model::{Coordinate, WeatherSnapshot},
};

pub mod open_meteo;

/// Source of normalized forecast data for a coordinate.
///
/// `label`, when given, becomes the snapshot's display name; otherwise the
/// coordinate itself is formatted as the name.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn fetch_weather(
        &self,
        coordinate: Coordinate,
        label: Option<&str>,
    ) -> Result<WeatherSnapshot, FetchError>;
}
