//! Core library for the `wetterblick` weather view.
//!
//! This crate defines:
//! - The normalized weather data model and view-state machine
//! - Abstraction over the host geolocation capability
//! - The Open-Meteo forecast client
//! - Pure WMO-code-to-presentation mapping (German)
//!
//! It is used by `wetterblick-cli`, but can also be reused by other front-ends.

pub mod condition;
pub mod controller;
pub mod error;
pub mod location;
pub mod model;
pub mod provider;

pub use condition::{IconCategory, description_de};
pub use controller::{ViewState, WeatherController};
pub use error::{FetchError, LocationError, WeatherError};
pub use location::{FixedLocator, Geolocator, PermissionStatus, PositionRequest};
pub use model::{Coordinate, CurrentConditions, DailyForecast, LocationInfo, WeatherSnapshot};
pub use provider::{ForecastSource, open_meteo::OpenMeteoProvider};
