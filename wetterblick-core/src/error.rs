use reqwest::StatusCode;
use thiserror::Error;

/// Failures while obtaining a position from the platform capability.
///
/// The display strings are user-facing (German); location errors are shown
/// to the user verbatim behind the "Standortfehler:" prefix.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Standortberechtigung verweigert")]
    PermissionDenied,

    #[error("Zeitüberschreitung bei der Standortbestimmung")]
    Timeout,

    /// Device/platform error, surfacing the underlying message.
    #[error("{0}")]
    Unavailable(String),
}

/// Failures while fetching or decoding the forecast response.
///
/// Displays are diagnostic; the controller collapses every variant into the
/// generic user message.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to Open-Meteo failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Open-Meteo returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("unexpected Open-Meteo payload: {0}")]
    Parse(String),
}

/// Umbrella error for one orchestration run.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl WeatherError {
    /// Single user-visible message per failed run. Location failures carry a
    /// distinct prefix so the user can tell them from network failures.
    pub fn user_message(&self) -> String {
        match self {
            WeatherError::Location(err) => format!("Standortfehler: {err}"),
            WeatherError::Fetch(_) => "Wetterdaten konnten nicht geladen werden".to_string(),
        }
    }
}
