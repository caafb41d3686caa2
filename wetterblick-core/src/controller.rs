//! View-state machine and orchestration chain.
//!
//! One controller owns the single piece of mutable UI state. A refresh runs
//! the fixed chain permission-check → position-read → forecast-fetch and
//! lands in exactly one of the three view states.

use crate::{
    error::WeatherError,
    location::{self, Geolocator},
    model::WeatherSnapshot,
    provider::ForecastSource,
};

/// The one piece of UI state. Exactly one variant is rendered at a time;
/// illegal combinations (loading with data, error with data) are
/// unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Error(String),
    Ready(WeatherSnapshot),
}

pub struct WeatherController<L, S> {
    locator: L,
    source: S,
    label: Option<String>,
    state: ViewState,
    /// Token of the newest refresh; results of older runs are discarded
    /// instead of overwriting fresher state.
    generation: u64,
}

impl<L, S> WeatherController<L, S>
where
    L: Geolocator,
    S: ForecastSource,
{
    pub fn new(locator: L, source: S) -> Self {
        Self {
            locator,
            source,
            label: None,
            state: ViewState::Loading,
            generation: 0,
        }
    }

    /// Display name to use instead of the formatted coordinate.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Run the full orchestration chain once and settle the view state.
    ///
    /// Entered on mount and on every user refresh; a failure at any step
    /// discards partial results and lands in `Error`.
    pub async fn refresh(&mut self) -> &ViewState {
        let generation = self.begin();
        let outcome = self.run_chain().await;
        self.finish(generation, outcome);
        &self.state
    }

    fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = ViewState::Loading;
        self.generation
    }

    async fn run_chain(&self) -> Result<WeatherSnapshot, WeatherError> {
        let coordinate = location::resolve_position(&self.locator).await?;
        let snapshot = self
            .source
            .fetch_weather(coordinate, self.label.as_deref())
            .await?;
        Ok(snapshot)
    }

    fn finish(&mut self, generation: u64, outcome: Result<WeatherSnapshot, WeatherError>) {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "discarding stale refresh result"
            );
            return;
        }

        self.state = match outcome {
            Ok(snapshot) => ViewState::Ready(snapshot),
            Err(err) => {
                tracing::warn!(error = %err, "refresh failed");
                ViewState::Error(err.user_message())
            }
        };
    }
}
