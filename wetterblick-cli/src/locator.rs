//! Terminal stand-in for the platform geolocation capability.

use std::sync::atomic::{AtomicU8, Ordering};

use async_trait::async_trait;
use inquire::Confirm;
use wetterblick_core::{Coordinate, Geolocator, LocationError, PermissionStatus, PositionRequest};

const UNDECIDED: u8 = 0;
const GRANTED: u8 = 1;
const DENIED: u8 = 2;

/// Geolocator backed by a coordinate from the command line.
///
/// The host permission prompt becomes an interactive confirmation, asked at
/// most once per process; later calls reuse the recorded decision.
pub struct TerminalLocator {
    coordinate: Coordinate,
    decision: AtomicU8,
}

impl TerminalLocator {
    pub fn new(coordinate: Coordinate, preapproved: bool) -> Self {
        let decision = if preapproved { GRANTED } else { UNDECIDED };
        Self { coordinate, decision: AtomicU8::new(decision) }
    }

    fn status(&self) -> PermissionStatus {
        match self.decision.load(Ordering::SeqCst) {
            GRANTED => PermissionStatus::Granted,
            DENIED => PermissionStatus::Denied,
            _ => PermissionStatus::Prompt,
        }
    }
}

#[async_trait]
impl Geolocator for TerminalLocator {
    async fn check_permission(&self) -> PermissionStatus {
        self.status()
    }

    async fn request_permission(&self) -> PermissionStatus {
        if self.decision.load(Ordering::SeqCst) == UNDECIDED {
            // Without a terminal the prompt fails; that counts as a denial.
            let allowed = Confirm::new("Darf wetterblick Ihren Standort verwenden?")
                .with_default(true)
                .prompt()
                .unwrap_or(false);

            let decision = if allowed { GRANTED } else { DENIED };
            self.decision.store(decision, Ordering::SeqCst);
            tracing::debug!(allowed, "location permission decided");
        }

        self.status()
    }

    async fn current_position(
        &self,
        _request: &PositionRequest,
    ) -> Result<Coordinate, LocationError> {
        Ok(self.coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn preapproved_locator_is_granted_without_prompting() {
        let locator = TerminalLocator::new(Coordinate::new(52.52, 13.41), true);
        assert_eq!(locator.check_permission().await, PermissionStatus::Granted);
        assert_eq!(locator.request_permission().await, PermissionStatus::Granted);

        let coord = locator
            .current_position(&PositionRequest::default())
            .await
            .unwrap();
        assert_eq!(coord, Coordinate::new(52.52, 13.41));
    }

    #[tokio::test]
    async fn undecided_locator_reports_prompt() {
        let locator = TerminalLocator::new(Coordinate::new(52.52, 13.41), false);
        assert_eq!(locator.check_permission().await, PermissionStatus::Prompt);
    }
}
