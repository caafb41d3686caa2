//! Abstraction over the host's geolocation capability.
//!
//! The orchestration depends only on the [`Geolocator`] contract, so it can
//! run against the real platform capability, a fixed coordinate from CLI
//! flags, or a scripted fake in tests.

use std::time::Duration;

use async_trait::async_trait;

use crate::{error::LocationError, model::Coordinate};

/// Outcome of a permission check or request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    /// Not yet decided; a request may trigger a host prompt.
    Prompt,
}

/// Options for a single position read.
#[derive(Debug, Clone, Copy)]
pub struct PositionRequest {
    pub high_accuracy: bool,
    pub timeout: Duration,
    /// A cached device fix up to this age may be reused.
    pub maximum_age: Duration,
}

impl Default for PositionRequest {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::from_secs(60),
        }
    }
}

/// Host-provided geolocation capability.
#[async_trait]
pub trait Geolocator: Send + Sync {
    async fn check_permission(&self) -> PermissionStatus;

    /// May trigger a host-level prompt on first call; later calls reuse the
    /// recorded decision.
    async fn request_permission(&self) -> PermissionStatus;

    async fn current_position(
        &self,
        request: &PositionRequest,
    ) -> Result<Coordinate, LocationError>;
}

/// Run the permission chain and obtain one position fix.
///
/// Checks the current permission, requests it once if not granted, and fails
/// with [`LocationError::PermissionDenied`] if it stays ungranted. The read
/// itself is bounded by the request timeout regardless of the backend.
pub async fn resolve_position<L>(locator: &L) -> Result<Coordinate, LocationError>
where
    L: Geolocator + ?Sized,
{
    let mut status = locator.check_permission().await;
    tracing::debug!(?status, "location permission status");

    if status != PermissionStatus::Granted {
        status = locator.request_permission().await;
        tracing::debug!(?status, "location permission after request");
    }

    if status != PermissionStatus::Granted {
        return Err(LocationError::PermissionDenied);
    }

    let request = PositionRequest::default();
    let coordinate = tokio::time::timeout(request.timeout, locator.current_position(&request))
        .await
        .map_err(|_| LocationError::Timeout)??;

    tracing::debug!(
        latitude = coordinate.latitude,
        longitude = coordinate.longitude,
        "resolved current position"
    );

    Ok(coordinate)
}

/// Always-granted locator backed by a fixed coordinate.
///
/// Used when the host has no positioning hardware and the user supplies the
/// coordinate directly.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocator {
    coordinate: Coordinate,
}

impl FixedLocator {
    pub fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }
}

#[async_trait]
impl Geolocator for FixedLocator {
    async fn check_permission(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    async fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    async fn current_position(
        &self,
        _request: &PositionRequest,
    ) -> Result<Coordinate, LocationError> {
        Ok(self.coordinate)
    }
}
