use std::{error::Error, fmt, time::Duration};

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The end user's position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationError {
    Denied,
    Unavailable,
    TimedOut,
}

impl GeolocationError {
    /// The message shown to the user. Failure is a normal, non-fatal state;
    /// the directory keeps working without a position.
    pub fn user_message(&self) -> &'static str {
        match self {
            GeolocationError::Denied => {
                "Location access denied. Please enable location permissions."
            }
            GeolocationError::Unavailable => "Location information unavailable.",
            GeolocationError::TimedOut => "Location request timed out.",
        }
    }
}

impl fmt::Display for GeolocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl Error for GeolocationError {}

/// A platform position-sensing capability. Single in-flight request per
/// user action; no retry policy, no streaming updates.
#[async_trait]
pub trait Geolocator {
    async fn locate(&self) -> Result<Coordinate, GeolocationError>;
}

pub const LOCATE_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs a single position request with the standard timeout applied.
pub async fn locate_with_timeout<G>(geolocator: &G) -> Result<Coordinate, GeolocationError>
where
    G: Geolocator + Sync,
{
    match tokio::time::timeout(LOCATE_TIMEOUT, geolocator.locate()).await {
        Ok(result) => result,
        Err(_) => Err(GeolocationError::TimedOut),
    }
}

/// Always reports the same position. Stands in for a real sensor in tests
/// and demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Coordinate);

#[async_trait]
impl Geolocator for FixedPosition {
    async fn locate(&self) -> Result<Coordinate, GeolocationError> {
        Ok(self.0)
    }
}

/// A capability that always fails with the given error.
#[derive(Debug, Clone, Copy)]
pub struct NoPosition(pub GeolocationError);

#[async_trait]
impl Geolocator for NoPosition {
    async fn locate(&self) -> Result<Coordinate, GeolocationError> {
        Err(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NeverResponds;

    #[async_trait]
    impl Geolocator for NeverResponds {
        async fn locate(&self) -> Result<Coordinate, GeolocationError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            unreachable!("request should have timed out long before this")
        }
    }

    #[tokio::test]
    async fn fixed_position_resolves() {
        let geolocator = FixedPosition(Coordinate {
            latitude: 32.78,
            longitude: -96.80,
        });
        let position = locate_with_timeout(&geolocator).await.unwrap();
        assert_eq!(position.latitude, 32.78);
    }

    #[tokio::test]
    async fn denial_surfaces_as_error_value() {
        let geolocator = NoPosition(GeolocationError::Denied);
        let result = locate_with_timeout(&geolocator).await;
        assert_eq!(result, Err(GeolocationError::Denied));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_sensor_times_out() {
        let result = locate_with_timeout(&NeverResponds).await;
        assert_eq!(result, Err(GeolocationError::TimedOut));
    }
}
