use common::ErrorLocation;

use thiserror::Error;

/// Failures in the CLI shell.
///
/// Core faults pass through transparently; shell faults (logger,
/// directories, transport construction) carry their own message and
/// location.
#[derive(Debug, Error)]
pub enum RoadstatusError {
    /// Error from this app's own plumbing
    #[error("Roadstatus Error: {message} {location}")]
    App {
        message: String,
        location: ErrorLocation,
    },

    /// Error from road-core operations (settings, credentials, lookup)
    #[error(transparent)]
    Core(#[from] road_core::error::CoreError),
}

impl From<road_core::error::config::ConfigError> for RoadstatusError {
    fn from(error: road_core::error::config::ConfigError) -> Self {
        Self::Core(error.into())
    }
}

impl From<road_core::error::road_client::RoadClientError> for RoadstatusError {
    fn from(error: road_core::error::road_client::RoadClientError) -> Self {
        Self::Core(error.into())
    }
}
