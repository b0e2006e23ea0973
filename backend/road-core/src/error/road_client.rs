use std::time::Duration;

use common::{ErrorLocation, HttpStatusCode};
use thiserror::Error as ThisError;

/// Errors the road status client returns to its caller.
///
/// Only construction and argument validation surface here; lookup failures
/// are absorbed into the opaque failure outcome of
/// [`crate::road_client::RoadStatusResult`].
#[derive(Debug, ThisError)]
pub enum RoadClientError {
    #[error("Empty Road Id Error: a road id is required {location}")]
    EmptyRoadId { location: ErrorLocation },

    #[error("Base URL Parse Error: {message} {location}")]
    BaseUrl {
        message: String,
        location: ErrorLocation,
    },
}

/// Cause of a failed lookup.
///
/// Logged once at error severity by the client, then collapsed; never part
/// of the public result contract.
#[derive(Debug, ThisError)]
pub enum LookupFault {
    #[error("Transport Fault: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    #[error("Deadline Fault: no response within {deadline:?} {location}")]
    DeadlineElapsed {
        deadline: Duration,
        location: ErrorLocation,
    },

    #[error("Status Fault: unexpected HTTP {status} {location}")]
    UnexpectedStatus {
        status: HttpStatusCode,
        location: ErrorLocation,
    },

    #[error("Decode Fault: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Empty Response Fault: HTTP 200 with no corridors in the body {location}")]
    EmptyBody { location: ErrorLocation },

    #[error("Request URL Fault: {message} {location}")]
    RequestUrl {
        message: String,
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for LookupFault {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        LookupFault::Transport {
            message: error.to_string(),
            location: ErrorLocation::capture(),
        }
    }
}

impl From<serde_json::Error> for LookupFault {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        LookupFault::Decode {
            message: error.to_string(),
            location: ErrorLocation::capture(),
        }
    }
}

impl From<url::ParseError> for LookupFault {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        LookupFault::RequestUrl {
            message: error.to_string(),
            location: ErrorLocation::capture(),
        }
    }
}
