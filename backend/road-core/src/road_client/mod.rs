//! HTTP client for the upstream road status endpoint.

pub mod models;

pub use models::{RoadCorridor, RoadStatusResult};

use crate::config::ApiCredentials;
use crate::error::road_client::{LookupFault, RoadClientError};

use common::{ErrorLocation, HttpStatusCode};

use std::time::Duration;

use log::error;
use reqwest::Client;
use reqwest::header::ACCEPT;
use tokio::time::timeout;
use url::Url;

/// Deadline the CLI entry point applies to a single lookup.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(30);

const ROAD_ENDPOINT: &str = "Road/";
const APP_ID_PARAM: &str = "app_id";
const APP_KEY_PARAM: &str = "app_key";

/// Client for the road status endpoint.
///
/// Holds only immutable state after construction (pooled transport handle,
/// parsed base URL, credentials), so concurrent lookups are safe without
/// locking.
#[derive(Clone)]
pub struct RoadStatusClient {
    http: Client,
    base_url: Url,
    credentials: ApiCredentials,
}

impl RoadStatusClient {
    /// Build a client against `base_url`.
    ///
    /// The transport is injected rather than constructed here: it is a
    /// pooled, reusable resource owned by the embedding application and
    /// shared across lookups.
    ///
    /// # Errors
    /// Returns [`RoadClientError::BaseUrl`] when `base_url` does not parse.
    pub fn new(
        http: Client,
        base_url: &str,
        credentials: ApiCredentials,
    ) -> Result<Self, RoadClientError> {
        let base_url = Url::parse(base_url).map_err(|e| RoadClientError::BaseUrl {
            message: e.to_string(),
            location: ErrorLocation::capture(),
        })?;

        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    /// Look up the current status of one road corridor.
    ///
    /// Returns `Err` only for a blank `road_id`, checked before any request
    /// is built. Every downstream outcome is a [`RoadStatusResult`]: 404
    /// maps to `NotFound`, a 2xx with a decodable non-empty array maps to
    /// `Success`, and everything else (other statuses, transport faults,
    /// decode failures, an elapsed `deadline`) is logged once and collapses
    /// to `Error`. Single attempt, no retries.
    pub async fn road_status(
        &self,
        road_id: &str,
        deadline: Duration,
    ) -> Result<RoadStatusResult, RoadClientError> {
        if road_id.trim().is_empty() {
            return Err(RoadClientError::EmptyRoadId {
                location: ErrorLocation::capture(),
            });
        }

        let fault = match timeout(deadline, self.lookup(road_id)).await {
            Ok(Ok(result)) => return Ok(result),
            Ok(Err(fault)) => fault,
            Err(_) => LookupFault::DeadlineElapsed {
                deadline,
                location: ErrorLocation::capture(),
            },
        };

        // The single diagnostic for the opaque failure outcome.
        error!("TFL road status: lookup for '{road_id}' failed: {fault}");
        Ok(RoadStatusResult::Error)
    }

    async fn lookup(&self, road_id: &str) -> Result<RoadStatusResult, LookupFault> {
        let url = self.road_url(road_id)?;

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = HttpStatusCode::from(response.status().as_u16());

        if status.is_not_found() {
            return Ok(RoadStatusResult::NotFound {
                message: format!("road id not recognized: {road_id}"),
            });
        }

        if !status.is_success() {
            return Err(LookupFault::UnexpectedStatus {
                status,
                location: ErrorLocation::capture(),
            });
        }

        let body = response.text().await?;
        let corridors: Vec<RoadCorridor> = serde_json::from_str(&body)?;

        match corridors.into_iter().next() {
            Some(corridor) => Ok(RoadStatusResult::Success(corridor)),
            None => Err(LookupFault::EmptyBody {
                location: ErrorLocation::capture(),
            }),
        }
    }

    /// `{base}Road/{road_id}?app_id=...&app_key=...`
    fn road_url(&self, road_id: &str) -> Result<Url, LookupFault> {
        let mut url = self.base_url.join(&format!("{ROAD_ENDPOINT}{road_id}"))?;

        url.query_pairs_mut()
            .append_pair(APP_ID_PARAM, self.credentials.app_id())
            .append_pair(APP_KEY_PARAM, self.credentials.app_key().as_str());

        Ok(url)
    }
}
