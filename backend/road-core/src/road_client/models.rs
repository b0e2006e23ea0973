use serde::Deserialize;

/// One corridor entry from the upstream response array.
///
/// Field names follow the upstream JSON exactly (the service publishes them
/// case-sensitively); the response carries additional fields (`id`,
/// `bounds`, `envelope`, `url`, `$type`) which are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoadCorridor {
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "statusSeverity")]
    pub road_status: String,
    #[serde(rename = "statusSeverityDescription")]
    pub road_status_description: String,
}

/// Outcome of a single road status lookup. Exactly one variant per call.
///
/// The failure variant is deliberately opaque: the cause is logged by the
/// client and callers only branch on the three-way tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoadStatusResult {
    /// The corridor exists; carries element zero of the response array.
    Success(RoadCorridor),
    /// The upstream service does not recognize the road id.
    NotFound { message: String },
    /// Transport, HTTP, or decode failure.
    Error,
}
