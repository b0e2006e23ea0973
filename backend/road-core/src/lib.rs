//! Core library for the roadstatus CLI.
//!
//! This crate owns the interesting behavior: settings and credential
//! loading, the error tree, and the HTTP client that turns one road id
//! into one [`road_client::RoadStatusResult`]. The binary in
//! `apps/cli/roadstatus` only wires these pieces together and renders
//! the outcome.

pub mod config;
pub mod error;
pub mod road_client;

#[cfg(test)]
mod tests;

pub use road_client::{RoadCorridor, RoadStatusClient, RoadStatusResult};

pub const TFL_API_HOSTNAME: &str = "api.tfl.gov.uk";
pub const TFL_API_BASE_URL: &str = const_format::concatcp!("https://", TFL_API_HOSTNAME, "/");
