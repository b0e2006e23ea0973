pub mod config;
pub mod road_client;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    RoadClient(#[from] road_client::RoadClientError),
}
