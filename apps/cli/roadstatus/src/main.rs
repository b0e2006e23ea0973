use roadstatus::cli::Cli;
use roadstatus::display;
use roadstatus::error::RoadstatusError;
use roadstatus::logger::initialize as logger_initialize;

use road_core::config::AppSettings;
use road_core::road_client::{DEFAULT_DEADLINE, RoadStatusClient};

use common::ErrorLocation;

use std::env;
use std::fs::create_dir_all;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{error, info};

/// Transport-level timeout on the pooled HTTP client. The per-call
/// deadline enforced by the lookup is tighter; this is the outer bound the
/// connection pool applies to any request.
const TRANSPORT_TIMEOUT: Duration = Duration::from_secs(45);

const LOG_DIR_NAME: &str = "roadstatus";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(parse_error) => {
            // No road id, no network activity. clap renders its own usage text.
            let _ = parse_error.print();
            return ExitCode::from(display::EXIT_FAILURE);
        }
    };

    match run(&cli).await {
        Ok(exit) => ExitCode::from(exit),
        Err(e) => {
            error!("TFL road status: failed to get road status: {e}");
            println!("Fail to get Road status for {}", cli.road_id);
            ExitCode::from(display::EXIT_FAILURE)
        }
    }
}

async fn run(cli: &Cli) -> Result<u8, RoadstatusError> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(env::temp_dir)
        .join(LOG_DIR_NAME);

    create_dir_all(&log_dir).map_err(|e| RoadstatusError::App {
        message: format!("Failed to create log directory: {e}"),
        location: ErrorLocation::capture(),
    })?;

    logger_initialize(&log_dir)?;

    info!("roadstatus starting, road id '{}'", cli.road_id);

    let settings_dir = env::current_dir().map_err(|e| RoadstatusError::App {
        message: format!("Failed to resolve working directory: {e}"),
        location: ErrorLocation::capture(),
    })?;

    let settings = AppSettings::load(&settings_dir)?;
    let credentials = settings.credentials()?;

    // One pooled client per process; the road client borrows it for every call.
    let http = reqwest::Client::builder()
        .timeout(TRANSPORT_TIMEOUT)
        .build()
        .map_err(|e| RoadstatusError::App {
            message: format!("Failed to build HTTP client: {e}"),
            location: ErrorLocation::capture(),
        })?;

    let client = RoadStatusClient::new(http, &settings.api.base_url, credentials)?;
    let result = client.road_status(&cli.road_id, DEFAULT_DEADLINE).await?;

    Ok(display::display_road_status(&cli.road_id, &result))
}
