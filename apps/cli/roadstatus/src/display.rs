//! Console rendering of lookup outcomes.

use road_core::road_client::RoadStatusResult;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Render the outcome to stdout and pick the process exit code.
pub fn display_road_status(road_id: &str, result: &RoadStatusResult) -> u8 {
    for line in status_lines(road_id, result) {
        println!("{line}");
    }
    exit_code(result)
}

pub fn exit_code(result: &RoadStatusResult) -> u8 {
    match result {
        RoadStatusResult::Success(_) => EXIT_SUCCESS,
        RoadStatusResult::NotFound { .. } | RoadStatusResult::Error => EXIT_FAILURE,
    }
}

/// The stdout contract, separated from printing so it is testable.
pub fn status_lines(road_id: &str, result: &RoadStatusResult) -> Vec<String> {
    match result {
        RoadStatusResult::Success(corridor) => vec![
            format!("The status of the {} is as follows", corridor.display_name),
            format!("        Road status is {}", corridor.road_status),
            format!(
                "        Road status Description is {}",
                corridor.road_status_description
            ),
        ],
        RoadStatusResult::NotFound { .. } => {
            vec![format!("{road_id} is not a valid road")]
        }
        RoadStatusResult::Error => {
            vec![format!("Fail to get Road status for {road_id}")]
        }
    }
}
