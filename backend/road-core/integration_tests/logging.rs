// Log-emission contracts: the failure path logs its cause exactly once;
// the success and not-found paths stay silent at error severity.

use crate::support::{A2_BODY, capture_logs, client_for};

use road_core::road_client::RoadStatusResult;

use std::time::Duration;

use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

const DEADLINE: Duration = Duration::from_secs(5);

/// **VALUE**: Verifies the failure path emits exactly one error-severity
/// record, and that the record carries enough context to diagnose.
///
/// **WHY THIS MATTERS**: The failure outcome is opaque to callers; the
/// single log line is the only diagnostic. Zero lines means silent
/// failures, two means double-logging from nested error handling.
///
/// **BUG THIS CATCHES**: Would catch an extra `error!` creeping into the
/// lookup internals alongside the one at the collapse point.
#[tokio::test]
async fn given_failing_lookup_when_completed_then_exactly_one_error_logged() {
    let logger = capture_logs();

    // GIVEN: upstream is broken
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let client = client_for(&server.uri());

    // WHEN
    let result = client
        .road_status("A2", DEADLINE)
        .await
        .expect("non-blank road id");

    // THEN: one error record, naming the road id
    assert_eq!(result, RoadStatusResult::Error);
    let errors = logger.thread_errors();
    assert_eq!(errors.len(), 1, "expected exactly one error log: {errors:?}");
    assert!(errors[0].contains("A2"), "diagnostic should name the road id");
}

/// **VALUE**: Verifies an elapsed deadline is also logged exactly once.
///
/// **BUG THIS CATCHES**: Would catch the timeout branch bypassing the
/// single logging point.
#[tokio::test]
async fn given_elapsed_deadline_when_completed_then_exactly_one_error_logged() {
    let logger = capture_logs();

    // GIVEN: upstream answers too late
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(A2_BODY, "application/json")
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&server)
        .await;
    let client = client_for(&server.uri());

    // WHEN
    let result = client
        .road_status("A2", Duration::from_millis(250))
        .await
        .expect("non-blank road id");

    // THEN
    assert_eq!(result, RoadStatusResult::Error);
    assert_eq!(logger.thread_errors().len(), 1);
}

/// **VALUE**: Verifies the success path emits no error-severity records.
///
/// **WHY THIS MATTERS**: Error logs page people. A successful lookup that
/// also logged an error would make every invocation look like an incident.
#[tokio::test]
async fn given_successful_lookup_when_completed_then_no_error_logged() {
    let logger = capture_logs();

    // GIVEN: upstream knows the A2 corridor
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(A2_BODY, "application/json"))
        .mount(&server)
        .await;
    let client = client_for(&server.uri());

    // WHEN
    let result = client
        .road_status("A2", DEADLINE)
        .await
        .expect("non-blank road id");

    // THEN
    assert!(matches!(result, RoadStatusResult::Success(_)));
    assert!(logger.thread_errors().is_empty());
}

/// **VALUE**: Verifies the not-found path emits no error-severity records.
///
/// **WHY THIS MATTERS**: An unknown road id is an expected outcome, not a
/// fault; logging it as an error would bury real failures in noise.
///
/// **BUG THIS CATCHES**: Would catch 404 being routed through the fault
/// branch before being mapped to not-found.
#[tokio::test]
async fn given_unknown_road_id_when_completed_then_no_error_logged() {
    let logger = capture_logs();

    // GIVEN: upstream does not know the id
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let client = client_for(&server.uri());

    // WHEN
    let result = client
        .road_status("A338", DEADLINE)
        .await
        .expect("non-blank road id");

    // THEN
    assert!(matches!(result, RoadStatusResult::NotFound { .. }));
    assert!(logger.thread_errors().is_empty());
}
