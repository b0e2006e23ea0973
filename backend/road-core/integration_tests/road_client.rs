// Behavior tests for the road status client against a mock HTTP server.
// Log-emission contracts are covered separately in logging.rs.

use crate::support::{A2_BODY, TEST_APP_ID, TEST_APP_KEY, client_for, test_credentials};

use road_core::error::road_client::RoadClientError;
use road_core::road_client::{RoadStatusClient, RoadStatusResult};

use std::time::{Duration, Instant};

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DEADLINE: Duration = Duration::from_secs(5);

/// **VALUE**: Verifies a malformed base URL fails construction, before any
/// network activity is possible.
///
/// **WHY THIS MATTERS**: Construction is the misconfiguration gate; a
/// client that accepted a bad base URL would fail per call instead of at
/// startup.
#[test]
fn given_invalid_base_url_when_client_built_then_construction_error() {
    let result = RoadStatusClient::new(reqwest::Client::new(), "not a url", test_credentials());

    assert!(matches!(result, Err(RoadClientError::BaseUrl { .. })));
}

/// **VALUE**: Verifies the happy path end to end: request shape, response
/// decoding, and the success outcome.
///
/// **WHY THIS MATTERS**: The matchers pin the whole outgoing contract -
/// `GET /Road/{id}`, both credential query parameters, and the JSON accept
/// header. If any of them regressed, the mock would not match, the server
/// would return 404, and this test would fail on the outcome.
///
/// **BUG THIS CATCHES**: Would catch credentials dropped from the query
/// string, a renamed endpoint segment, a missing Accept header, or field
/// mapping errors in the decoded corridor.
#[tokio::test]
async fn given_valid_road_id_when_looked_up_then_returns_success_with_corridor() {
    // GIVEN: upstream knows the A2 corridor
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Road/A2"))
        .and(query_param("app_id", TEST_APP_ID))
        .and(query_param("app_key", TEST_APP_KEY))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(A2_BODY, "application/json"))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server.uri());

    // WHEN: looking up A2
    let result = client
        .road_status("A2", DEADLINE)
        .await
        .expect("non-blank road id");

    // THEN: the first corridor of the response is returned
    match result {
        RoadStatusResult::Success(corridor) => {
            assert_eq!(corridor.display_name, "A2");
            assert_eq!(corridor.road_status, "Good");
            assert_eq!(corridor.road_status_description, "No Exceptional Delays");
        }
        other => panic!("expected Success, got {other:?}"),
    }
}

/// **VALUE**: Verifies that an upstream 404 is the not-found outcome, not a
/// failure.
///
/// **WHY THIS MATTERS**: An unknown road id is an expected, non-exceptional
/// answer; callers present it differently from a fault and it must carry no
/// corridor.
///
/// **BUG THIS CATCHES**: Would catch 404 falling into the generic non-2xx
/// branch.
#[tokio::test]
async fn given_unknown_road_id_when_looked_up_then_returns_not_found() {
    // GIVEN: upstream does not know A338
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Road/A338"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let client = client_for(&server.uri());

    // WHEN
    let result = client
        .road_status("A338", DEADLINE)
        .await
        .expect("non-blank road id");

    // THEN: not-found, message names the id
    match result {
        RoadStatusResult::NotFound { message } => {
            assert!(message.contains("A338"), "message should name the id");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

/// **VALUE**: Verifies a 5xx collapses to the opaque failure outcome.
///
/// **BUG THIS CATCHES**: Would catch server errors being surfaced as a
/// panic, an `Err`, or a half-populated success.
#[tokio::test]
async fn given_server_error_when_looked_up_then_returns_error() {
    // GIVEN: upstream is broken
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let client = client_for(&server.uri());

    // WHEN / THEN
    let result = client
        .road_status("A2", DEADLINE)
        .await
        .expect("non-blank road id");
    assert_eq!(result, RoadStatusResult::Error);
}

/// **VALUE**: Verifies a connection-level fault (nothing listening) also
/// collapses to the opaque failure outcome.
///
/// **WHY THIS MATTERS**: Transport faults and HTTP faults must be
/// indistinguishable to the caller; only the log carries the cause.
#[tokio::test]
async fn given_unreachable_server_when_looked_up_then_returns_error() {
    // GIVEN: a server that has gone away
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);
    let client = client_for(&uri);

    // WHEN / THEN
    let result = client
        .road_status("A2", DEADLINE)
        .await
        .expect("non-blank road id");
    assert_eq!(result, RoadStatusResult::Error);
}

/// **VALUE**: Verifies the deadline bounds the call: a response that never
/// arrives in time yields the failure outcome promptly instead of hanging.
///
/// **WHY THIS MATTERS**: The entry point promises the process exits within
/// its 30-second bound. The client must resolve at the deadline, not at
/// the transport's leisure.
///
/// **BUG THIS CATCHES**: Would catch the timeout wrapper being dropped, or
/// only guarding the send and not the body read.
#[tokio::test]
async fn given_slow_server_when_deadline_elapses_then_returns_error_promptly() {
    // GIVEN: upstream answers far too late
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

    // WHEN: the deadline is much shorter than the response delay
    let started = Instant::now();
    let result = client
        .road_status("A2", Duration::from_millis(250))
        .await
        .expect("non-blank road id");
    let elapsed = started.elapsed();

    // THEN: failure outcome, resolved near the deadline
    assert_eq!(result, RoadStatusResult::Error);
    assert!(
        elapsed < Duration::from_secs(5),
        "call should resolve at the deadline, took {elapsed:?}"
    );
}

/// **VALUE**: Verifies a 200 with zero corridors is a failure, not an empty
/// success and not a crash.
///
/// **WHY THIS MATTERS**: The result contract says success always carries a
/// corridor. Indexing element zero of an empty array must not panic; the
/// empty body maps to the opaque failure outcome.
#[tokio::test]
async fn given_empty_array_body_when_looked_up_then_returns_error() {
    // GIVEN: upstream answers 200 with no corridors
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&server)
        .await;
    let client = client_for(&server.uri());

    // WHEN / THEN
    let result = client
        .road_status("A2", DEADLINE)
        .await
        .expect("non-blank road id");
    assert_eq!(result, RoadStatusResult::Error);
}

/// **VALUE**: Verifies a body that is not the expected JSON array collapses
/// to the failure outcome.
#[tokio::test]
async fn given_malformed_body_when_looked_up_then_returns_error() {
    // GIVEN: upstream answers 200 with an object instead of an array
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"unexpected":"shape"}"#, "application/json"),
        )
        .mount(&server)
        .await;
    let client = client_for(&server.uri());

    // WHEN / THEN
    let result = client
        .road_status("A2", DEADLINE)
        .await
        .expect("non-blank road id");
    assert_eq!(result, RoadStatusResult::Error);
}

/// **VALUE**: Verifies a blank road id fails fast without any network
/// activity.
///
/// **WHY THIS MATTERS**: The precondition is checked before a request is
/// built; the `.expect(0)` assertion on the mock (verified when the server
/// drops) proves no call leaked through.
///
/// **BUG THIS CATCHES**: Would catch the validation being moved after the
/// send, or whitespace ids slipping past an `is_empty` check.
#[tokio::test]
async fn given_blank_road_id_when_looked_up_then_no_request_is_sent() {
    // GIVEN: a server that must never be called
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server.uri());

    // WHEN: looking up a whitespace id
    let result = client.road_status("   ", DEADLINE).await;

    // THEN: immediate validation error
    assert!(matches!(
        result,
        Err(RoadClientError::EmptyRoadId { .. })
    ));
}

/// **VALUE**: Verifies idempotence: two calls against unchanged upstream
/// state produce structurally equal results.
///
/// **WHY THIS MATTERS**: The client holds no per-call mutable state; if a
/// second call produced a different result class, something inside the
/// client would be stateful in a way the contract forbids.
#[tokio::test]
async fn given_unchanged_upstream_when_called_twice_then_results_are_equal() {
    // GIVEN: a stable upstream
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Road/A2"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(A2_BODY, "application/json"))
        .expect(2)
        .mount(&server)
        .await;
    let client = client_for(&server.uri());

    // WHEN: the same lookup runs twice
    let first = client
        .road_status("A2", DEADLINE)
        .await
        .expect("non-blank road id");
    let second = client
        .road_status("A2", DEADLINE)
        .await
        .expect("non-blank road id");

    // THEN: same tag, same payload
    assert_eq!(first, second);
}
