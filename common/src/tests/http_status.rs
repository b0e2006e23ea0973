use crate::http_status::HttpStatusCode;

/// **VALUE**: Verifies the status ranges that drive response interpretation.
///
/// **WHY THIS MATTERS**: The road lookup branches on these predicates to pick
/// between the success, not-found, and failure outcomes. An off-by-one in a
/// range boundary would silently misclassify responses.
///
/// **BUG THIS CATCHES**: Would catch 2xx/4xx/5xx boundary mistakes, e.g.
/// treating 300 as success or 400 as a server error.
#[test]
fn given_status_ranges_when_categorized_then_predicates_match() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(299).is_success());
    assert!(!HttpStatusCode(300).is_success());
    assert!(!HttpStatusCode(199).is_success());

    assert!(HttpStatusCode(400).is_client_error());
    assert!(HttpStatusCode(404).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());

    assert!(HttpStatusCode(500).is_server_error());
    assert!(HttpStatusCode(599).is_server_error());
    assert!(!HttpStatusCode(404).is_server_error());
}

/// **VALUE**: Verifies that 404 and only 404 reports `is_not_found`.
///
/// **WHY THIS MATTERS**: 404 is the one non-2xx status with its own outcome
/// (the road id does not exist). If another client error matched, callers
/// would see "not a valid road" for, say, a 403 credential rejection.
///
/// **BUG THIS CATCHES**: Would catch `is_not_found` being widened to all
/// 4xx statuses.
#[test]
fn given_not_found_status_when_checked_then_only_404_matches() {
    assert!(HttpStatusCode(404).is_not_found());
    assert!(!HttpStatusCode(403).is_not_found());
    assert!(!HttpStatusCode(410).is_not_found());
    assert!(!HttpStatusCode(200).is_not_found());
}

#[test]
fn given_u16_when_converted_then_displays_bare_code() {
    let status = HttpStatusCode::from(503);
    assert_eq!(format!("{status}"), "503");
}
