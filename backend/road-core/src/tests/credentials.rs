// Unit tests for credential validation and redaction.
// The env/.env resolution path is covered in tests/config.rs.

use crate::config::ApiCredentials;
use crate::error::config::ConfigError;

/// **VALUE**: Verifies that an empty app_id is rejected before a client can
/// ever be constructed from it.
///
/// **WHY THIS MATTERS**: Misconfiguration must surface at startup, not as a
/// confusing upstream 4xx at call time. The credential constructor is the
/// gate; if it accepted empty values, every later layer would have to
/// re-check.
///
/// **BUG THIS CATCHES**: Would catch the emptiness guard being dropped or
/// reordered out of the constructor.
#[test]
fn given_empty_app_id_when_credentials_built_then_missing_credential_error() {
    let result = ApiCredentials::new("", "89101123ABCDEFGH");

    assert!(matches!(
        result,
        Err(ConfigError::MissingCredential { name: "app_id", .. })
    ));
}

/// **VALUE**: Verifies that an empty app_key is rejected the same way.
///
/// **WHY THIS MATTERS**: Same startup-visibility contract as the app_id
/// check; the error names the offending value so the fix is obvious.
///
/// **BUG THIS CATCHES**: Would catch the two checks being collapsed into
/// one that reports the wrong credential name.
#[test]
fn given_empty_app_key_when_credentials_built_then_missing_credential_error() {
    let result = ApiCredentials::new("12345678", "");

    assert!(matches!(
        result,
        Err(ConfigError::MissingCredential { name: "app_key", .. })
    ));
}

/// **VALUE**: Verifies that whitespace-only values do not pass as present.
///
/// **BUG THIS CATCHES**: Would catch the guard checking `is_empty()` on the
/// raw value instead of the trimmed one.
#[test]
fn given_blank_credentials_when_built_then_missing_credential_error() {
    assert!(ApiCredentials::new("   ", "89101123ABCDEFGH").is_err());
    assert!(ApiCredentials::new("12345678", "  \t ").is_err());
}

#[test]
fn given_valid_pair_when_built_then_values_are_readable() {
    let credentials =
        ApiCredentials::new("12345678", "89101123ABCDEFGH").expect("valid pair should build");

    assert_eq!(credentials.app_id(), "12345678");
    assert_eq!(credentials.app_key().as_str(), "89101123ABCDEFGH");
}

/// **VALUE**: Verifies the key cannot leak through a Debug dump of the
/// credential pair.
///
/// **WHY THIS MATTERS**: `ApiCredentials` derives Debug for diagnostics;
/// the derive must bottom out in the redacting wrapper, not the raw string.
///
/// **BUG THIS CATCHES**: Would catch the app_key field being changed back
/// to a plain `String`.
#[test]
fn given_credentials_when_debug_formatted_then_key_is_redacted() {
    let credentials =
        ApiCredentials::new("12345678", "89101123ABCDEFGH").expect("valid pair should build");

    let dump = format!("{credentials:?}");

    assert!(!dump.contains("89101123ABCDEFGH"), "Debug leaked the key");
    assert!(dump.contains("12345678"), "app_id is not secret");
}
