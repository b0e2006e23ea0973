// Unit tests for settings loading and credential resolution.
// Tests that touch process environment variables are serialized.

use crate::TFL_API_BASE_URL;
use crate::config::{APP_ID_ENV, APP_KEY_ENV, AppSettings};
use crate::error::config::ConfigError;

use std::env;

use serial_test::serial;
use tempfile::TempDir;

fn write_settings(dir: &TempDir, contents: &str) {
    std::fs::write(dir.path().join("settings.json"), contents).expect("fixture write");
}

fn clear_credential_env() {
    // SAFETY: tests mutating the environment are #[serial], so no other
    // thread is reading these variables concurrently.
    unsafe {
        env::remove_var(APP_ID_ENV);
        env::remove_var(APP_KEY_ENV);
    }
}

/// **VALUE**: Verifies that a missing settings file falls back to defaults
/// instead of erroring.
///
/// **WHY THIS MATTERS**: Credentials may arrive entirely via environment
/// variables; a hard failure on a missing file would make that supported
/// path unusable.
///
/// **BUG THIS CATCHES**: Would catch the missing-file branch being folded
/// into the read-error branch.
#[test]
fn given_no_settings_file_when_loaded_then_defaults_returned() {
    let dir = TempDir::new().expect("temp dir");

    let settings = AppSettings::load(dir.path()).expect("defaults expected");

    assert_eq!(settings.api.base_url, TFL_API_BASE_URL);
    assert!(settings.api.app_id.is_empty());
    assert!(settings.api.app_key.is_empty());
}

/// **VALUE**: Verifies the settings file shape round-trips into the typed
/// settings.
///
/// **BUG THIS CATCHES**: Would catch a renamed or re-nested `api` section
/// breaking existing settings files.
#[test]
fn given_settings_file_when_loaded_then_values_parsed() {
    let dir = TempDir::new().expect("temp dir");
    write_settings(
        &dir,
        r#"{"api":{"app_id":"12345678","app_key":"89101123ABCDEFGH"}}"#,
    );

    let settings = AppSettings::load(dir.path()).expect("file should parse");

    assert_eq!(settings.api.app_id, "12345678");
    assert_eq!(settings.api.app_key.as_str(), "89101123ABCDEFGH");
    // base_url falls back to the upstream default when absent
    assert_eq!(settings.api.base_url, TFL_API_BASE_URL);
}

/// **VALUE**: Verifies that a corrupt settings file is a loud, located
/// error rather than silent defaults.
///
/// **WHY THIS MATTERS**: Falling back to defaults on a malformed file would
/// turn a typo in settings.json into a mystifying "missing credential"
/// failure later.
///
/// **BUG THIS CATCHES**: Would catch the parse branch swallowing the error.
#[test]
fn given_malformed_settings_file_when_loaded_then_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    write_settings(&dir, "{ not json");

    let result = AppSettings::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

/// **VALUE**: Verifies env vars take precedence over file credentials.
///
/// **WHY THIS MATTERS**: The documented override order is env over file;
/// operators rely on it to rotate keys without touching settings.json.
///
/// **BUG THIS CATCHES**: Would catch the resolution order being flipped.
#[test]
#[serial]
fn given_env_credentials_when_resolved_then_they_override_file_values() {
    clear_credential_env();
    let dir = TempDir::new().expect("temp dir");
    write_settings(
        &dir,
        r#"{"api":{"app_id":"file-id","app_key":"file-key"}}"#,
    );
    let settings = AppSettings::load(dir.path()).expect("file should parse");

    // SAFETY: #[serial] test, no concurrent env readers.
    unsafe {
        env::set_var(APP_ID_ENV, "env-id");
        env::set_var(APP_KEY_ENV, "env-key");
    }

    let credentials = settings.credentials().expect("resolution should succeed");
    clear_credential_env();

    assert_eq!(credentials.app_id(), "env-id");
    assert_eq!(credentials.app_key().as_str(), "env-key");
}

/// **VALUE**: Verifies file credentials are used when the environment is
/// silent.
///
/// **BUG THIS CATCHES**: Would catch the file fallback being lost, which
/// would force every deployment to use env vars.
#[test]
#[serial]
fn given_only_file_credentials_when_resolved_then_file_values_used() {
    clear_credential_env();
    let dir = TempDir::new().expect("temp dir");
    write_settings(
        &dir,
        r#"{"api":{"app_id":"file-id","app_key":"file-key"}}"#,
    );
    let settings = AppSettings::load(dir.path()).expect("file should parse");

    let credentials = settings.credentials().expect("resolution should succeed");

    assert_eq!(credentials.app_id(), "file-id");
    assert_eq!(credentials.app_key().as_str(), "file-key");
}

/// **VALUE**: Verifies that having no credentials anywhere is a startup
/// fault naming the missing value.
///
/// **WHY THIS MATTERS**: This is the configuration fault contract: absence
/// must be caught before any network activity, not at call time.
///
/// **BUG THIS CATCHES**: Would catch empty strings slipping through
/// resolution into a client.
#[test]
#[serial]
fn given_no_credentials_anywhere_when_resolved_then_missing_credential_error() {
    clear_credential_env();
    let dir = TempDir::new().expect("temp dir");

    let settings = AppSettings::load(dir.path()).expect("defaults expected");
    let result = settings.credentials();

    assert!(matches!(
        result,
        Err(ConfigError::MissingCredential { name: "app_id", .. })
    ));
}
