use crate::redacted_key::RedactedAppKey;

const SECRET: &str = "89101123ABCDEFGH";

/// **VALUE**: Verifies that the key value never appears in Debug or Display
/// output.
///
/// **WHY THIS MATTERS**: Error messages and log lines routinely format
/// surrounding structs with `{:?}`. If the key leaked through either trait,
/// every diagnostic path would become a credential disclosure.
///
/// **BUG THIS CATCHES**: Would catch a derived `Debug` replacing the manual
/// redacting impl.
#[test]
fn given_key_when_formatted_then_value_is_redacted() {
    let key = RedactedAppKey::new(String::from(SECRET));

    let debug = format!("{key:?}");
    let display = format!("{key}");

    assert!(!debug.contains(SECRET), "Debug output leaked the key");
    assert!(!display.contains(SECRET), "Display output leaked the key");
    assert!(debug.contains("REDACTED"));
}

/// **VALUE**: Verifies that serde serialization of the key is refused.
///
/// **WHY THIS MATTERS**: Settings structs are serializable; a key that
/// serialized silently could end up written back to disk or into a
/// structured log.
///
/// **BUG THIS CATCHES**: Would catch someone replacing the refusing
/// `Serialize` impl with a derive.
#[test]
fn given_key_when_serialized_then_errors() {
    let key = RedactedAppKey::new(String::from(SECRET));

    let result = serde_json::to_string(&key);

    assert!(result.is_err(), "serialization should be refused");
}

#[test]
fn given_key_when_read_back_then_as_str_returns_value() {
    let key = RedactedAppKey::from(String::from(SECRET));

    assert_eq!(key.as_str(), SECRET);
    assert_eq!(key.len(), SECRET.len());
    assert!(!key.is_empty());
}
