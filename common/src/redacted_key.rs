//! Secret handling for the upstream API key.

use crate::{ErrorLocation, RedactError};

use std::fmt;

use serde::ser::Error;
use zeroize::Zeroize;

/// The upstream `app_key` credential. Never exposes its value through
/// `Debug`, `Display`, or serde; the backing memory is wiped on drop.
///
/// The raw value is only reachable through [`RedactedAppKey::as_str`],
/// which keeps the transmission point greppable.
#[derive(Clone)]
pub struct RedactedAppKey {
    inner: String,
}

impl RedactedAppKey {
    pub fn new(key: String) -> Self {
        Self { inner: key }
    }

    /// The raw key value, for building the request query string only.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Key length, safe to log.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl From<String> for RedactedAppKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl Default for RedactedAppKey {
    fn default() -> Self {
        Self::new(String::new())
    }
}

// Deserialization is the safe direction: settings files hold the key, so
// reading it in is fine; only writing it out is refused.
impl<'de> serde::Deserialize<'de> for RedactedAppKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <String as serde::Deserialize>::deserialize(deserializer).map(Self::new)
    }
}

impl fmt::Debug for RedactedAppKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedAppKey([REDACTED])")
    }
}

impl fmt::Display for RedactedAppKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED APP KEY]")
    }
}

impl Drop for RedactedAppKey {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

// Refuse serde serialization so the key cannot ride along in a settings
// dump or a serialized error.
impl serde::Serialize for RedactedAppKey {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(RedactError::Serialization {
            message: String::from(
                "RedactedAppKey cannot be serialized - use as_str() explicitly",
            ),
            location: ErrorLocation::capture(),
        }))
    }
}
