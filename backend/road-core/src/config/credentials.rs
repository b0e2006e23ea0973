//! Credential resolution and validation.
//!
//! Credentials are loaded once per process and treated as read-only after
//! that. The key is wrapped in [`RedactedAppKey`] the moment it is
//! validated, so nothing downstream can log or serialize it.

use crate::error::config::ConfigError;

use common::{ErrorLocation, RedactedAppKey};

use std::env;

use log::{debug, info, warn};

pub const APP_ID_ENV: &str = "TFL_APP_ID";
pub const APP_KEY_ENV: &str = "TFL_APP_KEY";

/// Validated credential pair for the upstream API.
///
/// `app_id` travels in the clear (it is part of the query string and not
/// secret); `app_key` stays redacted until the request is built.
#[derive(Debug, Clone)]
pub struct ApiCredentials {
    app_id: String,
    app_key: RedactedAppKey,
}

impl ApiCredentials {
    /// Build a credential pair, rejecting empty or whitespace-only values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] naming the first missing
    /// value.
    #[track_caller]
    pub fn new(app_id: &str, app_key: &str) -> Result<Self, ConfigError> {
        let app_id = app_id.trim();
        let app_key = app_key.trim();

        if app_id.is_empty() {
            return Err(ConfigError::MissingCredential {
                name: "app_id",
                location: ErrorLocation::capture(),
            });
        }

        if app_key.is_empty() {
            return Err(ConfigError::MissingCredential {
                name: "app_key",
                location: ErrorLocation::capture(),
            });
        }

        Ok(Self {
            app_id: app_id.to_string(),
            app_key: RedactedAppKey::new(app_key.to_string()),
        })
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn app_key(&self) -> &RedactedAppKey {
        &self.app_key
    }
}

/// Environment-sourced credential overrides. `None` means "not set".
#[derive(Debug, Default)]
pub struct EnvCredentials {
    pub app_id: Option<String>,
    pub app_key: Option<String>,
}

/// Result of attempting to load a `.env` file.
#[derive(Debug)]
pub struct EnvLoadResult {
    /// Path to the loaded `.env` file, if found.
    pub path: Option<std::path::PathBuf>,
    /// Whether any `.env` file was loaded.
    pub loaded: bool,
}

/// Read credential overrides from the environment.
///
/// A `.env` file is loaded first if one exists (non-fatal if absent), then
/// the `TFL_APP_ID` / `TFL_APP_KEY` variables are consulted.
pub fn load_env_credentials() -> EnvCredentials {
    let env_result = try_load_dotenv();
    if !env_result.loaded {
        debug!("No .env file found - will check existing environment variables");
    }

    EnvCredentials {
        app_id: env_override(APP_ID_ENV),
        app_key: env_override(APP_KEY_ENV),
    }
}

/// Attempts to load `.env` from known locations.
fn try_load_dotenv() -> EnvLoadResult {
    // Try current directory first
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {:?}", path);
        return EnvLoadResult {
            path: Some(path),
            loaded: true,
        };
    }

    // Try executable directory
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let env_path = exe_dir.join(".env");
            if env_path.exists() {
                match dotenvy::from_path(&env_path) {
                    Ok(_) => {
                        info!("Loaded .env from: {:?}", env_path);
                        return EnvLoadResult {
                            path: Some(env_path),
                            loaded: true,
                        };
                    }
                    Err(e) => {
                        warn!("Failed to parse .env at {:?}: {}", env_path, e);
                    }
                }
            }
        }
    }

    EnvLoadResult {
        path: None,
        loaded: false,
    }
}

/// Read one environment override, treating unset, blank, and non-unicode
/// values as absent.
fn env_override(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        Ok(_) => {
            debug!("{name} is set but blank, ignoring");
            None
        }
        Err(env::VarError::NotPresent) => None,
        Err(env::VarError::NotUnicode(_)) => {
            warn!("{name} contains invalid unicode, ignoring");
            None
        }
    }
}
