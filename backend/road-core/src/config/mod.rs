pub mod credentials;

pub use credentials::{APP_ID_ENV, APP_KEY_ENV, ApiCredentials};

use crate::TFL_API_BASE_URL;
use crate::error::config::ConfigError;

use common::{ErrorLocation, RedactedAppKey};

use std::path::Path;

use log::info;
use serde::Deserialize;

const SETTINGS_FILE_NAME: &str = "settings.json";

// ============================================
// SETTINGS STRUCTS
// ============================================

/// The `api` section of `settings.json`.
///
/// The key deserializes straight into [`RedactedAppKey`] so a Debug dump of
/// loaded settings can never leak it.
#[derive(Debug, Clone, Deserialize)]
pub struct TflApiSettings {
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub app_key: RedactedAppKey,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for TflApiSettings {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            app_key: RedactedAppKey::default(),
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub api: TflApiSettings,
}

fn default_base_url() -> String {
    TFL_API_BASE_URL.to_string()
}

// ============================================
// IMPLEMENTATION
// ============================================

impl AppSettings {
    /// Load settings from `{settings_dir}/settings.json`.
    ///
    /// A missing file is not an error: credentials may arrive entirely via
    /// the environment, so defaults are returned and the fallback is
    /// info-logged.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or
    /// does not parse.
    pub fn load(settings_dir: &Path) -> Result<Self, ConfigError> {
        let settings_path = settings_dir.join(SETTINGS_FILE_NAME);

        if !settings_path.exists() {
            info!(
                "Settings file not found at {}, using defaults",
                settings_path.display()
            );
            return Ok(Self::default());
        }

        let contents =
            std::fs::read_to_string(&settings_path).map_err(|e| ConfigError::ReadError {
                location: ErrorLocation::capture(),
                path: settings_path.clone(),
                source: e,
            })?;

        let settings: AppSettings =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError {
                location: ErrorLocation::capture(),
                path: settings_path.clone(),
                reason: e.to_string(),
            })?;

        info!("Settings loaded from {}", settings_path.display());
        Ok(settings)
    }

    /// Resolve the credential pair for this process.
    ///
    /// Environment values (including any loaded from a `.env` file) take
    /// precedence over the settings file; whatever wins must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] when either value is
    /// still empty after both sources are consulted.
    pub fn credentials(&self) -> Result<ApiCredentials, ConfigError> {
        let env = credentials::load_env_credentials();

        let app_id = env.app_id.unwrap_or_else(|| self.api.app_id.clone());
        let app_key = env
            .app_key
            .unwrap_or_else(|| self.api.app_key.as_str().to_string());

        ApiCredentials::new(&app_id, &app_key)
    }
}
