use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use url::Url;

use crate::app::infrastructure::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Base URL of the shortening service API.
    #[serde(default = "default_service_url")]
    pub service_url: String,

    /// Origin that slugs are resolved against. Falls back to `service_url`.
    #[serde(default)]
    pub public_origin: Option<String>,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_service_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            public_origin: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl AppSettings {
    /// Origin used to turn a slug into an absolute short URL.
    ///
    /// Only scheme, host and port are kept; any path on the configured URL is dropped.
    pub fn origin(&self) -> Result<Url, AppError> {
        let raw = self.public_origin.as_deref().unwrap_or(&self.service_url);
        let origin = Url::parse(raw)?.origin();
        if !origin.is_tuple() {
            return Err(AppError::Settings(format!("'{}' has no usable origin", raw)));
        }
        Ok(Url::parse(&origin.ascii_serialization())?)
    }

    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(config_path: &Path) -> Self {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                // File doesn't exist, use defaults
                let default = Self::default();
                if let Err(e) = default.save_to(config_path) {
                    tracing::debug!("Could not write default settings: {}", e);
                }
                default
            }
            Err(e) => {
                // Leave the file alone so nothing the user wrote is lost
                tracing::warn!("Failed to read settings {}: {}. Using defaults.", config_path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), AppError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("ferrislink");
        path.push("settings.json");
        path
    }
}
