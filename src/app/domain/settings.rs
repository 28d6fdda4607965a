use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::AppError;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Base URL of the resume backend
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Per-request timeout. `None` waits indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,

    /// Last directory used in an open/save dialog
    #[serde(default)]
    pub last_directory: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_dark_mode() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_secs: None,
            dark_mode: default_dark_mode(),
            last_directory: None,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        let config_path = Self::get_config_path();

        if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            }
        } else {
            let default = Self::default();
            // Try to save defaults for next time
            if let Err(e) = default.save() {
                log::warn!("Failed to write default settings: {}", e);
            }
            default
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        let contents = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        self.validate()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let url = self.api_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AppError::Settings(format!(
                "API URL must start with http:// or https:// (got \"{}\")",
                self.api_url
            )));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(AppError::Settings(
                "Request timeout must be at least one second".to_string(),
            ));
        }
        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("resume-editor");
        path.push("settings.json");
        path
    }
}
