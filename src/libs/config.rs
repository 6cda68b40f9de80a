//! Configuration management for the Join client.
//!
//! Holds the backend location and the timings of the overlay and popup
//! transitions. Settings live in a pretty-printed `config.json` inside the
//! platform data directory and can be overridden from the environment.
//!
//! ## Configuration Structure
//!
//! - **API Config**: Base URL of the Join backend
//! - **UI Config**: Enter/exit/dwell durations for overlays and popups
//!
//! ## Environment Overrides
//!
//! `JOIN_API_URL` replaces the configured base URL. A `.env` file in the
//! working directory is read first, so the variable can live there during
//! development.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use join::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Backend: {}", config.api.base_url);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;
use std::time::Duration;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding [`ApiConfig::base_url`].
pub const API_URL_ENV: &str = "JOIN_API_URL";

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";

/// Backend connection settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Base URL every request path is appended to.
    ///
    /// Always ends with `/` after [`Config::read`] so that paths such as
    /// `join/tasks` can be concatenated directly.
    pub base_url: String,
}

/// Transition timings in milliseconds.
///
/// These only shape the overlay and popup state machine; nothing in the
/// client waits on them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UiConfig {
    /// Slide-in and slide-out time of overlays.
    pub overlay_slide_ms: u64,
    /// How long a notification popup stays fully visible.
    pub popup_visible_ms: u64,
    /// Fade-out time of a notification popup.
    pub popup_fade_ms: u64,
    /// Enter and exit time of the "task added" popup.
    pub success_popup_slide_ms: u64,
    /// How long the "task added" popup stays visible.
    pub success_popup_visible_ms: u64,
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    pub api: ApiConfig,

    /// Transition timings; defaults apply when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui: Option<UiConfig>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for UiConfig {
    /// Defaults:
    /// - 200ms overlay slide
    /// - 3000ms popup visibility, 300ms fade
    /// - 500ms success popup slide, 2000ms visibility
    fn default() -> Self {
        UiConfig {
            overlay_slide_ms: 200,
            popup_visible_ms: 3000,
            popup_fade_ms: 300,
            success_popup_slide_ms: 500,
            success_popup_visible_ms: 2000,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api: ApiConfig::default(),
            ui: None,
        }
    }
}

impl UiConfig {
    pub fn overlay_slide(&self) -> Duration {
        Duration::from_millis(self.overlay_slide_ms)
    }

    pub fn popup_visible(&self) -> Duration {
        Duration::from_millis(self.popup_visible_ms)
    }

    pub fn popup_fade(&self) -> Duration {
        Duration::from_millis(self.popup_fade_ms)
    }

    pub fn success_popup_slide(&self) -> Duration {
        Duration::from_millis(self.success_popup_slide_ms)
    }

    pub fn success_popup_visible(&self) -> Duration {
        Duration::from_millis(self.success_popup_visible_ms)
    }
}

impl Config {
    /// Reads configuration from the platform data directory.
    ///
    /// ## File Location
    ///
    /// - **Windows**: `%LOCALAPPDATA%\join\join-client\config.json`
    /// - **macOS**: `~/Library/Application Support/join/join-client/config.json`
    /// - **Linux**: `~/.local/share/join/join-client/config.json`
    ///
    /// ## Error Handling
    ///
    /// - **Missing file**: Returns default configuration (not an error)
    /// - **Corrupted file**: Returns parsing error
    ///
    /// The `JOIN_API_URL` override is applied after loading.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let mut config = Self::read_from(&config_file_path)?;
        config.apply_env();
        Ok(config)
    }

    /// Reads configuration from an explicit file, without environment overrides.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&config_str)?;
        config.api.base_url = normalize_base_url(&config.api.base_url);
        Ok(config)
    }

    /// Saves the configuration to the platform data directory.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    /// Saves the configuration as pretty JSON to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Applies `JOIN_API_URL`, loading a `.env` file first when present.
    pub fn apply_env(&mut self) {
        let _ = dotenv::dotenv();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                msg_debug!(Message::ConfigApiUrlOverride(url.clone()));
                self.api.base_url = normalize_base_url(&url);
            }
        }
    }

    /// Transition timings, falling back to defaults.
    pub fn ui(&self) -> UiConfig {
        self.ui.clone().unwrap_or_default()
    }
}

/// Trims the URL and guarantees a single trailing slash.
pub fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    format!("{}/", trimmed)
}
