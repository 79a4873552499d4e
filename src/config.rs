//! Configuration file support for the demo application.
//!
//! Configuration is loaded from `~/.config/modalpick/config.toml`. A missing
//! or malformed file falls back to defaults with a warning.
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/modalpick/config.toml
//! theme = "dark"
//! date_format = "%Y-%m-%d %H:%M"
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use crate::style::PickerStyle;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Theme preset for the pickers: "dark" (default) or "light"
    pub theme: Option<String>,

    /// chrono format string used when displaying committed dates
    pub date_format: Option<String>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if the file doesn't exist or can't be
    /// parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("modalpick")
            .join("config.toml")
    }

    /// Resolve the configured theme into a picker style.
    pub fn style(&self) -> PickerStyle {
        match self.theme.as_deref() {
            Some("light") => PickerStyle::light(),
            _ => PickerStyle::dark(),
        }
    }

    /// The format string for displaying committed dates.
    pub fn date_format(&self) -> &str {
        self.date_format.as_deref().unwrap_or("%Y-%m-%d %H:%M")
    }
}
