//! Off-canvas configuration
//!
//! Stored in `~/.config/offcanvas/config.yaml`. Every field has a default,
//! so a partial file only overrides what it names.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default transition duration, matching the stylesheet's CSS transition
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// Controller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffCanvasConfig {
    /// How long a slide takes before the panel counts as open/closed.
    /// Must match the transition duration in the stylesheet.
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,

    /// Attribute holding the `id side style` triple
    #[serde(default = "default_panel_attribute")]
    pub panel_attribute: String,

    /// Attribute marking canvas elements
    #[serde(default = "default_canvas_attribute")]
    pub canvas_attribute: String,

    /// Value of the canvas attribute that marks the canvas container
    #[serde(default = "default_container_value")]
    pub container_value: String,
}

fn default_transition_ms() -> u64 {
    DEFAULT_TRANSITION_MS
}

fn default_panel_attribute() -> String {
    "off-canvas".to_string()
}

fn default_canvas_attribute() -> String {
    "canvas".to_string()
}

fn default_container_value() -> String {
    "container".to_string()
}

impl Default for OffCanvasConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_transition_ms(),
            panel_attribute: default_panel_attribute(),
            canvas_attribute: default_canvas_attribute(),
            container_value: default_container_value(),
        }
    }
}

impl OffCanvasConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to an explicit path
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Override the transition duration (builder pattern)
    pub fn with_transition_ms(mut self, transition_ms: u64) -> Self {
        self.transition_ms = transition_ms;
        self
    }
}
