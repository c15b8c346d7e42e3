use crate::app::error::{context, Result};
use crate::window::WindowConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "HISTORY_WINDOW_CONFIG";

// Terminal rows are far coarser than pixels, so expansion triggers much closer to the top
const TERMINAL_TOP_LOAD_OFFSET: usize = 3;

/// Overrides for the windowing policy. Unset fields fall back to the terminal defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowOverrides {
    pub chunk_size: Option<usize>,
    pub threshold: Option<usize>,
    pub top_load_offset: Option<usize>,
    pub start_at_bottom: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub bordered: bool,
    pub rounded: bool,
    pub inline_height: u16,
    /// How long the "loading older messages" indicator stays up after an expansion
    pub expansion_indicator_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            bordered: true,
            rounded: true,
            inline_height: 24,
            expansion_indicator_ms: 600,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowOverrides,
    pub ui: UiConfig,
}

impl AppConfig {
    pub fn window_config(&self) -> WindowConfig {
        let defaults = WindowConfig::default().with_top_load_offset(TERMINAL_TOP_LOAD_OFFSET);
        WindowConfig {
            chunk_size: self.window.chunk_size.unwrap_or(defaults.chunk_size),
            threshold: self.window.threshold.unwrap_or(defaults.threshold),
            top_load_offset: self.window.top_load_offset.unwrap_or(defaults.top_load_offset),
            start_at_bottom: self.window.start_at_bottom.unwrap_or(defaults.start_at_bottom),
        }
    }

    /// Load from `explicit`, then `$HISTORY_WINDOW_CONFIG`, then the user config directory.
    /// Only the last location may be missing.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::from_file(Path::new(&path));
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            context::configuration(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        let config = Self::from_json(&contents)
            .map_err(|e| e.wrap_err(format!("Invalid config file {}", path.display())))?;

        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| context::configuration(format!("Failed to parse configuration: {}", e)))
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("history-window").join("config.json"))
}
