use std::path::Path;

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ai: AiConfig,
    pub ui: UiConfig,
}

/// Settings for the computer opponent.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Pause between the player's move and the AI's reply, in
    /// milliseconds. Purely cosmetic; the event loop keeps polling.
    pub delay_ms: u64,
    /// Fixed RNG seed for the tie-break among equal-score moves.
    /// Unset means OS entropy.
    pub seed: Option<u64>,
}

/// Settings for the terminal UI.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Input poll interval for the event loop, in milliseconds.
    pub poll_ms: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            delay_ms: 1000,
            seed: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig { poll_ms: 100 }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            ai: AiConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if
    /// the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.poll_ms == 0 {
            return Err(ConfigError::Validation("ui.poll_ms must be > 0".into()));
        }
        if self.ai.delay_ms > 60_000 {
            return Err(ConfigError::Validation(
                "ai.delay_ms must be <= 60000".into(),
            ));
        }
        Ok(())
    }
}
