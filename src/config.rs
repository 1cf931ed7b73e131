//! Runtime configuration for the page behavior layer.
//!
//! The defaults match the page markup shipped with the site. A host page can
//! override any subset by passing a JSON object to `boot_with_config`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{SECTION_SCROLL_OFFSET_PX, THEME_STORAGE_KEY};

/// Error returned by [`PageConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `localStorage` key for the theme preference.
    pub storage_key: String,
    /// Distance above a section's top at which it becomes the active section.
    pub scroll_offset_px: f64,
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_owned(),
            scroll_offset_px: SECTION_SCROLL_OFFSET_PX,
            log_level: "info".to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON object; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Configured log level, falling back to `Info` for unknown names.
    #[must_use]
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
