//! Site configuration
//!
//! Loaded from a TOML file by the server and CLI; the browser build uses the
//! defaults compiled in.

use crate::error::CoreError;
use crate::locale::Locale;
use crate::menu::BREAKPOINT_PX;
use crate::preference::PREFERRED_LANGUAGE_KEY;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings shared by the navbar and the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Locale used when no preference has been stored
    pub default_locale: Locale,
    /// Viewport width at which the menu switches to the inline layout
    pub breakpoint_px: f64,
    /// Storage key for the preferred locale
    pub storage_key: String,
    /// Logo image source
    pub logo_src: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::DEFAULT,
            breakpoint_px: BREAKPOINT_PX,
            storage_key: PREFERRED_LANGUAGE_KEY.to_string(),
            logo_src: "/static/images/logo.svg".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(CoreError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: SiteConfig = toml::from_str(&content).map_err(|source| CoreError::ConfigParse {
            path: path.to_path_buf(),
            message: source.message().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if !(self.breakpoint_px.is_finite() && self.breakpoint_px > 0.0) {
            return Err(CoreError::InvalidConfig {
                message: format!("breakpoint_px must be positive, got {}", self.breakpoint_px),
            });
        }
        if self.storage_key.trim().is_empty() {
            return Err(CoreError::InvalidConfig {
                message: "storage_key must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
