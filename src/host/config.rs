//! Window configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid window configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Window dimensions must be non-zero (got {width}x{height})")]
    ZeroSize { width: u32, height: u32 },
}

/// Parameters the host uses to open its window.
///
/// # Example
///
/// ```rust
/// use screenflip::host::WindowConfig;
///
/// let config = WindowConfig::from_toml_str("width = 800\ntitle = \"Demo\"").unwrap();
/// assert_eq!(config.width, 800);
/// assert_eq!(config.height, 600);
/// assert_eq!(config.title, "Demo");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            title: "Screen Flip".to_string(),
        }
    }
}

impl WindowConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse a TOML document. Missing fields take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: WindowConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
