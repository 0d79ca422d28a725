use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::IdenticonError;
use crate::generator::Identicon;

/// Serde-driven generator configuration matching the TOML format.
///
/// ```toml
/// size = 64
/// background = "#f0f0f0"
/// foreground = "#336699"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdenticonConfig {
    pub size: u32,
    pub background: Color,
    pub foreground: Color,
}

impl Default for IdenticonConfig {
    fn default() -> Self {
        Self {
            size: 48,
            background: Color::WHITE,
            foreground: Color::BLACK,
        }
    }
}

impl IdenticonConfig {
    /// Parse a TOML config string. Missing keys take their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Validate and build a generator.
    pub fn build(&self) -> Result<Identicon, ConfigError> {
        Ok(Identicon::new(self.background, self.foreground, self.size)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Parse(String),
    #[error("cannot serialize config: {0}")]
    Serialize(String),
    #[error(transparent)]
    Identicon(#[from] IdenticonError),
}
