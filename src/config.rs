use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use super::types::Size;

/// The ratio between the inner and outer radius used when nothing else is configured
pub const CENTER_HEXAGON_RATIO: f64 = 0.15;
/// The number of cells on the first row used when nothing else is configured
pub const FIRST_ROW_COUNT: u32 = 5;
/// The viewport used when nothing else is configured
pub const RESOLUTION: (u32, u32) = (640, 480);

/// The full configuration of the application
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The size of the drawing area
    pub viewport: ViewportConfig,
    /// The shape of the field
    pub field: FieldConfig,
}

/// The size of the drawing area in pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: RESOLUTION.0,
            height: RESOLUTION.1,
        }
    }
}

impl ViewportConfig {
    /// Retrieves the viewport as a size
    pub fn get_size(&self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }
}

/// Parameters deciding the shape of a hex field
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// The inner radius relative to the outer radius
    pub center_hexagon_ratio: f64,
    /// The number of cells on the innermost row
    pub first_row_count: u32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            center_hexagon_ratio: CENTER_HEXAGON_RATIO,
            first_row_count: FIRST_ROW_COUNT,
        }
    }
}

impl Config {
    /// Loads the configuration from a toml file
    ///
    /// # Parameters
    ///
    /// path: The file to load
    ///
    /// # Errors
    ///
    /// See ConfigError for the possible errors
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_toml(&data)
    }

    /// Parses the configuration from toml, missing keys keep their default values
    ///
    /// # Parameters
    ///
    /// data: The toml document
    pub fn from_toml(data: &str) -> Result<Self, ConfigError> {
        toml::from_str(data).map_err(Into::into)
    }

    /// Serializes the configuration to toml
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(Into::into)
    }
}

/// The error types for when loading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration could not be loaded")]
    CouldNotLoad(#[from] std::io::Error),
    #[error("malformed configuration")]
    Malformed(#[from] toml::de::Error),
    #[error("failed to serialize")]
    CouldNotSerialize(#[from] toml::ser::Error),
}
