//! Shared configuration for the whiteboard
//!
//! This crate is the single source of truth for the surface dimension and
//! the initial drawing color. Hosts either build a [`WhiteboardConfig`] in
//! code or load one from JSON.

use serde::{Deserialize, Serialize};

/// Default surface edge length in pixels (power of two)
pub const DEFAULT_SIZE: u32 = 512;

/// Default drawing color, RGBA8 (the red preset)
pub const DEFAULT_COLOR: [u8; 4] = [255, 0, 51, 255];

/// Errors raised while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse whiteboard config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Externally settable whiteboard parameters
///
/// `size` is not validated here; the surface rejects unusable sizes when it
/// is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhiteboardConfig {
    /// Edge length of the square surface in pixels. Unsigned, so a negative
    /// size in JSON fails to parse instead of reaching the surface.
    pub size: u32,
    /// Drawing color as RGBA8
    pub color: [u8; 4],
}

impl Default for WhiteboardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            color: DEFAULT_COLOR,
        }
    }
}

impl WhiteboardConfig {
    /// Create a config with the given surface size and the default color
    pub fn new(size: u32) -> Self {
        Self {
            size,
            color: DEFAULT_COLOR,
        }
    }

    /// Replace the drawing color
    pub fn with_color(mut self, color: [u8; 4]) -> Self {
        self.color = color;
        self
    }

    /// Total number of pixels the surface will hold
    pub fn pixel_count(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    /// Parse a config from JSON. Missing fields fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the config to JSON
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WhiteboardConfig::default();
        assert_eq!(config.size, DEFAULT_SIZE);
        assert_eq!(config.color, DEFAULT_COLOR);
        assert_eq!(config.pixel_count(), 512 * 512);
    }

    #[test]
    fn test_with_color() {
        let config = WhiteboardConfig::new(64).with_color([1, 2, 3, 4]);
        assert_eq!(config.size, 64);
        assert_eq!(config.color, [1, 2, 3, 4]);
    }

    #[test]
    fn test_from_json_partial() {
        let config = WhiteboardConfig::from_json_str(r#"{ "size": 128 }"#).unwrap();
        assert_eq!(config.size, 128);
        assert_eq!(config.color, DEFAULT_COLOR);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(WhiteboardConfig::from_json_str("{ size: }").is_err());
        // Negative sizes do not fit the unsigned field
        assert!(WhiteboardConfig::from_json_str(r#"{ "size": -4 }"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = WhiteboardConfig::new(256).with_color([0, 255, 179, 255]);
        let json = config.to_json_string().unwrap();
        assert_eq!(WhiteboardConfig::from_json_str(&json).unwrap(), config);
    }
}
