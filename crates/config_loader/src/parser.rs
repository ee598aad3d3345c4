//! Configuration parsing
//!
//! TOML and JSON front-ends producing an unvalidated `SimulationConfig`.

use contracts::{BridgeError, SimulationConfig};

/// Supported configuration formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Map a file extension to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse `content` as `format`.
pub fn parse(content: &str, format: ConfigFormat) -> Result<SimulationConfig, BridgeError> {
    match format {
        ConfigFormat::Toml => toml::from_str(content)
            .map_err(|e| BridgeError::config_parse(format!("TOML parse error: {e}"))),
        ConfigFormat::Json => serde_json::from_str(content)
            .map_err(|e| BridgeError::config_parse(format!("JSON parse error: {e}"))),
    }
}
