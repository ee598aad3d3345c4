//! # Config Loader
//!
//! Configuration loading and parsing module.
//!
//! Responsibilities:
//! - Parse TOML/JSON configuration files
//! - Validate configuration legality
//! - Produce a `SimulationConfig`
//!
//! # Example
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//! use std::path::Path;
//!
//! let config = ConfigLoader::load_from_path(Path::new("bridge.toml")).unwrap();
//! println!("Vehicle: {}", config.vehicle.name);
//! ```

mod parser;
mod validator;

pub use contracts::SimulationConfig;
pub use parser::ConfigFormat;

use contracts::BridgeError;
use std::path::Path;

/// Configuration loader
///
/// Provides static methods to load configuration from files or strings.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from file path
    ///
    /// Automatically detects format from file extension (.toml / .json).
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_path(path: &Path) -> Result<SimulationConfig, BridgeError> {
        let format = Self::detect_format(path)?;
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content, format)
    }

    /// Load configuration from string
    ///
    /// # Errors
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_str(
        content: &str,
        format: ConfigFormat,
    ) -> Result<SimulationConfig, BridgeError> {
        let config = parser::parse(content, format)?;
        validator::validate(&config)?;
        Ok(config)
    }

    /// Serialize a SimulationConfig to TOML string
    pub fn to_toml(config: &SimulationConfig) -> Result<String, BridgeError> {
        toml::to_string_pretty(config)
            .map_err(|e| BridgeError::config_parse(format!("TOML serialize error: {e}")))
    }

    /// Serialize a SimulationConfig to JSON string
    pub fn to_json(config: &SimulationConfig) -> Result<String, BridgeError> {
        serde_json::to_string_pretty(config)
            .map_err(|e| BridgeError::config_parse(format!("JSON serialize error: {e}")))
    }

    /// Infer configuration format from file extension
    fn detect_format(path: &Path) -> Result<ConfigFormat, BridgeError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            BridgeError::config_parse("cannot determine file format from extension")
        })?;

        ConfigFormat::from_extension(ext)
            .ok_or_else(|| BridgeError::config_parse(format!("unsupported config format: .{ext}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_TOML: &str = r#"
[scenario]
file = "scenarios/cut-in.xosc"
step_size_s = 0.05

[vehicle]
name = "Ego"

[vehicle.sensor.mount]
x = 2.0
z = 1.4

[vehicle.sensor.frustum]
fov_h = 3.14
fov_v = 0.8
offset_h = 0.0
offset_v = 0.0
clip_near = 0.0
clip_far = 120.0

[signals]
wheel_states = true
"#;

    #[test]
    fn load_from_str_toml() {
        let result = ConfigLoader::load_from_str(MINIMAL_TOML, ConfigFormat::Toml);
        assert!(result.is_ok(), "Failed: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.vehicle.name, "Ego");
        assert!(config.signals.wheel_states);
    }

    #[test]
    fn defaults_fill_omitted_sections() {
        let toml = r#"
[scenario]
file = "slow-lead.xosc"

[vehicle]
name = "Ego"
"#;
        let config = ConfigLoader::load_from_str(toml, ConfigFormat::Toml).unwrap();
        assert_eq!(config.scenario.step_size_s, 0.05);
        assert!(!config.signals.wheel_states);
        assert_eq!(config.vehicle.sensor.frustum.clip_far, 100.0);
    }

    #[test]
    fn round_trip_toml() {
        let config = ConfigLoader::load_from_str(MINIMAL_TOML, ConfigFormat::Toml).unwrap();
        let serialized = ConfigLoader::to_toml(&config).unwrap();
        let config2 = ConfigLoader::load_from_str(&serialized, ConfigFormat::Toml).unwrap();
        assert_eq!(config.vehicle.name, config2.vehicle.name);
        assert_eq!(config.scenario.step_size_s, config2.scenario.step_size_s);
        assert_eq!(
            config.vehicle.sensor.frustum.clip_far,
            config2.vehicle.sensor.frustum.clip_far
        );
    }

    #[test]
    fn round_trip_json() {
        let config = ConfigLoader::load_from_str(MINIMAL_TOML, ConfigFormat::Toml).unwrap();
        let json = ConfigLoader::to_json(&config).unwrap();
        let config2 = ConfigLoader::load_from_str(&json, ConfigFormat::Json).unwrap();
        assert_eq!(config.vehicle.name, config2.vehicle.name);
    }

    #[test]
    fn dotted_vehicle_name_is_rejected() {
        let toml = r#"
[scenario]
file = "cut-in.xosc"

[vehicle]
name = "Ego.front"
"#;
        let result = ConfigLoader::load_from_str(toml, ConfigFormat::Toml);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("vehicle.name"), "unexpected error: {err}");
    }

    #[test]
    fn zero_step_size_is_rejected() {
        let toml = r#"
[scenario]
file = "cut-in.xosc"
step_size_s = 0.0

[vehicle]
name = "Ego"
"#;
        let result = ConfigLoader::load_from_str(toml, ConfigFormat::Toml);
        assert!(result.unwrap_err().to_string().contains("step_size_s"));
    }

    #[test]
    fn inverted_clip_range_is_rejected() {
        let toml = r#"
[scenario]
file = "cut-in.xosc"

[vehicle]
name = "Ego"

[vehicle.sensor.frustum]
fov_h = 3.14
fov_v = 0.8
offset_h = 0.0
offset_v = 0.0
clip_near = 50.0
clip_far = 10.0
"#;
        let result = ConfigLoader::load_from_str(toml, ConfigFormat::Toml);
        assert!(result.unwrap_err().to_string().contains("clip_far"));
    }
}
