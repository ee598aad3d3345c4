//! Layered error definitions
//!
//! Categorized by source: config / scenario / simulator / component capability

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum BridgeError {
    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== Simulator Errors =====
    /// Scenario load error
    #[error("scenario load error for '{scenario}': {message}")]
    ScenarioLoad { scenario: String, message: String },

    /// Simulator step error
    #[error("simulator step error at t={sim_time}: {message}")]
    SimulatorStep { sim_time: f64, message: String },

    // ===== Component Errors =====
    /// The simulator cannot provide the requested datum through this component.
    ///
    /// Callers must treat this as a hard error, not a degraded zero.
    #[error("component '{component}' cannot provide {capability}")]
    CapabilityNotAvailable {
        component: String,
        capability: String,
    },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl BridgeError {
    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create scenario load error
    pub fn scenario_load(scenario: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ScenarioLoad {
            scenario: scenario.into(),
            message: message.into(),
        }
    }

    /// Create capability-not-available error
    pub fn capability_not_available(
        component: impl Into<String>,
        capability: impl Into<String>,
    ) -> Self {
        Self::CapabilityNotAvailable {
            component: component.into(),
            capability: capability.into(),
        }
    }

    /// True if this is the capability-not-available kind.
    ///
    /// Lets callers distinguish "this simulator cannot supply the datum"
    /// from configuration or stepping failures.
    pub fn is_capability_not_available(&self) -> bool {
        matches!(self, Self::CapabilityNotAvailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_error_is_distinguishable() {
        let err = BridgeError::capability_not_available("esmini/ego_sensor", "steering wheel speed");
        assert!(err.is_capability_not_available());
        assert!(err.to_string().contains("esmini/ego_sensor"));
        assert!(err.to_string().contains("steering wheel speed"));

        let other = BridgeError::config_validation("scenario.file", "missing");
        assert!(!other.is_capability_not_available());
    }
}
