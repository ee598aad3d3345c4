//! Configuration validation
//!
//! Rules:
//! - vehicle name is non-empty and free of `.` (it is embedded into
//!   dotted signal paths)
//! - scenario file path is non-empty
//! - step size is finite and positive
//! - frustum angles and clip distances are sane

use contracts::{BridgeError, SimulationConfig};

/// Validate a parsed `SimulationConfig`.
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(config: &SimulationConfig) -> Result<(), BridgeError> {
    validate_vehicle_name(config)?;
    validate_scenario(config)?;
    validate_frustum(config)?;
    Ok(())
}

fn validate_vehicle_name(config: &SimulationConfig) -> Result<(), BridgeError> {
    let name = config.vehicle.name.as_str();

    if name.is_empty() {
        return Err(BridgeError::config_validation(
            "vehicle.name",
            "must not be empty",
        ));
    }

    // The name becomes a path segment: "vehicles.<name>.actuation.*".
    if name.contains('.') {
        return Err(BridgeError::config_validation(
            "vehicle.name",
            "must not contain '.'",
        ));
    }

    Ok(())
}

fn validate_scenario(config: &SimulationConfig) -> Result<(), BridgeError> {
    if config.scenario.file.as_os_str().is_empty() {
        return Err(BridgeError::config_validation(
            "scenario.file",
            "must not be empty",
        ));
    }

    let step = config.scenario.step_size_s;
    if !step.is_finite() || step <= 0.0 {
        return Err(BridgeError::config_validation(
            "scenario.step_size_s",
            "must be finite and > 0",
        ));
    }

    Ok(())
}

fn validate_frustum(config: &SimulationConfig) -> Result<(), BridgeError> {
    let frustum = &config.vehicle.sensor.frustum;
    let tau = std::f64::consts::TAU;

    if frustum.fov_h <= 0.0 || frustum.fov_h > tau {
        return Err(BridgeError::config_validation(
            "vehicle.sensor.frustum.fov_h",
            "must be in (0, 2*pi]",
        ));
    }
    if frustum.fov_v <= 0.0 || frustum.fov_v > tau {
        return Err(BridgeError::config_validation(
            "vehicle.sensor.frustum.fov_v",
            "must be in (0, 2*pi]",
        ));
    }
    if frustum.clip_near < 0.0 {
        return Err(BridgeError::config_validation(
            "vehicle.sensor.frustum.clip_near",
            "must be >= 0",
        ));
    }
    if frustum.clip_far <= frustum.clip_near {
        return Err(BridgeError::config_validation(
            "vehicle.sensor.frustum.clip_far",
            "must be greater than clip_near",
        ));
    }

    Ok(())
}
