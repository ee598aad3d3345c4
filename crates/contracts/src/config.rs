//! SimulationConfig - Config Loader output
//!
//! Describes one bridge session: scenario, stepping, the bound vehicle,
//! its sensor mounting, and which signal sets to export.

use nalgebra::{Isometry3, Translation3, UnitQuaternion};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{Frustum, VehicleName};

/// Configuration version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfigVersion {
    #[default]
    V1,
}

/// Complete bridge session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Configuration version
    #[serde(default)]
    pub version: ConfigVersion,

    /// Scenario and stepping settings
    pub scenario: ScenarioConfig,

    /// The vehicle this bridge instance binds
    pub vehicle: VehicleConfig,

    /// Signal registration options
    #[serde(default)]
    pub signals: SignalConfig,
}

/// Scenario and stepping settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Path to the OpenSCENARIO file handed to the simulator
    pub file: PathBuf,

    /// Fixed simulation step size in seconds
    #[serde(default = "default_step_size")]
    pub step_size_s: f64,

    /// Pace the session loop against wall-clock time
    #[serde(default)]
    pub realtime: bool,
}

fn default_step_size() -> f64 {
    0.05
}

/// Vehicle binding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleConfig {
    /// Vehicle identifier, embedded into signal paths
    pub name: VehicleName,

    /// Sensor mounting and sensing volume
    #[serde(default)]
    pub sensor: SensorMountConfig,
}

/// Sensor mounting configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SensorMountConfig {
    /// Mount pose relative to the vehicle reference frame
    #[serde(default)]
    pub mount: MountPose,

    /// Sensing frustum
    #[serde(default)]
    pub frustum: Frustum,
}

/// Mount pose as translation + euler angles
///
/// Meters and radians; identity by default.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MountPose {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
    #[serde(default)]
    pub roll: f64,
    #[serde(default)]
    pub pitch: f64,
    #[serde(default)]
    pub yaw: f64,
}

impl MountPose {
    /// Convert to an isometry.
    pub fn to_isometry(self) -> Isometry3<f64> {
        Isometry3::from_parts(
            Translation3::new(self.x, self.y, self.z),
            UnitQuaternion::from_euler_angles(self.roll, self.pitch, self.yaw),
        )
    }
}

/// Signal registration options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignalConfig {
    /// Also register the per-corner wheel-state read-back slots
    /// (`vehicles.<name>.wheels.{fl,fr,rl,rr}`)
    #[serde(default)]
    pub wheel_states: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_size_defaults_to_50ms() {
        let json = r#"{"file": "cut-in.xosc"}"#;
        let scenario: ScenarioConfig = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.step_size_s, 0.05);
        assert!(!scenario.realtime);
    }

    #[test]
    fn mount_pose_identity_by_default() {
        let pose = MountPose::default().to_isometry();
        assert_eq!(pose, Isometry3::identity());
    }

    #[test]
    fn mount_pose_translation() {
        let pose = MountPose {
            x: 2.0,
            z: 1.5,
            ..Default::default()
        }
        .to_isometry();
        assert_eq!(pose.translation.vector.x, 2.0);
        assert_eq!(pose.translation.vector.z, 1.5);
    }
}
