//! Sensor component traits
//!
//! One trait per sensing role, implemented by independent adapter types.
//! Every accessor is a constant-time projection of the current world
//! snapshot (or a documented fixed default); nothing blocks or retries.

use nalgebra::Isometry3;

use crate::{BridgeError, Frustum, LaneBoundaries, Object, Objects, Wheel};

/// Common behavior of every sensor component.
pub trait Component: Send + Sync {
    /// Stable component name, e.g. `esmini/ego_sensor`.
    fn name(&self) -> &str;
}

/// Ego vehicle state sensing.
pub trait EgoSensor: Component {
    /// Currently sensed ego state.
    fn sensed_state(&self) -> Object;

    /// Current front wheel steering angle (rad).
    fn wheel_steering_angle(&self) -> f64;

    /// Current steering wheel angular speed (rad/s).
    ///
    /// # Errors
    ///
    /// Fails with [`BridgeError::CapabilityNotAvailable`] when the
    /// simulator cannot provide this datum. Implementations must not
    /// substitute a fabricated value.
    fn steering_wheel_speed(&self) -> Result<f64, BridgeError>;
}

/// World object sensing.
pub trait ObjectSensor: Component {
    /// Objects currently sensed within the frustum.
    fn sensed_objects(&self) -> Objects;

    /// Sensing frustum.
    fn frustum(&self) -> Frustum;

    /// Sensor mount pose relative to the vehicle reference frame.
    fn mount_pose(&self) -> Isometry3<f64>;
}

/// Lane boundary sensing.
pub trait LaneBoundarySensor: Component {
    /// Lane boundaries currently sensed within the frustum.
    fn sensed_lane_boundaries(&self) -> LaneBoundaries;

    /// Sensing frustum.
    fn frustum(&self) -> Frustum;

    /// Sensor mount pose relative to the vehicle reference frame.
    fn mount_pose(&self) -> Isometry3<f64>;
}

/// Powertrain state sensing.
pub trait PowertrainSensor: Component {
    /// Accelerator pedal position in [0, 1].
    fn pedal_position_acceleration(&self) -> f64;

    /// Selected transmission gear (negative = reverse, 0 = neutral).
    fn gear_transmission(&self) -> i32;
}

/// Steering state sensing.
pub trait SteeringSensor: Component {
    /// Curvature of the currently driven path (1/m).
    fn curvature(&self) -> f64;
}

/// Brake state sensing.
pub trait BrakeSensor: Component {
    /// Brake pedal position in [0, 1].
    fn pedal_position_brake(&self) -> f64;
}

/// Per-corner wheel state sensing.
pub trait WheelSensor: Component {
    /// Front left wheel state.
    fn wheel_fl(&self) -> Wheel;

    /// Front right wheel state.
    fn wheel_fr(&self) -> Wheel;

    /// Rear left wheel state.
    fn wheel_rl(&self) -> Wheel;

    /// Rear right wheel state.
    fn wheel_rr(&self) -> Wheel;
}
