//! Object - simulator-derived world object state
//!
//! Pose and kinematics of one object (the ego vehicle or a sensed
//! traffic participant) as reported by the simulator for one tick.

use nalgebra::{Isometry3, Vector3};
use serde::{Deserialize, Serialize};

/// Object classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectClass {
    #[default]
    Unknown,
    Car,
    Truck,
    Motorbike,
    Bicycle,
    Pedestrian,
    Static,
}

/// One world object for one simulation tick
///
/// All quantities are expressed in the simulator's world frame,
/// SI units (m, m/s, m/s², rad/s).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Object {
    /// Simulator object handle
    pub id: u64,

    /// Classification reported by the scenario
    pub class: ObjectClass,

    /// Position + orientation
    pub pose: Isometry3<f64>,

    /// Bounding box extents (length, width, height)
    pub dimensions: Vector3<f64>,

    /// Linear velocity
    pub velocity: Vector3<f64>,

    /// Linear acceleration
    pub acceleration: Vector3<f64>,

    /// Angular velocity
    pub angular_velocity: Vector3<f64>,
}

impl Default for Object {
    fn default() -> Self {
        Self {
            id: 0,
            class: ObjectClass::Unknown,
            pose: Isometry3::identity(),
            dimensions: Vector3::zeros(),
            velocity: Vector3::zeros(),
            acceleration: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

/// Objects sensed within one tick
pub type Objects = Vec<Object>;
