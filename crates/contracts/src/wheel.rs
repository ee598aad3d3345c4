//! Wheel - per-corner wheel state

use serde::{Deserialize, Serialize};

/// State of one wheel corner.
///
/// All-zero is the documented placeholder while the simulator does not
/// expose wheel dynamics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Wheel {
    /// Rotation around the y-axis (rad)
    pub rotation: f64,

    /// Angular velocity (rad/s)
    pub angular_velocity: f64,

    /// Vertical force on the contact patch (N)
    pub vertical_force: f64,
}

impl Wheel {
    /// The all-zero wheel record.
    pub const ZERO: Wheel = Wheel {
        rotation: 0.0,
        angular_velocity: 0.0,
        vertical_force: 0.0,
    };
}
