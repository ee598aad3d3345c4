//! Frustum - sensing volume of a mounted sensor

use serde::{Deserialize, Serialize};

/// Sensing frustum, expressed relative to the sensor mount pose.
///
/// Angles in radians, distances in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frustum {
    /// Horizontal field of view
    pub fov_h: f64,

    /// Vertical field of view
    pub fov_v: f64,

    /// Horizontal rotation offset of the field-of-view center
    pub offset_h: f64,

    /// Vertical rotation offset of the field-of-view center
    pub offset_v: f64,

    /// Near clipping distance
    pub clip_near: f64,

    /// Far clipping distance
    pub clip_far: f64,
}

impl Default for Frustum {
    fn default() -> Self {
        Self {
            fov_h: std::f64::consts::PI,
            fov_v: std::f64::consts::PI,
            offset_h: 0.0,
            offset_v: 0.0,
            clip_near: 0.0,
            clip_far: 100.0,
        }
    }
}
