//! LaneBoundary - sensed road lane boundary

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Lane boundary marking type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaneBoundaryType {
    #[default]
    Unknown,
    Solid,
    Dashed,
    Grass,
    Curb,
}

/// Lane boundary marking color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaneBoundaryColor {
    #[default]
    Unknown,
    White,
    Yellow,
}

/// One sensed lane boundary for one tick
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LaneBoundary {
    /// Road-network identifier of the boundary
    pub id: i32,

    /// Existence probability in [0, 1]
    pub exist_prob: f64,

    /// Marking type
    pub boundary_type: LaneBoundaryType,

    /// Marking color
    pub color: LaneBoundaryColor,

    /// Polyline sampled along the boundary, world frame
    pub points: Vec<Point3<f64>>,
}

/// Lane boundaries sensed within one tick
pub type LaneBoundaries = Vec<LaneBoundary>;
