//! Steering state sensor (placeholder values)

use std::sync::Arc;

use contracts::{Component, SteeringSensor};
use world_data::EnvData;

/// Steering sensor stub; curvature is a fixed 0 until the simulator
/// exposes path curvature.
pub struct EsminiSteeringSensor {
    // Snapshot handle kept for when the simulator exposes path curvature.
    #[allow(dead_code)]
    env_data: Arc<EnvData>,
}

impl EsminiSteeringSensor {
    pub fn new(env_data: Arc<EnvData>) -> Self {
        Self { env_data }
    }
}

impl Component for EsminiSteeringSensor {
    fn name(&self) -> &str {
        "esmini/steering_sensor"
    }
}

impl SteeringSensor for EsminiSteeringSensor {
    fn curvature(&self) -> f64 {
        0.0
    }
}
