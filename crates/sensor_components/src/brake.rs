//! Brake state sensor (placeholder values)

use std::sync::Arc;

use contracts::{BrakeSensor, Component};
use world_data::EnvData;

/// Brake sensor stub; pedal position is a fixed 0 until the simulator
/// exposes brake state.
pub struct EsminiBrakeSensor {
    // Snapshot handle kept for when the simulator exposes brake state.
    #[allow(dead_code)]
    env_data: Arc<EnvData>,
}

impl EsminiBrakeSensor {
    pub fn new(env_data: Arc<EnvData>) -> Self {
        Self { env_data }
    }
}

impl Component for EsminiBrakeSensor {
    fn name(&self) -> &str {
        "esmini/brake_sensor"
    }
}

impl BrakeSensor for EsminiBrakeSensor {
    fn pedal_position_brake(&self) -> f64 {
        0.0
    }
}
