//! Powertrain state sensor (placeholder values)

use std::sync::Arc;

use contracts::{Component, PowertrainSensor};
use world_data::EnvData;

/// Powertrain sensor stub.
///
/// The simulator does not expose powertrain state; both accessors return
/// a fixed 0 regardless of snapshot content. Callers depend on that
/// stable default.
pub struct EsminiPowertrainSensor {
    // Snapshot handle kept for when the simulator exposes powertrain state.
    #[allow(dead_code)]
    env_data: Arc<EnvData>,
}

impl EsminiPowertrainSensor {
    pub fn new(env_data: Arc<EnvData>) -> Self {
        Self { env_data }
    }
}

impl Component for EsminiPowertrainSensor {
    fn name(&self) -> &str {
        "esmini/powertrain_sensor"
    }
}

impl PowertrainSensor for EsminiPowertrainSensor {
    fn pedal_position_acceleration(&self) -> f64 {
        0.0
    }

    fn gear_transmission(&self) -> i32 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::Object;
    use world_data::WorldSnapshot;

    #[test]
    fn returns_zero_regardless_of_snapshot() {
        let env = Arc::new(EnvData::with_snapshot(WorldSnapshot {
            ego_object: Object {
                id: 9,
                ..Default::default()
            },
            ego_steering_angle: 0.7,
            ..Default::default()
        }));

        let sensor = EsminiPowertrainSensor::new(env);
        assert_eq!(sensor.pedal_position_acceleration(), 0.0);
        assert_eq!(sensor.gear_transmission(), 0);
    }
}
