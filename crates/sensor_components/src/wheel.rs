//! Per-corner wheel state sensor (placeholder values)

use std::sync::Arc;

use contracts::{Component, Wheel, WheelSensor};
use world_data::EnvData;

/// Wheel sensor stub.
///
/// Every corner returns the all-zero wheel record; the simulator does not
/// expose wheel dynamics. The zero record is a stable contract, not
/// missing data.
pub struct EsminiWheelSensor {
    // Snapshot handle kept for when the simulator exposes wheel dynamics.
    #[allow(dead_code)]
    env_data: Arc<EnvData>,
}

impl EsminiWheelSensor {
    pub fn new(env_data: Arc<EnvData>) -> Self {
        Self { env_data }
    }
}

impl Component for EsminiWheelSensor {
    fn name(&self) -> &str {
        "esmini/wheel_sensor"
    }
}

impl WheelSensor for EsminiWheelSensor {
    fn wheel_fl(&self) -> Wheel {
        Wheel::ZERO
    }

    fn wheel_fr(&self) -> Wheel {
        Wheel::ZERO
    }

    fn wheel_rl(&self) -> Wheel {
        Wheel::ZERO
    }

    fn wheel_rr(&self) -> Wheel {
        Wheel::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use world_data::WorldSnapshot;

    #[test]
    fn all_corners_zero_regardless_of_snapshot() {
        let sensor = EsminiWheelSensor::new(Arc::new(EnvData::with_snapshot(WorldSnapshot {
            sim_time: 3.0,
            ..Default::default()
        })));

        for wheel in [
            sensor.wheel_fl(),
            sensor.wheel_fr(),
            sensor.wheel_rl(),
            sensor.wheel_rr(),
        ] {
            assert_eq!(wheel, Wheel::ZERO);
        }
    }
}
