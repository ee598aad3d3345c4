//! Lane boundary sensor

use std::sync::Arc;

use contracts::{Component, Frustum, LaneBoundaries, LaneBoundarySensor};
use nalgebra::Isometry3;
use world_data::EnvData;

/// Lane boundary sensor backed by the shared environment snapshot.
pub struct EsminiLaneBoundarySensor {
    env_data: Arc<EnvData>,
}

impl EsminiLaneBoundarySensor {
    pub fn new(env_data: Arc<EnvData>) -> Self {
        Self { env_data }
    }
}

impl Component for EsminiLaneBoundarySensor {
    fn name(&self) -> &str {
        "esmini/lane_boundary_sensor"
    }
}

impl LaneBoundarySensor for EsminiLaneBoundarySensor {
    fn sensed_lane_boundaries(&self) -> LaneBoundaries {
        self.env_data.get_lane_boundaries()
    }

    fn frustum(&self) -> Frustum {
        self.env_data.get_frustum()
    }

    fn mount_pose(&self) -> Isometry3<f64> {
        self.env_data.get_mount_pose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::{LaneBoundary, LaneBoundaryType};
    use world_data::WorldSnapshot;

    #[test]
    fn boundaries_track_snapshot() {
        let boundaries = vec![LaneBoundary {
            id: 4,
            exist_prob: 1.0,
            boundary_type: LaneBoundaryType::Dashed,
            ..Default::default()
        }];
        let env = Arc::new(EnvData::with_snapshot(WorldSnapshot {
            lane_boundaries: boundaries.clone(),
            ..Default::default()
        }));

        let sensor = EsminiLaneBoundarySensor::new(env.clone());
        assert_eq!(sensor.sensed_lane_boundaries(), boundaries);

        // A republish with an empty set is visible immediately.
        env.publish(WorldSnapshot::default());
        assert!(sensor.sensed_lane_boundaries().is_empty());
    }
}
