//! World object sensor

use std::sync::Arc;

use contracts::{Component, Frustum, ObjectSensor, Objects};
use nalgebra::Isometry3;
use world_data::EnvData;

/// Object sensor backed by the shared environment snapshot.
///
/// Returns exactly the object list, frustum and mount pose the
/// simulator integration published for the current tick.
pub struct EsminiObjectSensor {
    env_data: Arc<EnvData>,
}

impl EsminiObjectSensor {
    pub fn new(env_data: Arc<EnvData>) -> Self {
        Self { env_data }
    }
}

impl Component for EsminiObjectSensor {
    fn name(&self) -> &str {
        "esmini/object_sensor"
    }
}

impl ObjectSensor for EsminiObjectSensor {
    fn sensed_objects(&self) -> Objects {
        self.env_data.get_world_objects()
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
    use contracts::{Object, ObjectClass};
    use world_data::WorldSnapshot;

    #[test]
    fn objects_track_snapshot() {
        let objects = vec![
            Object {
                id: 1,
                class: ObjectClass::Car,
                ..Default::default()
            },
            Object {
                id: 2,
                class: ObjectClass::Pedestrian,
                ..Default::default()
            },
        ];
        let env = Arc::new(EnvData::with_snapshot(WorldSnapshot {
            world_objects: objects.clone(),
            ..Default::default()
        }));

        let sensor = EsminiObjectSensor::new(env);
        assert_eq!(sensor.sensed_objects(), objects);
    }

    #[test]
    fn frustum_and_mount_pose_track_snapshot() {
        let frustum = Frustum {
            fov_h: 1.2,
            clip_far: 150.0,
            ..Default::default()
        };
        let mount_pose = Isometry3::translation(2.0, 0.0, 1.4);
        let env = Arc::new(EnvData::with_snapshot(WorldSnapshot {
            frustum,
            mount_pose,
            ..Default::default()
        }));

        let sensor = EsminiObjectSensor::new(env);
        assert_eq!(sensor.frustum(), frustum);
        assert_eq!(sensor.mount_pose(), mount_pose);
    }
}
