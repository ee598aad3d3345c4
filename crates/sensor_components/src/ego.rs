//! Ego vehicle state sensor

use std::sync::Arc;

use contracts::{BridgeError, Component, EgoSensor, Object};
use world_data::EnvData;

/// Ego sensor backed by the shared environment snapshot.
///
/// Pose, kinematics and front wheel steering angle delegate to the
/// snapshot. Steering wheel *speed* is not available from the simulator
/// and always fails with the capability-not-available error.
pub struct EsminiEgoSensor {
    id: u64,
    env_data: Arc<EnvData>,
}

impl EsminiEgoSensor {
    /// Create an ego sensor for the object handle `id`.
    pub fn new(id: u64, env_data: Arc<EnvData>) -> Self {
        Self { id, env_data }
    }

    /// Simulator object handle this sensor is bound to.
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Component for EsminiEgoSensor {
    fn name(&self) -> &str {
        "esmini/ego_sensor"
    }
}

impl EgoSensor for EsminiEgoSensor {
    fn sensed_state(&self) -> Object {
        self.env_data.get_ego_object()
    }

    fn wheel_steering_angle(&self) -> f64 {
        self.env_data.get_ego_steering_angle()
    }

    fn steering_wheel_speed(&self) -> Result<f64, BridgeError> {
        Err(BridgeError::capability_not_available(
            self.name(),
            "steering wheel speed",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::ObjectClass;
    use world_data::WorldSnapshot;

    fn env_with_steering(angle: f64) -> Arc<EnvData> {
        Arc::new(EnvData::with_snapshot(WorldSnapshot {
            ego_steering_angle: angle,
            ego_object: Object {
                id: 0,
                class: ObjectClass::Car,
                ..Default::default()
            },
            ..Default::default()
        }))
    }

    #[test]
    fn steering_angle_tracks_snapshot() {
        let sensor = EsminiEgoSensor::new(0, env_with_steering(12.5));
        assert_eq!(sensor.wheel_steering_angle(), 12.5);
    }

    #[test]
    fn sensed_state_tracks_snapshot() {
        let env = env_with_steering(0.0);
        let sensor = EsminiEgoSensor::new(0, env.clone());
        assert_eq!(sensor.sensed_state(), env.get_ego_object());
        assert_eq!(sensor.sensed_state().class, ObjectClass::Car);
    }

    #[test]
    fn sensed_state_follows_republish() {
        let env = env_with_steering(0.0);
        let sensor = EsminiEgoSensor::new(0, env.clone());

        env.publish(WorldSnapshot {
            ego_steering_angle: -0.3,
            ..Default::default()
        });
        assert_eq!(sensor.wheel_steering_angle(), -0.3);
    }

    #[test]
    fn steering_wheel_speed_is_never_available() {
        let sensor = EsminiEgoSensor::new(7, env_with_steering(1.0));
        let err = sensor.steering_wheel_speed().unwrap_err();
        assert!(err.is_capability_not_available());
    }
}
