//! Mock simulator implementation
//!
//! Implements `SimulatorBinding` with a deterministic scripted world.
//! Used for testing and development without the native simulator library.

use contracts::{
    BridgeError, Frustum, LaneBoundary, LaneBoundaryColor, LaneBoundaryType, Object, ObjectClass,
    ScenarioConfig, SensorMountConfig,
};
use nalgebra::{Isometry3, Point3, Vector3};
use tracing::{debug, info};

use crate::client::SimulatorBinding;
use crate::env_data::WorldSnapshot;

/// Mock simulator configuration
#[derive(Debug, Clone)]
pub struct MockSimulatorConfig {
    /// Constant ego speed along the road (m/s)
    pub ego_speed_mps: f64,
    /// Peak front wheel steering angle (rad)
    pub steering_amplitude_rad: f64,
    /// Steering sinusoid period (s)
    pub steering_period_s: f64,
    /// Number of scripted lead vehicles
    pub lead_object_count: usize,
    /// Gap between consecutive lead vehicles (m)
    pub lead_gap_m: f64,
    /// Lane width used to place the lane boundaries (m)
    pub lane_width_m: f64,
    /// Simulation time after which the scenario reports done (0 = never)
    pub end_time_s: f64,
    /// Inject a scenario load failure (test hook)
    pub fail_scenario_load: bool,
}

impl Default for MockSimulatorConfig {
    fn default() -> Self {
        Self {
            ego_speed_mps: 13.9,
            steering_amplitude_rad: 0.1,
            steering_period_s: 8.0,
            lead_object_count: 2,
            lead_gap_m: 20.0,
            lane_width_m: 3.5,
            end_time_s: 0.0,
            fail_scenario_load: false,
        }
    }
}

/// Mock simulator
///
/// Scripted world: the ego drives a straight road at constant speed with a
/// sinusoidal steering input, trailed lane boundaries on both sides, and a
/// configurable platoon of lead vehicles. Deterministic per (config, dt).
pub struct MockSimulator {
    config: MockSimulatorConfig,
    frustum: Frustum,
    mount_pose: Isometry3<f64>,
    sim_time: f64,
    loaded: bool,
}

impl MockSimulator {
    /// Create a mock simulator with the given script and sensor mounting.
    pub fn new(config: MockSimulatorConfig, sensor: &SensorMountConfig) -> Self {
        Self {
            config,
            frustum: sensor.frustum,
            mount_pose: sensor.mount.to_isometry(),
            sim_time: 0.0,
            loaded: false,
        }
    }

    /// Create a mock simulator with the default script.
    pub fn with_defaults(sensor: &SensorMountConfig) -> Self {
        Self::new(MockSimulatorConfig::default(), sensor)
    }

    fn ego_object(&self, t: f64) -> Object {
        Object {
            id: 0,
            class: ObjectClass::Car,
            pose: Isometry3::translation(self.config.ego_speed_mps * t, 0.0, 0.0),
            dimensions: Vector3::new(4.5, 1.8, 1.5),
            velocity: Vector3::new(self.config.ego_speed_mps, 0.0, 0.0),
            acceleration: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
        }
    }

    fn lead_objects(&self, t: f64) -> Vec<Object> {
        let ego_x = self.config.ego_speed_mps * t;
        (0..self.config.lead_object_count)
            .map(|i| Object {
                id: (i + 1) as u64,
                class: ObjectClass::Car,
                pose: Isometry3::translation(
                    ego_x + (i + 1) as f64 * self.config.lead_gap_m,
                    0.0,
                    0.0,
                ),
                dimensions: Vector3::new(4.5, 1.8, 1.5),
                velocity: Vector3::new(self.config.ego_speed_mps, 0.0, 0.0),
                acceleration: Vector3::zeros(),
                angular_velocity: Vector3::zeros(),
            })
            .collect()
    }

    fn lane_boundaries(&self, t: f64) -> Vec<LaneBoundary> {
        let ego_x = self.config.ego_speed_mps * t;
        let half_lane = self.config.lane_width_m / 2.0;

        [(1, half_lane), (-1, -half_lane)]
            .into_iter()
            .map(|(id, y)| LaneBoundary {
                id,
                exist_prob: 1.0,
                boundary_type: LaneBoundaryType::Solid,
                color: LaneBoundaryColor::White,
                // Sample 50 m of boundary ahead of the ego, 5 m spacing.
                points: (0..=10)
                    .map(|i| Point3::new(ego_x + i as f64 * 5.0, y, 0.0))
                    .collect(),
            })
            .collect()
    }

    fn steering_angle(&self, t: f64) -> f64 {
        let omega = std::f64::consts::TAU / self.config.steering_period_s;
        self.config.steering_amplitude_rad * (omega * t).sin()
    }
}

impl SimulatorBinding for MockSimulator {
    fn load_scenario(&mut self, scenario: &ScenarioConfig) -> Result<(), BridgeError> {
        if self.config.fail_scenario_load {
            return Err(BridgeError::scenario_load(
                scenario.file.display().to_string(),
                "injected mock failure",
            ));
        }

        self.sim_time = 0.0;
        self.loaded = true;

        info!(
            scenario = %scenario.file.display(),
            step_size_s = scenario.step_size_s,
            "mock scenario loaded"
        );
        Ok(())
    }

    fn step(&mut self, dt: f64) -> Result<WorldSnapshot, BridgeError> {
        if !self.loaded {
            return Err(BridgeError::SimulatorStep {
                sim_time: self.sim_time,
                message: "no scenario loaded".to_string(),
            });
        }

        self.sim_time += dt;
        let t = self.sim_time;

        debug!(sim_time = t, "mock simulator stepped");

        Ok(WorldSnapshot {
            sim_time: t,
            ego_object: self.ego_object(t),
            ego_steering_angle: self.steering_angle(t),
            world_objects: self.lead_objects(t),
            lane_boundaries: self.lane_boundaries(t),
            frustum: self.frustum,
            mount_pose: self.mount_pose,
        })
    }

    fn sim_time(&self) -> f64 {
        self.sim_time
    }

    fn quit_requested(&self) -> bool {
        self.config.end_time_s > 0.0 && self.sim_time >= self.config.end_time_s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scenario() -> ScenarioConfig {
        ScenarioConfig {
            file: PathBuf::from("cut-in.xosc"),
            step_size_s: 0.05,
            realtime: false,
        }
    }

    #[test]
    fn step_before_load_fails() {
        let mut sim = MockSimulator::with_defaults(&SensorMountConfig::default());
        let result = sim.step(0.05);
        assert!(matches!(result, Err(BridgeError::SimulatorStep { .. })));
    }

    #[test]
    fn ego_advances_at_configured_speed() {
        let mut sim = MockSimulator::new(
            MockSimulatorConfig {
                ego_speed_mps: 10.0,
                ..Default::default()
            },
            &SensorMountConfig::default(),
        );
        sim.load_scenario(&scenario()).unwrap();

        let first = sim.step(0.1).unwrap();
        let second = sim.step(0.1).unwrap();

        let x1 = first.ego_object.pose.translation.vector.x;
        let x2 = second.ego_object.pose.translation.vector.x;
        assert!((x1 - 1.0).abs() < 1e-9);
        assert!((x2 - 2.0).abs() < 1e-9);
        assert_eq!(second.sim_time, sim.sim_time());
    }

    #[test]
    fn scripted_world_is_populated() {
        let mut sim = MockSimulator::new(
            MockSimulatorConfig {
                lead_object_count: 3,
                ..Default::default()
            },
            &SensorMountConfig::default(),
        );
        sim.load_scenario(&scenario()).unwrap();

        let snapshot = sim.step(0.05).unwrap();
        assert_eq!(snapshot.world_objects.len(), 3);
        assert_eq!(snapshot.lane_boundaries.len(), 2);
        assert!(snapshot.lane_boundaries[0].points.len() > 1);
    }

    #[test]
    fn quit_flag_after_end_time() {
        let mut sim = MockSimulator::new(
            MockSimulatorConfig {
                end_time_s: 0.2,
                ..Default::default()
            },
            &SensorMountConfig::default(),
        );
        sim.load_scenario(&scenario()).unwrap();

        assert!(!sim.quit_requested());
        sim.step(0.1).unwrap();
        assert!(!sim.quit_requested());
        sim.step(0.1).unwrap();
        assert!(sim.quit_requested());
    }

    #[test]
    fn scenario_load_failure_injection() {
        let mut sim = MockSimulator::new(
            MockSimulatorConfig {
                fail_scenario_load: true,
                ..Default::default()
            },
            &SensorMountConfig::default(),
        );
        let result = sim.load_scenario(&scenario());
        assert!(matches!(result, Err(BridgeError::ScenarioLoad { .. })));
    }
}
