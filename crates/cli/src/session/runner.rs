//! Session runner
//!
//! Wires the simulator binding, the shared environment data, the sensor
//! components and the signal registry together, then drives the tick loop:
//! step the simulator, publish the snapshot, record metrics.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, info};

use contracts::{EgoSensor, LaneBoundarySensor, ObjectSensor, SimulationConfig};
use data_broker::DataBroker;
use sensor_components::{
    EsminiBrakeSensor, EsminiEgoSensor, EsminiLaneBoundarySensor, EsminiObjectSensor,
    EsminiPowertrainSensor, EsminiSteeringSensor, EsminiWheelSensor,
};
use signal_export::{export_actuation_signals, export_wheel_signals};
use world_data::{EnvData, MockSimulator, SimulatorBinding};

/// Session runner configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Loaded bridge configuration
    pub config: SimulationConfig,

    /// Stop after this many ticks (None = unlimited)
    pub max_ticks: Option<u64>,

    /// Stop after this wall-clock duration (None = no timeout)
    pub timeout: Option<Duration>,
}

/// One bridge session against the mock simulator.
pub struct Session {
    config: SessionConfig,
}

/// Sensor components constructed for one session.
///
/// The stubs are constructed alongside the delegating sensors so the full
/// component set exists for the session's lifetime, exactly as the host
/// framework would hold it.
struct ComponentSet {
    ego: EsminiEgoSensor,
    objects: EsminiObjectSensor,
    lanes: EsminiLaneBoundarySensor,
    #[allow(dead_code)]
    powertrain: EsminiPowertrainSensor,
    #[allow(dead_code)]
    steering: EsminiSteeringSensor,
    #[allow(dead_code)]
    brake: EsminiBrakeSensor,
    wheel: Arc<EsminiWheelSensor>,
}

impl ComponentSet {
    fn new(env_data: &Arc<EnvData>) -> Self {
        Self {
            ego: EsminiEgoSensor::new(0, env_data.clone()),
            objects: EsminiObjectSensor::new(env_data.clone()),
            lanes: EsminiLaneBoundarySensor::new(env_data.clone()),
            powertrain: EsminiPowertrainSensor::new(env_data.clone()),
            steering: EsminiSteeringSensor::new(env_data.clone()),
            brake: EsminiBrakeSensor::new(env_data.clone()),
            wheel: Arc::new(EsminiWheelSensor::new(env_data.clone())),
        }
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Run the session to completion.
    pub async fn run(self) -> Result<super::SessionStats> {
        let cfg = &self.config.config;

        // Simulator binding
        let mut binding = MockSimulator::with_defaults(&cfg.vehicle.sensor);
        binding
            .load_scenario(&cfg.scenario)
            .context("Failed to load scenario")?;

        // Shared environment data + components
        let env_data = Arc::new(EnvData::new());
        let components = ComponentSet::new(&env_data);

        // Signal registry
        let mut broker = DataBroker::new();
        export_actuation_signals(&mut broker, &cfg.vehicle.name);
        if cfg.signals.wheel_states {
            export_wheel_signals(&mut broker, &cfg.vehicle.name, components.wheel.clone());
        }

        info!(
            vehicle = %cfg.vehicle.name,
            signals = broker.len(),
            wheel_states = cfg.signals.wheel_states,
            "session wired, starting tick loop"
        );

        let step_size = cfg.scenario.step_size_s;
        let mut interval = cfg
            .scenario
            .realtime
            .then(|| tokio::time::interval(Duration::from_secs_f64(step_size)));

        let started = Instant::now();
        let mut ticks: u64 = 0;

        loop {
            if self.config.max_ticks.is_some_and(|max| ticks >= max) {
                info!(ticks, "tick limit reached");
                break;
            }
            if self
                .config
                .timeout
                .is_some_and(|limit| started.elapsed() >= limit)
            {
                info!(ticks, "session timeout reached");
                break;
            }
            if binding.quit_requested() {
                info!(ticks, "scenario finished");
                break;
            }

            match interval.as_mut() {
                Some(interval) => {
                    interval.tick().await;
                }
                // Keep the task cooperative so the shutdown signal branch
                // still gets polled in free-running mode.
                None => tokio::task::yield_now().await,
            }

            let tick_started = Instant::now();
            let snapshot = binding
                .step(step_size)
                .context("Simulator step failed")?;

            observability::record_tick(
                tick_started.elapsed().as_secs_f64() * 1000.0,
                snapshot.world_objects.len(),
                snapshot.lane_boundaries.len(),
            );
            env_data.publish(snapshot);
            ticks += 1;

            if ticks % 20 == 0 {
                debug!(
                    sim_time = binding.sim_time(),
                    steering_angle = components.ego.wheel_steering_angle(),
                    sensed_objects = components.objects.sensed_objects().len(),
                    "session progress"
                );
            }
        }

        // Final reading through the delegating components, mirroring what
        // external control logic would observe at scenario end.
        info!(
            sim_time = binding.sim_time(),
            ego_x = components.ego.sensed_state().pose.translation.vector.x,
            lane_boundaries = components.lanes.sensed_lane_boundaries().len(),
            "session finished"
        );

        Ok(super::SessionStats {
            ticks,
            sim_time: binding.sim_time(),
            duration: started.elapsed(),
            signals_registered: broker.len(),
        })
    }
}
