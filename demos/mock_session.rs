//! Complete bridge walkthrough against the mock simulator.
//!
//! Wires simulator -> environment data -> sensor components -> signal
//! registry, then plays both sides for a few seconds of simulation time:
//! the host steps and publishes, a scripted "controller" reads sensed
//! state and writes actuation commands.
//!
//! Run with: cargo run --bin mock_session

use std::path::PathBuf;
use std::sync::Arc;

use contracts::{
    EgoSensor, LaneBoundarySensor, ObjectSensor, ScenarioConfig, SensorMountConfig, VehicleName,
    Wheel,
};
use data_broker::DataBroker;
use sensor_components::{
    EsminiEgoSensor, EsminiLaneBoundarySensor, EsminiObjectSensor, EsminiWheelSensor,
};
use signal_export::{export_actuation_signals, export_wheel_signals};
use tracing::info;
use world_data::{EnvData, MockSimulator, MockSimulatorConfig, SimulatorBinding};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let vehicle: VehicleName = "Ego".into();
    let sensor_mount = SensorMountConfig::default();
    let scenario = ScenarioConfig {
        file: PathBuf::from("scenarios/cut-in.xosc"),
        step_size_s: 0.05,
        realtime: false,
    };

    // Simulator and shared environment data.
    let mut sim = MockSimulator::new(
        MockSimulatorConfig {
            end_time_s: 5.0,
            ..Default::default()
        },
        &sensor_mount,
    );
    sim.load_scenario(&scenario)?;
    let env = Arc::new(EnvData::new());

    // Sensor components over the shared snapshot.
    let ego = EsminiEgoSensor::new(0, env.clone());
    let objects = EsminiObjectSensor::new(env.clone());
    let lanes = EsminiLaneBoundarySensor::new(env.clone());
    let wheel = Arc::new(EsminiWheelSensor::new(env.clone()));

    // Signal registry: six actuation slots + four wheel read-back slots.
    let mut broker = DataBroker::new();
    export_actuation_signals(&mut broker, &vehicle);
    export_wheel_signals(&mut broker, &vehicle, wheel);
    info!(signals = broker.len(), "signal registry populated");

    while !sim.quit_requested() {
        // Host side: step the simulator, publish the snapshot.
        let snapshot = sim.step(scenario.step_size_s)?;
        env.publish(snapshot);

        // Controller side: read sensed state, write actuation commands.
        let steering = ego.wheel_steering_angle();
        broker.write("vehicles.Ego.actuation.acceleration", &0.5f64)?;
        broker.write(
            "vehicles.Ego.actuation.steeringwheel.angle",
            &(steering * 14.0),
        )?;
        broker.write("vehicles.Ego.actuation.gearbox.selector", &1i8)?;

        if (sim.sim_time() * 20.0).round() as u64 % 20 == 0 {
            info!(
                sim_time = format!("{:.2}", sim.sim_time()),
                ego_x = format!("{:.1}", ego.sensed_state().pose.translation.vector.x),
                steering_angle = format!("{:.3}", steering),
                objects = objects.sensed_objects().len(),
                lane_boundaries = lanes.sensed_lane_boundaries().len(),
                wheel_fl = ?broker.read::<Wheel>("vehicles.Ego.wheels.fl")?,
                "tick"
            );
        }
    }

    info!(sim_time = sim.sim_time(), "scenario finished");
    Ok(())
}
