//! # Integration Tests
//!
//! Cross-crate end-to-end tests.
//!
//! Covers:
//! - contract compile sanity
//! - full mock session: config -> simulator -> snapshot -> components ->
//!   broker -> signal export
//! - the externally visible signal contracts (exact paths, exact types,
//!   discard setters, live wheel read-back)

#[cfg(test)]
mod contract_tests {
    #[test]
    fn contracts_compile() {
        let _ = contracts::ConfigVersion::V1;
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::sync::Arc;

    use config_loader::{ConfigFormat, ConfigLoader};
    use contracts::{
        BrakeSensor, EgoSensor, LaneBoundarySensor, ObjectSensor, PowertrainSensor,
        SteeringSensor, Wheel, WheelSensor,
    };
    use data_broker::DataBroker;
    use sensor_components::{
        EsminiBrakeSensor, EsminiEgoSensor, EsminiLaneBoundarySensor, EsminiObjectSensor,
        EsminiPowertrainSensor, EsminiSteeringSensor, EsminiWheelSensor,
    };
    use signal_export::{export_actuation_signals, export_wheel_signals};
    use world_data::{EnvData, MockSimulator, MockSimulatorConfig, SimulatorBinding};

    const BRIDGE_TOML: &str = r#"
[scenario]
file = "scenarios/cut-in.xosc"
step_size_s = 0.05

[vehicle]
name = "Ego"

[vehicle.sensor.mount]
x = 2.0
z = 1.4

[vehicle.sensor.frustum]
fov_h = 2.0
fov_v = 0.8
offset_h = 0.0
offset_v = 0.0
clip_near = 0.5
clip_far = 120.0

[signals]
wheel_states = true
"#;

    /// End-to-end: config -> mock simulator -> components -> broker.
    ///
    /// Drives ten ticks with actuation writes on every tick and checks
    /// what external control logic would observe afterwards.
    #[test]
    fn mock_session_end_to_end() {
        let config = ConfigLoader::load_from_str(BRIDGE_TOML, ConfigFormat::Toml).unwrap();

        let mut sim = MockSimulator::new(
            MockSimulatorConfig {
                ego_speed_mps: 10.0,
                ..Default::default()
            },
            &config.vehicle.sensor,
        );
        sim.load_scenario(&config.scenario).unwrap();

        let env = Arc::new(EnvData::new());
        let ego = EsminiEgoSensor::new(0, env.clone());
        let objects = EsminiObjectSensor::new(env.clone());
        let lanes = EsminiLaneBoundarySensor::new(env.clone());
        let wheel = Arc::new(EsminiWheelSensor::new(env.clone()));

        let mut broker = DataBroker::new();
        export_actuation_signals(&mut broker, &config.vehicle.name);
        export_wheel_signals(&mut broker, &config.vehicle.name, wheel.clone());
        assert_eq!(broker.len(), 10);

        for _ in 0..10 {
            let snapshot = sim.step(config.scenario.step_size_s).unwrap();
            env.publish(snapshot);

            // External control logic writes actuation commands each tick;
            // the slots accept and discard them.
            broker
                .write("vehicles.Ego.actuation.acceleration", &1.2f64)
                .unwrap();
            broker
                .write("vehicles.Ego.actuation.gearbox.selector", &2i8)
                .unwrap();
        }

        // Ego adapter tracks the scripted motion: 10 ticks * 0.05 s * 10 m/s.
        let ego_x = ego.sensed_state().pose.translation.vector.x;
        assert!((ego_x - 5.0).abs() < 1e-9, "ego_x = {ego_x}");

        // Frustum and mount pose from the config flow through the snapshot.
        assert_eq!(objects.frustum(), config.vehicle.sensor.frustum);
        assert_eq!(
            objects.mount_pose(),
            config.vehicle.sensor.mount.to_isometry()
        );

        // The scripted world is visible through the delegating sensors.
        assert_eq!(objects.sensed_objects().len(), 2);
        assert_eq!(lanes.sensed_lane_boundaries().len(), 2);

        // Wheel read-back through the broker: the stub's zero record.
        assert_eq!(
            broker.read::<Wheel>("vehicles.Ego.wheels.fl").unwrap(),
            Wheel::ZERO
        );
    }

    /// Actuation writes must not disturb anything observable.
    #[test]
    fn actuation_writes_change_no_observable_state() {
        let config = ConfigLoader::load_from_str(BRIDGE_TOML, ConfigFormat::Toml).unwrap();

        let mut sim = MockSimulator::with_defaults(&config.vehicle.sensor);
        sim.load_scenario(&config.scenario).unwrap();

        let env = Arc::new(EnvData::new());
        env.publish(sim.step(config.scenario.step_size_s).unwrap());

        let ego = EsminiEgoSensor::new(0, env.clone());
        let before = ego.sensed_state();
        let sim_time_before = env.snapshot().sim_time;

        let mut broker = DataBroker::new();
        export_actuation_signals(&mut broker, &config.vehicle.name);

        broker
            .write("vehicles.Ego.actuation.brakepedal.position", &1.0f64)
            .unwrap();
        broker
            .write("vehicles.Ego.actuation.front_wheel_angle", &(0.2f64, 0.2f64))
            .unwrap();

        assert_eq!(ego.sensed_state(), before);
        assert_eq!(env.snapshot().sim_time, sim_time_before);
    }

    /// The stub sensors hold their documented defaults even over a
    /// populated, advancing world.
    #[test]
    fn stub_sensors_stay_default_over_populated_world() {
        let config = ConfigLoader::load_from_str(BRIDGE_TOML, ConfigFormat::Toml).unwrap();

        let mut sim = MockSimulator::with_defaults(&config.vehicle.sensor);
        sim.load_scenario(&config.scenario).unwrap();

        let env = Arc::new(EnvData::new());
        for _ in 0..5 {
            env.publish(sim.step(0.05).unwrap());
        }

        let powertrain = EsminiPowertrainSensor::new(env.clone());
        let steering = EsminiSteeringSensor::new(env.clone());
        let brake = EsminiBrakeSensor::new(env.clone());
        let wheel = EsminiWheelSensor::new(env.clone());

        assert_eq!(powertrain.pedal_position_acceleration(), 0.0);
        assert_eq!(powertrain.gear_transmission(), 0);
        assert_eq!(steering.curvature(), 0.0);
        assert_eq!(brake.pedal_position_brake(), 0.0);
        assert_eq!(wheel.wheel_rr(), Wheel::ZERO);
    }

    /// The gearbox selector slot carries the exact 8-bit type.
    #[test]
    fn gearbox_selector_is_declared_as_i8() {
        let mut broker = DataBroker::new();
        export_actuation_signals(&mut broker, &"Ego".into());

        assert!(broker.contains("vehicles.Ego.actuation.gearbox.selector"));
        assert!(broker.is_type::<i8>("vehicles.Ego.actuation.gearbox.selector"));
        assert!(!broker.is_type::<i32>("vehicles.Ego.actuation.gearbox.selector"));
    }

    /// Ego steering-wheel speed is the only erroring accessor.
    #[test]
    fn steering_wheel_speed_fails_while_other_accessors_are_total() {
        let env = Arc::new(EnvData::new());
        let ego = EsminiEgoSensor::new(0, env.clone());

        let err = ego.steering_wheel_speed().unwrap_err();
        assert!(err.is_capability_not_available());

        // Totality of the rest on a completely fresh snapshot.
        let _ = ego.sensed_state();
        let _ = ego.wheel_steering_angle();
        let _ = EsminiObjectSensor::new(env.clone()).sensed_objects();
        let _ = EsminiLaneBoundarySensor::new(env).sensed_lane_boundaries();
    }
}
