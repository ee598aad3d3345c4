//! # Signal Export
//!
//! One-shot registration of a vehicle's signal slots into the data broker.
//!
//! [`export_actuation_signals`] registers the six writable actuation slots
//! external control logic writes each simulation step. The setters accept
//! and discard every value: actuation is not wired into the simulator yet,
//! and that no-op contract is externally visible behavior, not a bug.
//!
//! [`export_wheel_signals`] additionally registers four read-only
//! per-corner wheel-state slots whose getters re-query the live wheel
//! sensor on every read.
//!
//! Each function is called exactly once per vehicle per session. Duplicate
//! registration behavior is whatever the broker does (replace); no checks
//! are added here.

use std::sync::Arc;

use contracts::{VehicleName, Wheel, WheelSensor};
use data_broker::DataBroker;
use tracing::debug;

/// Register the six writable actuation slots for `vehicle`.
///
/// | Path suffix | Type |
/// |---|---|
/// | `actuation.acceleration` | `f64` |
/// | `actuation.steeringwheel.angle` | `f64` |
/// | `actuation.gearbox.selector` | `i8` |
/// | `actuation.gaspedal.position` | `f64` |
/// | `actuation.brakepedal.position` | `f64` |
/// | `actuation.front_wheel_angle` | `(f64, f64)` |
pub fn export_actuation_signals(broker: &mut DataBroker, vehicle: &VehicleName) {
    declare_discarding::<f64>(broker, format!("vehicles.{vehicle}.actuation.acceleration"));
    declare_discarding::<f64>(
        broker,
        format!("vehicles.{vehicle}.actuation.steeringwheel.angle"),
    );
    declare_discarding::<i8>(
        broker,
        format!("vehicles.{vehicle}.actuation.gearbox.selector"),
    );
    declare_discarding::<f64>(
        broker,
        format!("vehicles.{vehicle}.actuation.gaspedal.position"),
    );
    declare_discarding::<f64>(
        broker,
        format!("vehicles.{vehicle}.actuation.brakepedal.position"),
    );
    // Left and right front wheel angles (rad).
    declare_discarding::<(f64, f64)>(
        broker,
        format!("vehicles.{vehicle}.actuation.front_wheel_angle"),
    );

    debug!(vehicle = %vehicle, "actuation signals exported");
}

/// Register the four read-only wheel-state slots
/// `vehicles.<name>.wheels.{fl,fr,rl,rr}` for `vehicle`.
///
/// Getters query `wheel_sensor` at read time; nothing is cached between
/// reads.
pub fn export_wheel_signals(
    broker: &mut DataBroker,
    vehicle: &VehicleName,
    wheel_sensor: Arc<dyn WheelSensor>,
) {
    let corners: [(&str, fn(&dyn WheelSensor) -> Wheel); 4] = [
        ("fl", |s: &dyn WheelSensor| s.wheel_fl()),
        ("fr", |s: &dyn WheelSensor| s.wheel_fr()),
        ("rl", |s: &dyn WheelSensor| s.wheel_rl()),
        ("rr", |s: &dyn WheelSensor| s.wheel_rr()),
    ];

    for (corner, read) in corners {
        let sensor = wheel_sensor.clone();
        broker
            .declare::<Wheel>(format!("vehicles.{vehicle}.wheels.{corner}"))
            .set_getter(move || read(sensor.as_ref()));
    }

    debug!(vehicle = %vehicle, "wheel state signals exported");
}

/// Declare a writable slot whose setter accepts and discards every value.
///
/// TODO: forward actuation commands to the simulator once it exposes a
/// control-input API.
fn declare_discarding<T: Send + Sync + 'static>(broker: &mut DataBroker, path: String) {
    broker.declare::<T>(path).set_setter(|_value| {});
}
