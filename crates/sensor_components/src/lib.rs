//! # Sensor Components
//!
//! Adapters exposing simulator-derived environment data through the
//! framework's sensor component traits. One adapter per sensing role;
//! every adapter shares the same [`EnvData`](world_data::EnvData) handle
//! and reads whatever snapshot is current.
//!
//! Ego, object and lane-boundary sensing delegate to the snapshot. The
//! powertrain, steering, brake and wheel adapters return documented fixed
//! defaults: the simulator does not expose that state yet, and callers
//! rely on the stable zero contract.

mod brake;
mod ego;
mod lane_boundary;
mod object;
mod powertrain;
mod steering;
mod wheel;

pub use brake::EsminiBrakeSensor;
pub use ego::EsminiEgoSensor;
pub use lane_boundary::EsminiLaneBoundarySensor;
pub use object::EsminiObjectSensor;
pub use powertrain::EsminiPowertrainSensor;
pub use steering::EsminiSteeringSensor;
pub use wheel::EsminiWheelSensor;
