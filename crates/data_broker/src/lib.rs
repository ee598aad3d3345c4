//! # Data Broker
//!
//! Typed signal registry exchanged between simulation components.
//!
//! Signals are named slots keyed by a dotted path
//! (e.g. `vehicles.Ego.actuation.acceleration`), declared with a concrete
//! Rust type and carrying optional setter/getter callbacks. Components
//! register slots once at setup; control logic reads and writes them each
//! simulation step.
//!
//! # Example
//!
//! ```
//! use data_broker::DataBroker;
//!
//! let mut broker = DataBroker::new();
//! let signal = broker.declare::<f64>("vehicles.Ego.actuation.acceleration");
//! signal.set_setter(|value| {
//!     let _ = value;
//! });
//!
//! broker.write("vehicles.Ego.actuation.acceleration", &2.5).unwrap();
//! ```

mod broker;
mod error;
mod signal;

pub use broker::DataBroker;
pub use error::SignalError;
pub use signal::{Signal, SignalRef};
