//! # World Data
//!
//! Simulator-derived environment state, refreshed once per tick.
//!
//! - [`WorldSnapshot`]: one tick's immutable view of the world
//! - [`EnvData`]: the shared snapshot holder read by all sensor components
//! - [`SimulatorBinding`]: abstraction over the native simulator
//! - [`MockSimulator`]: scripted binding for tests and development without
//!   the native library

mod client;
mod env_data;
mod mock_client;

pub use client::SimulatorBinding;
pub use env_data::{EnvData, WorldSnapshot};
pub use mock_client::{MockSimulator, MockSimulatorConfig};
