//! Simulator binding abstraction
//!
//! Defines the seam between the bridge and the native simulator,
//! supporting a real implementation and mock testing behind one trait.

use contracts::{BridgeError, ScenarioConfig};

use crate::env_data::WorldSnapshot;

/// Simulator binding trait.
///
/// Abstracts the native simulator's lifecycle: load a scenario once, then
/// step it once per tick. Each step produces the next [`WorldSnapshot`]
/// to publish into [`EnvData`](crate::EnvData).
///
/// Calls are synchronous; the session loop owns pacing.
pub trait SimulatorBinding: Send {
    /// Load the scenario described by `scenario`.
    ///
    /// Must be called once before the first [`step`](Self::step).
    ///
    /// # Errors
    /// [`BridgeError::ScenarioLoad`] when the simulator rejects the
    /// scenario.
    fn load_scenario(&mut self, scenario: &ScenarioConfig) -> Result<(), BridgeError>;

    /// Advance the simulation by `dt` seconds and return the resulting
    /// world state.
    ///
    /// # Errors
    /// [`BridgeError::SimulatorStep`] when stepping fails or no scenario
    /// is loaded.
    fn step(&mut self, dt: f64) -> Result<WorldSnapshot, BridgeError>;

    /// Current simulation time (seconds).
    fn sim_time(&self) -> f64;

    /// Whether the simulator has signaled end-of-scenario.
    fn quit_requested(&self) -> bool;
}
