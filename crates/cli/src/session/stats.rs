//! Session statistics.

use std::time::Duration;

/// Statistics from one bridge session
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    /// Ticks simulated
    pub ticks: u64,

    /// Final simulation time (seconds)
    pub sim_time: f64,

    /// Wall-clock duration of the session
    pub duration: Duration,

    /// Signal slots registered in the broker
    pub signals_registered: usize,
}

impl SessionStats {
    /// Ticks simulated per wall-clock second.
    pub fn ticks_per_sec(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            self.ticks as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Print a summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Session Statistics ===\n");
        println!("  Ticks: {}", self.ticks);
        println!("  Simulation time: {:.2}s", self.sim_time);
        println!("  Wall-clock duration: {:.2}s", self.duration.as_secs_f64());
        println!("  Ticks/sec: {:.1}", self.ticks_per_sec());
        println!("  Registered signals: {}", self.signals_registered);
        println!();
    }
}
