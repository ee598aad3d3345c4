//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// ESMini Bridge - sensor/actuation bridge between ESMini and the signal registry
#[derive(Parser, Debug)]
#[command(
    name = "esmini-bridge",
    author,
    version,
    about = "ESMini sensor/actuation bridge",
    long_about = "Binds an ESMini scenario into the component and signal-registration model.\n\n\
                  Loads a scenario, exposes simulated vehicle state through sensor \n\
                  components, and registers actuation signal slots for external \n\
                  control logic."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "ESMINI_BRIDGE_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "ESMINI_BRIDGE_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a bridge session against the mock simulator
    Run(RunArgs),

    /// Validate configuration file without running
    Validate(ValidateArgs),

    /// Print the signal slots a configuration would register
    Signals(SignalsArgs),
}

/// Arguments for the `run` command
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Path to configuration file (TOML or JSON)
    #[arg(
        short,
        long,
        default_value = "bridge.toml",
        env = "ESMINI_BRIDGE_CONFIG"
    )]
    pub config: PathBuf,

    /// Maximum number of ticks to simulate (0 = unlimited)
    #[arg(long, default_value = "0", env = "ESMINI_BRIDGE_MAX_TICKS")]
    pub max_ticks: u64,

    /// Session timeout in seconds (0 = no timeout)
    #[arg(long, default_value = "0", env = "ESMINI_BRIDGE_TIMEOUT")]
    pub timeout: u64,

    /// Validate configuration and exit without running the session
    #[arg(long)]
    pub dry_run: bool,

    /// Metrics server port (0 = disabled)
    #[arg(long, default_value = "9000", env = "ESMINI_BRIDGE_METRICS_PORT")]
    pub metrics_port: u16,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short, long, default_value = "bridge.toml")]
    pub config: PathBuf,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `signals` command
#[derive(Parser, Debug)]
pub struct SignalsArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "bridge.toml")]
    pub config: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Log output format
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
}
