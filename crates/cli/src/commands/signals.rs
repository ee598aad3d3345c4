//! `signals` command implementation.
//!
//! Performs the same registrations a session would, against a throwaway
//! broker, and prints the resulting signal table.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use data_broker::DataBroker;
use sensor_components::EsminiWheelSensor;
use signal_export::{export_actuation_signals, export_wheel_signals};
use world_data::EnvData;

use crate::cli::SignalsArgs;

/// One row of the signal table
#[derive(Serialize)]
struct SignalRow {
    path: String,
    signal_type: &'static str,
    direction: &'static str,
}

/// Execute the `signals` command
pub fn run_signals(args: &SignalsArgs) -> Result<()> {
    info!(config = %args.config.display(), "Loading configuration");

    let config = config_loader::ConfigLoader::load_from_path(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    let mut broker = DataBroker::new();
    export_actuation_signals(&mut broker, &config.vehicle.name);
    if config.signals.wheel_states {
        let wheel_sensor = Arc::new(EsminiWheelSensor::new(Arc::new(EnvData::new())));
        export_wheel_signals(&mut broker, &config.vehicle.name, wheel_sensor);
    }

    let mut rows: Vec<SignalRow> = broker
        .paths()
        .map(|path| SignalRow {
            path: path.to_string(),
            signal_type: broker.type_name_of(path).unwrap_or("?"),
            // Actuation slots are written by control logic; wheel slots
            // are read back from the live sensor.
            direction: if path.contains(".actuation.") {
                "write"
            } else {
                "read"
            },
        })
        .collect();
    rows.sort_by(|a, b| a.path.cmp(&b.path));

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).context("Failed to serialize signal table")?
        );
    } else {
        println!("\nSignals for vehicle '{}':\n", config.vehicle.name);
        for row in &rows {
            println!("  {:<5} {:<50} {}", row.direction, row.path, row.signal_type);
        }
        println!("\n  {} slots total", rows.len());
    }

    Ok(())
}
