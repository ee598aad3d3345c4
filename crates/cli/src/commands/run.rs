//! `run` command implementation.

use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{info, warn};

use crate::cli::RunArgs;
use crate::session::{Session, SessionConfig};

/// Execute the `run` command
pub async fn run_session(args: &RunArgs) -> Result<()> {
    info!(config = %args.config.display(), "Loading configuration");

    if !args.config.exists() {
        anyhow::bail!("Configuration file not found: {}", args.config.display());
    }

    let config = config_loader::ConfigLoader::load_from_path(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    info!(
        scenario = %config.scenario.file.display(),
        vehicle = %config.vehicle.name,
        step_size_s = config.scenario.step_size_s,
        wheel_states = config.signals.wheel_states,
        "Configuration loaded"
    );

    // Dry run - just validate and exit
    if args.dry_run {
        info!("Dry run mode - configuration is valid, exiting");
        print_config_summary(&config);
        return Ok(());
    }

    if args.metrics_port != 0 {
        observability::init_metrics_only(args.metrics_port)
            .context("Failed to start metrics exporter")?;
    }

    let session_config = SessionConfig {
        config,
        max_ticks: if args.max_ticks == 0 {
            None
        } else {
            Some(args.max_ticks)
        },
        timeout: if args.timeout == 0 {
            None
        } else {
            Some(Duration::from_secs(args.timeout))
        },
    };

    let session = Session::new(session_config);

    // Setup graceful shutdown handler
    let shutdown_signal = setup_shutdown_signal();

    info!("Starting session...");

    tokio::select! {
        result = session.run() => {
            match result {
                Ok(stats) => {
                    info!(
                        ticks = stats.ticks,
                        sim_time = stats.sim_time,
                        duration_secs = stats.duration.as_secs_f64(),
                        "Session completed successfully"
                    );
                    stats.print_summary();
                }
                Err(e) => {
                    return Err(e).context("Session execution failed");
                }
            }
        }
        _ = shutdown_signal => {
            warn!("Received shutdown signal, stopping session...");
        }
    }

    info!("ESMini Bridge finished");
    Ok(())
}

/// Setup Ctrl+C and SIGTERM signal handlers
async fn setup_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Print configuration summary for dry-run mode
fn print_config_summary(config: &contracts::SimulationConfig) {
    println!("\n=== Configuration Summary ===\n");
    println!("Scenario:");
    println!("  File: {}", config.scenario.file.display());
    println!("  Step size: {}s", config.scenario.step_size_s);
    println!("  Realtime: {}", config.scenario.realtime);
    println!("\nVehicle:");
    println!("  Name: {}", config.vehicle.name);
    println!(
        "  Sensor mount: ({}, {}, {})",
        config.vehicle.sensor.mount.x, config.vehicle.sensor.mount.y, config.vehicle.sensor.mount.z
    );
    println!("\nSignals:");
    println!("  Actuation slots: 6");
    println!(
        "  Wheel read-back slots: {}",
        if config.signals.wheel_states { 4 } else { 0 }
    );
    println!();
}
