//! metro-service CLI — boots the registry, runs the background loops,
//! and periodically logs line snapshots.
//!
//! The HTTP layer that normally fronts the registry is out of scope here;
//! this binary stands in for it by exercising the same read operations on
//! a cadence and shutting the loops down cleanly.

use std::time::Duration;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use metro_core::ServiceConfig;
use metro_service::Registry;
use metro_sim::builtin_lines;

#[derive(Parser, Debug)]
#[command(name = "metro-service", about = "Live transit network simulator")]
struct Args {
    /// Master RNG seed; the same seed reproduces the same simulation.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Seconds between background ticks.
    #[arg(long, default_value_t = 3.0)]
    tick_interval_secs: f64,

    /// Seconds to run before shutting down (0 = until ctrl-c).
    #[arg(long, default_value_t = 0)]
    run_secs: u64,

    /// Seconds between logged snapshots.
    #[arg(long, default_value_t = 10)]
    snapshot_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = ServiceConfig {
        seed: args.seed,
        tick_interval: Duration::from_secs_f64(args.tick_interval_secs),
        ..ServiceConfig::default()
    };

    let mut registry = Registry::new(builtin_lines(), &config)?;
    registry.start();
    info!(seed = args.seed, lines = registry.line_ids().len(), "service started");

    // run_secs = 0 means "until ctrl-c"; tokio caps oversized sleeps at its
    // internal far-future instant, so this never fires in practice.
    let run_for = if args.run_secs > 0 {
        Duration::from_secs(args.run_secs)
    } else {
        Duration::from_secs(u64::MAX / 1_000)
    };
    let deadline = tokio::time::sleep(run_for);
    tokio::pin!(deadline);

    let mut snapshots = tokio::time::interval(Duration::from_secs(args.snapshot_secs.max(1)));
    snapshots.tick().await; // the first tick of an interval fires immediately

    loop {
        tokio::select! {
            _ = snapshots.tick() => {
                let ids: Vec<String> =
                    registry.line_ids().into_iter().map(str::to_owned).collect();
                for id in ids {
                    match registry.line_status(&id).await {
                        Ok(status) => info!(
                            line = %id,
                            status = %serde_json::to_string(&status)?,
                            "snapshot"
                        ),
                        Err(e) => error!(line = %id, error = %e, "snapshot failed"),
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("ctrl-c received");
                break;
            }
            _ = &mut deadline => {
                info!(run_secs = args.run_secs, "run duration elapsed");
                break;
            }
        }
    }

    registry.shutdown(Duration::from_secs(5)).await?;
    info!("service stopped");
    Ok(())
}
