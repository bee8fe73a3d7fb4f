//! The line registry and its background tick loops.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use metro_core::{LineConfig, MetroError, ServiceConfig, SimRng};
use metro_sim::{LineSim, LineStatus, ResetAck, StationStatus};

use crate::{ServiceError, ServiceResult};

// ── LineHandle ────────────────────────────────────────────────────────────────

/// One registered line: the simulator behind its mutex, plus the stop
/// signal and join handle of its background loop.
#[derive(Debug)]
struct LineHandle {
    id: String,
    sim: Arc<Mutex<LineSim>>,
    stop_tx: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

// ── Registry ──────────────────────────────────────────────────────────────────

/// Owns every line simulator and coordinates their background loops.
///
/// Created once at process startup and passed by reference/handle to
/// request-handling collaborators; there are no process-wide globals.
/// The line set is fixed at construction — lines are never added or
/// removed at runtime.
#[derive(Debug)]
pub struct Registry {
    lines: Vec<LineHandle>,
    tick_interval: Duration,
}

impl Registry {
    /// Build one `LineSim` per config, each with an independent RNG
    /// stream derived from the master seed.
    ///
    /// Fails fast on a duplicate line id or a degenerate topology.
    pub fn new(configs: Vec<LineConfig>, service: &ServiceConfig) -> ServiceResult<Registry> {
        let mut master = SimRng::new(service.seed);
        let mut lines: Vec<LineHandle> = Vec::with_capacity(configs.len());

        for (i, config) in configs.into_iter().enumerate() {
            if lines.iter().any(|l| l.id == config.id) {
                return Err(MetroError::Config(format!("duplicate line id '{}'", config.id)).into());
            }
            let id = config.id.clone();
            let sim = LineSim::new(config, service.params.clone(), master.child(i as u64))?;
            info!(
                line = %id,
                stations = sim.topology().len(),
                trains = sim.trains().len(),
                route_km = sim.topology().route_length_m() / 1_000.0,
                "line registered"
            );
            let (stop_tx, _) = watch::channel(false);
            lines.push(LineHandle {
                id,
                sim: Arc::new(Mutex::new(sim)),
                stop_tx,
                task: None,
            });
        }

        Ok(Registry {
            lines,
            tick_interval: service.tick_interval,
        })
    }

    /// Ids of all registered lines, in registration order.
    pub fn line_ids(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.id.as_str()).collect()
    }

    fn handle(&self, id: &str) -> ServiceResult<&LineHandle> {
        self.lines
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| MetroError::UnknownLine(id.to_owned()).into())
    }

    // ── Background loops ──────────────────────────────────────────────────

    /// Launch one background tick loop per line.
    ///
    /// Each loop sleeps `tick_interval`, then takes the line's mutex for
    /// the duration of one `tick()`.  The stop signal is checked while
    /// sleeping, so a loop exits before its next sleep completes.
    pub fn start(&mut self) {
        for line in &mut self.lines {
            if line.task.is_some() {
                warn!(line = %line.id, "tick loop already running");
                continue;
            }
            let id = line.id.clone();
            let sim = Arc::clone(&line.sim);
            let mut stop_rx = line.stop_tx.subscribe();
            let interval = self.tick_interval;

            line.task = Some(tokio::spawn(async move {
                info!(line = %id, interval_ms = interval.as_millis() as u64, "tick loop started");
                loop {
                    tokio::select! {
                        _ = tokio::time::sleep(interval) => {
                            sim.lock().await.tick();
                            debug!(line = %id, "tick");
                        }
                        // A send or a dropped sender both mean "stop".
                        _ = stop_rx.changed() => break,
                    }
                }
                info!(line = %id, "tick loop stopped");
            }));
        }
    }

    /// Signal one line's loop to exit.  Returns immediately; the loop
    /// observes the signal at its sleep point.
    pub fn stop(&self, id: &str) -> ServiceResult<()> {
        let line = self.handle(id)?;
        let _ = line.stop_tx.send(true);
        Ok(())
    }

    /// Signal every loop to stop and await their termination, bounding
    /// each wait by `grace`.
    pub async fn shutdown(mut self, grace: Duration) -> ServiceResult<()> {
        for line in &self.lines {
            let _ = line.stop_tx.send(true);
        }
        for line in &mut self.lines {
            let Some(task) = line.task.take() else { continue };
            match tokio::time::timeout(grace, task).await {
                Ok(Ok(())) => {}
                Ok(Err(join_err)) => {
                    warn!(line = %line.id, error = %join_err, "tick loop ended abnormally");
                }
                Err(_) => {
                    warn!(line = %line.id, "tick loop did not stop within {grace:?}");
                    return Err(ServiceError::ShutdownTimeout(grace));
                }
            }
        }
        info!("all tick loops stopped");
        Ok(())
    }

    // ── Read / reset operations ───────────────────────────────────────────

    /// Point-in-time snapshot of one line.
    pub async fn line_status(&self, id: &str) -> ServiceResult<LineStatus> {
        let line = self.handle(id)?;
        Ok(line.sim.lock().await.line_status())
    }

    /// The station statuses most recently derived for one line.
    pub async fn stations(&self, id: &str) -> ServiceResult<Vec<StationStatus>> {
        let line = self.handle(id)?;
        Ok(line.sim.lock().await.stations())
    }

    /// Reset one line to a fresh randomized state.
    pub async fn reset(&self, id: &str) -> ServiceResult<ResetAck> {
        let line = self.handle(id)?;
        let ack = line.sim.lock().await.reset();
        info!(line = %id, "line reset");
        Ok(ack)
    }

    /// Reset every line.  Each reset takes that line's mutex, so it is
    /// mutually exclusive with that line's tick; lines reset one by one.
    pub async fn reset_all(&self) -> ResetAck {
        for line in &self.lines {
            line.sim.lock().await.reset();
            info!(line = %line.id, "line reset");
        }
        ResetAck {
            message: "Simulación reiniciada exitosamente".to_owned(),
            timestamp: Utc::now(),
        }
    }
}
