//! `LineSim` — one line's complete simulation state and its operations.

use chrono::{DateTime, Utc};

use metro_core::{LineConfig, MetroResult, SimParams, SimRng, Topology};

use crate::incident::IncidentState;
use crate::snapshot::{LineStatus, ResetAck, TrainStatus};
use crate::status::{self, Saturation, StationStatus};
use crate::train::Train;

/// The simulation of a single line.
///
/// Owns the topology, the train set, the incident state, the latest
/// derived station statuses, and a private RNG stream.  `tick()` is the
/// only mutation path for motion/incident/station state; `reset()`
/// discards and rebuilds.  The owner (a registry handle) is responsible
/// for serializing access — `LineSim` itself is a plain value with no
/// interior locking.
#[derive(Debug)]
pub struct LineSim {
    config: LineConfig,
    params: SimParams,
    topology: Topology,
    trains: Vec<Train>,
    incident: IncidentState,
    stations: Vec<StationStatus>,
    last_updated: DateTime<Utc>,
    rng: SimRng,
}

impl LineSim {
    /// Build and initialize a line: validate the topology, spawn the
    /// configured train fleet, derive the first station statuses, and run
    /// the one-shot incident seed.
    pub fn new(config: LineConfig, params: SimParams, rng: SimRng) -> MetroResult<LineSim> {
        let topology = Topology::new(&config.id, config.stations.clone())?;
        let mut sim = LineSim {
            config,
            params,
            topology,
            trains: Vec::new(),
            incident: IncidentState::new(),
            stations: Vec::new(),
            last_updated: Utc::now(),
            rng,
        };
        sim.initialize();
        Ok(sim)
    }

    /// Spawn the fleet, derive initial statuses, one-shot incident seed.
    fn initialize(&mut self) {
        self.trains = (0..self.params.train_count)
            .map(|i| {
                Train::spawn(
                    i,
                    &self.config.train_prefix,
                    &self.topology,
                    &self.params,
                    &mut self.rng,
                )
            })
            .collect();
        self.stations =
            status::derive_statuses(&self.topology, &self.trains, &self.params, &mut self.rng);
        self.incident
            .maybe_toggle(self.params.incident_probability, &mut self.rng);
        self.last_updated = Utc::now();
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance the line by one tick: move every train, run the incident
    /// coin flip, recompute every station status, stamp `last_updated`.
    ///
    /// Runs to completion without suspending; from the scheduler's point
    /// of view a tick is atomic.
    pub fn tick(&mut self) {
        for train in &mut self.trains {
            train.advance(&self.topology, &self.params, &mut self.rng);
        }
        self.incident
            .maybe_toggle(self.params.incident_probability, &mut self.rng);
        self.stations =
            status::derive_statuses(&self.topology, &self.trains, &self.params, &mut self.rng);
        self.last_updated = Utc::now();
    }

    // ── Snapshots ─────────────────────────────────────────────────────────

    /// Whole-line snapshot.
    ///
    /// Wagon occupancies are display jitter, freshly sampled per call:
    /// one pass to estimate the aggregate saturation tier, then an
    /// independent pass for the per-train display vectors.
    pub fn line_status(&mut self) -> LineStatus {
        let wagons = self.params.wagons;

        let mean_occupancy = if self.trains.is_empty() {
            0.0
        } else {
            let total: u64 = (0..self.trains.len() * wagons)
                .map(|_| self.rng.gen_range(self.params.occupancy_range.clone()) as u64)
                .sum();
            total as f64 / (self.trains.len() * wagons) as f64
        };

        let active_trains = self
            .trains
            .iter()
            .map(|t| TrainStatus {
                train_id: t.id.clone(),
                current_station: self.topology.station(t.current_station).name.clone(),
                next_station: self.topology.station(t.next_station).name.clone(),
                direction: self.topology.direction_label(t.direction).to_owned(),
                progress_to_next: (t.progress * 100.0).round() / 100.0,
                wagons,
                passengers_per_wagon: (0..wagons)
                    .map(|_| self.rng.gen_range(self.params.occupancy_range.clone()))
                    .collect(),
            })
            .collect();

        LineStatus {
            line_name: self.config.name.clone(),
            route: self.config.route.clone(),
            saturation: Saturation::from_mean_occupancy(mean_occupancy),
            incident_type: self.incident.kind,
            incident_message: self.incident.message.clone(),
            last_updated: self.last_updated,
            active_trains,
        }
    }

    /// The station statuses as derived by the most recent tick, verbatim.
    pub fn stations(&self) -> Vec<StationStatus> {
        self.stations.clone()
    }

    // ── Reset ─────────────────────────────────────────────────────────────

    /// Discard all trains and station statuses and reinitialize the line,
    /// including the one-shot incident seed.
    pub fn reset(&mut self) -> ResetAck {
        self.trains.clear();
        self.stations.clear();
        self.incident = IncidentState::new();
        self.initialize();
        ResetAck {
            message: format!("Simulación de {} reiniciada exitosamente", self.config.name),
            timestamp: self.last_updated,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> &str {
        &self.config.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    #[inline]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    #[inline]
    pub fn trains(&self) -> &[Train] {
        &self.trains
    }

    #[inline]
    pub fn incident(&self) -> &IncidentState {
        &self.incident
    }

    #[inline]
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }
}
