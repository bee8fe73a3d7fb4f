//! Simulation and line configuration.
//!
//! All tunables live in [`SimParams`] so tests can pin individual knobs
//! (e.g. a degenerate speed range) without touching the engine, and so
//! the two built-in lines share one parameterized implementation instead
//! of duplicated per-line code.

use std::ops::RangeInclusive;
use std::time::Duration;

use crate::GeoPoint;

// ── StationDef / LineConfig ───────────────────────────────────────────────────

/// A station as configured: static identity and location.  Immutable once
/// loaded.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct StationDef {
    /// Stable slug, e.g. `"pino_suarez"`.
    pub id: String,
    /// Display name, e.g. `"Pino Suárez"`.
    pub name: String,
    pub position: GeoPoint,
}

impl StationDef {
    pub fn new(id: &str, name: &str, lat: f64, lng: f64) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            position: GeoPoint::new(lat, lng),
        }
    }
}

/// Everything that distinguishes one line from another.  The simulator
/// itself is line-agnostic; instantiate it once per `LineConfig`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct LineConfig {
    /// Stable slug used as the registry key, e.g. `"line1"`.
    pub id: String,
    /// Display name, e.g. `"Línea 1"`.
    pub name: String,
    /// Route label, e.g. `"Observatorio ↔ Pantitlán"`.
    pub route: String,
    /// Train-id prefix; train `i` is named `"{prefix}{100 + i + 1}"`.
    pub train_prefix: String,
    /// Ordered station sequence, first index to last.
    pub stations: Vec<StationDef>,
}

// ── SimParams ─────────────────────────────────────────────────────────────────

/// Engine tunables, shared by every line.
///
/// Defaults: 7 trains per line advancing
/// 1.5–2.5 % of a segment per 3-second tick, a 10 % per-tick incident
/// coin flip, and the display-jitter sampling ranges for occupancy and
/// platform metrics.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SimParams {
    /// Trains spawned per line.
    pub train_count: usize,

    /// Fractional progress added per tick; resampled on every arrival.
    /// Must be strictly positive (ETA computation divides by speed).
    pub speed_range: RangeInclusive<f64>,

    /// Initial progress is drawn from `[0, initial_progress_max)`.
    pub initial_progress_max: f64,

    /// Per-tick probability of the incident state toggling.
    pub incident_probability: f64,

    /// Simulated seconds per tick — the scale factor that makes
    /// progress-per-tick arithmetic commensurate with ETA minutes.
    pub tick_secs: f64,

    /// Wagons per train (display only).
    pub wagons: usize,

    /// Per-wagon occupancy sample, people.
    pub occupancy_range: RangeInclusive<u32>,

    /// People waiting on a platform, per tick.
    pub people_range: RangeInclusive<u32>,

    /// Estimated platform wait, minutes.
    pub wait_range: RangeInclusive<u32>,

    /// ETA placeholder when no train is approaching a station, minutes.
    pub fallback_eta_range: RangeInclusive<u32>,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            train_count:          7,
            speed_range:          0.015..=0.025,
            initial_progress_max: 0.8,
            incident_probability: 0.10,
            tick_secs:            3.0,
            wagons:               6,
            occupancy_range:      20..=60,
            people_range:         20..=100,
            wait_range:           2..=5,
            fallback_eta_range:   5..=10,
        }
    }
}

// ── ServiceConfig ─────────────────────────────────────────────────────────────

/// Top-level service configuration: master seed, tick cadence, and the
/// engine tunables handed to every line.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// Master RNG seed; each line derives an independent child stream.
    pub seed: u64,

    /// Real-time interval between background ticks.
    pub tick_interval: Duration,

    pub params: SimParams,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            seed:          0,
            tick_interval: Duration::from_secs(3),
            params:        SimParams::default(),
        }
    }
}
