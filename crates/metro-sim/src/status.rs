//! Per-station status derivation.
//!
//! Station statuses are recomputed wholesale every tick — never patched
//! incrementally — from the current train set plus bounded random samples
//! modelling passenger flow.  The sampled metrics (`people_waiting`,
//! `estimated_wait_time`) are flow models, not persisted counters, and
//! `estimated_wait_time` is deliberately independent of the ETA: they are
//! two separate UX metrics, not one derived from the other.

use metro_core::{SimParams, SimRng, Topology};

use crate::train::Train;

// ── Saturation ────────────────────────────────────────────────────────────────

/// Coarse congestion tier.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Saturation {
    Low,
    Medium,
    High,
    Full,
}

impl Saturation {
    /// Station tier from a platform head count.  Boundaries are
    /// upper-exclusive: 29 is still `Low`, 30 is `Medium`, and so on.
    pub fn from_people_waiting(people: u32) -> Saturation {
        match people {
            0..30  => Saturation::Low,
            30..50 => Saturation::Medium,
            50..70 => Saturation::High,
            _      => Saturation::Full,
        }
    }

    /// Line tier from the mean per-wagon occupancy across all trains.
    pub fn from_mean_occupancy(mean: f64) -> Saturation {
        if mean < 35.0 {
            Saturation::Low
        } else if mean < 50.0 {
            Saturation::Medium
        } else if mean < 65.0 {
            Saturation::High
        } else {
            Saturation::Full
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Saturation::Low    => "low",
            Saturation::Medium => "medium",
            Saturation::High   => "high",
            Saturation::Full   => "full",
        }
    }
}

impl std::fmt::Display for Saturation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── StationStatus ─────────────────────────────────────────────────────────────

/// One station's derived status, as served to external readers.
///
/// `has_incident`/`incident_message` are station-granularity fields that
/// are never populated, even while a line-level incident is active; the
/// wire shape carries them for consumers that already expect them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StationStatus {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub saturation: Saturation,
    /// Estimated platform wait, whole minutes.
    pub estimated_wait_time: u32,
    pub has_incident: bool,
    pub incident_message: Option<String>,
    pub people_waiting: u32,
    /// Minutes until the nearest approaching train arrives.
    pub next_train_arrival: u32,
}

// ── Deriver ───────────────────────────────────────────────────────────────────

/// Minutes until `train` reaches its next station.
///
/// `(1 - progress) / speed` is the remaining tick count; `tick_secs`
/// converts ticks to seconds.  Truncate-then-add-one so an imminent
/// arrival still reads as 1 minute, never 0.  `speed > 0` is a `Train`
/// invariant, so the division is safe.
fn eta_minutes(train: &Train, params: &SimParams) -> u32 {
    let remaining_ticks = (1.0 - train.progress) / train.speed;
    (remaining_ticks * params.tick_secs / 60.0) as u32 + 1
}

/// Recompute every station's status from the current train set.
pub fn derive_statuses(
    topo:   &Topology,
    trains: &[Train],
    params: &SimParams,
    rng:    &mut SimRng,
) -> Vec<StationStatus> {
    topo.stations()
        .iter()
        .enumerate()
        .map(|(idx, station)| {
            // Nearest approaching train, if any; otherwise a bounded random
            // placeholder (a smoothing gap, not an absence-of-service signal).
            let next_train_arrival = trains
                .iter()
                .filter(|t| t.next_station == idx)
                .map(|t| eta_minutes(t, params))
                .min()
                .unwrap_or_else(|| rng.gen_range(params.fallback_eta_range.clone()));

            let people_waiting = rng.gen_range(params.people_range.clone());

            StationStatus {
                id: station.id.clone(),
                name: station.name.clone(),
                latitude: station.position.lat,
                longitude: station.position.lng,
                saturation: Saturation::from_people_waiting(people_waiting),
                estimated_wait_time: rng.gen_range(params.wait_range.clone()),
                has_incident: false,
                incident_message: None,
                people_waiting,
                next_train_arrival,
            }
        })
        .collect()
}
