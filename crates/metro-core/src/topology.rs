//! Line topology: an immutable ordered station sequence and the
//! neighbor/terminus rules trains navigate by.
//!
//! Indices are plain `usize` positions into the station sequence.
//! Neighbor lookup clamps at the termini — `forward` from the last index
//! stays at the last index, `backward` from 0 stays at 0 — so index
//! arithmetic can never leave the line.  Direction reversal is the
//! *train's* job (see `metro-sim`); the topology only answers questions.

use crate::config::StationDef;
use crate::{MetroError, MetroResult};

// ── Direction ─────────────────────────────────────────────────────────────────

/// Travel direction along a line.
///
/// `Outbound` moves toward the last station index, `Inbound` toward
/// index 0.  Lines display these as the name of the terminus the train
/// heads toward (see [`Topology::direction_label`]).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Outbound,
    Inbound,
}

impl Direction {
    #[inline]
    pub fn flip(self) -> Direction {
        match self {
            Direction::Outbound => Direction::Inbound,
            Direction::Inbound  => Direction::Outbound,
        }
    }
}

// ── Topology ──────────────────────────────────────────────────────────────────

/// The immutable station sequence of one line.
///
/// Constructed once per line at startup (or on reset); no mutation
/// operations exist.
#[derive(Clone, Debug)]
pub struct Topology {
    stations: Vec<StationDef>,
}

impl Topology {
    /// Build a topology from an ordered station list.
    ///
    /// Fails fast with [`MetroError::DegenerateTopology`] for fewer than
    /// 2 stations — a line a train cannot shuttle on is a configuration
    /// bug, not a runtime condition.
    pub fn new(line: &str, stations: Vec<StationDef>) -> MetroResult<Topology> {
        if stations.len() < 2 {
            return Err(MetroError::DegenerateTopology {
                line:     line.to_owned(),
                stations: stations.len(),
            });
        }
        Ok(Topology { stations })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false // construction guarantees >= 2 stations
    }

    #[inline]
    pub fn last_index(&self) -> usize {
        self.stations.len() - 1
    }

    /// The station at `idx`.
    ///
    /// # Panics
    /// Panics on an out-of-range index — that indicates a direction-flip
    /// bug upstream and is treated as a fatal invariant violation.
    #[inline]
    pub fn station(&self, idx: usize) -> &StationDef {
        &self.stations[idx]
    }

    #[inline]
    pub fn stations(&self) -> &[StationDef] {
        &self.stations
    }

    /// The neighbor of `idx` in `dir`, clamped at the termini.
    #[inline]
    pub fn neighbor(&self, idx: usize, dir: Direction) -> usize {
        match dir {
            Direction::Outbound => (idx + 1).min(self.last_index()),
            Direction::Inbound  => idx.saturating_sub(1),
        }
    }

    /// Is `idx` the terminus a train travelling in `dir` arrives at?
    #[inline]
    pub fn is_terminus(&self, idx: usize, dir: Direction) -> bool {
        match dir {
            Direction::Outbound => idx == self.last_index(),
            Direction::Inbound  => idx == 0,
        }
    }

    /// Display label for `dir`: the name of the terminus it heads toward.
    #[inline]
    pub fn direction_label(&self, dir: Direction) -> &str {
        match dir {
            Direction::Outbound => &self.stations[self.last_index()].name,
            Direction::Inbound  => &self.stations[0].name,
        }
    }

    /// End-to-end route length in metres (sum of segment great-circle
    /// distances).  Reporting only; motion is in fractional segments.
    pub fn route_length_m(&self) -> f64 {
        self.stations
            .windows(2)
            .map(|w| w[0].position.distance_m(w[1].position))
            .sum()
    }
}
