//! Serializable point-in-time snapshots served to external readers.
//!
//! Field names and shapes are the wire format; request-handling
//! collaborators serialize these types as-is.

use chrono::{DateTime, Utc};

use crate::incident::IncidentKind;
use crate::status::Saturation;

/// One train as displayed to readers.
///
/// `passengers_per_wagon` is display jitter: freshly sampled on every
/// [`LineStatus`] read, not tracked state.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TrainStatus {
    pub train_id: String,
    /// Display name of the station most recently departed.
    pub current_station: String,
    /// Display name of the station being approached.
    pub next_station: String,
    /// Direction label: the terminus this train is heading toward.
    pub direction: String,
    /// Progress in `[0, 1]`, rounded to 2 decimals.
    pub progress_to_next: f64,
    pub wagons: usize,
    pub passengers_per_wagon: Vec<u32>,
}

/// The whole-line snapshot returned by `LineSim::line_status`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct LineStatus {
    pub line_name: String,
    pub route: String,
    pub saturation: Saturation,
    pub incident_type: IncidentKind,
    pub incident_message: Option<String>,
    pub last_updated: DateTime<Utc>,
    pub active_trains: Vec<TrainStatus>,
}

/// Confirmation returned by a reset.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ResetAck {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}
