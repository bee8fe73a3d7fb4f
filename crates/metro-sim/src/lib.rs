//! `metro-sim` — the per-line simulation engine.
//!
//! One [`LineSim`] owns everything about one line: its topology, its
//! trains, the current incident state, and the last derived station
//! statuses.  A tick is the only mutation path:
//!
//! ```text
//! tick():
//!   ① advance every train (arrivals reverse at the termini)
//!   ② incident coin flip (Bernoulli toggle between none and a category)
//!   ③ recompute every station's status from scratch
//!   ④ stamp last_updated
//! ```
//!
//! Reads ([`LineSim::line_status`], [`LineSim::stations`]) return fully
//! formed snapshots; the caller (see `metro-service`) serializes access
//! per line so a snapshot is always pre- or post-tick, never mid-tick.
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`train`]    | `Train` motion state machine                         |
//! | [`incident`] | `IncidentKind`, `IncidentState`, message pools       |
//! | [`status`]   | `Saturation`, `StationStatus`, the per-tick deriver  |
//! | [`line`]     | `LineSim` — tick / snapshot / reset                  |
//! | [`snapshot`] | Serializable `LineStatus` / `TrainStatus` / `ResetAck` |
//! | [`lines`]    | Built-in Línea 1 / Línea 2 definitions               |

pub mod incident;
pub mod line;
pub mod lines;
pub mod snapshot;
pub mod status;
pub mod train;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use incident::{IncidentKind, IncidentState};
pub use line::LineSim;
pub use lines::builtin_lines;
pub use snapshot::{LineStatus, ResetAck, TrainStatus};
pub use status::{Saturation, StationStatus};
pub use train::Train;
