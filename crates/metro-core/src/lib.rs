//! `metro-core` — foundational types for the `metro_sim` transit simulator.
//!
//! This crate is a dependency of every other `metro-*` crate.  It has no
//! `metro-*` dependencies and minimal external ones (`rand`, `thiserror`,
//! `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`config`]   | `SimParams`, `LineConfig`, `StationDef`, `ServiceConfig`|
//! | [`geo`]      | `GeoPoint`, haversine distance                          |
//! | [`rng`]      | `SimRng` — seeded, injectable randomness                |
//! | [`topology`] | `Topology`, `Direction`, neighbor/terminus rules        |
//! | [`error`]    | `MetroError`, `MetroResult`                             |

pub mod config;
pub mod error;
pub mod geo;
pub mod rng;
pub mod topology;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{LineConfig, ServiceConfig, SimParams, StationDef};
pub use error::{MetroError, MetroResult};
pub use geo::GeoPoint;
pub use rng::SimRng;
pub use topology::{Direction, Topology};
