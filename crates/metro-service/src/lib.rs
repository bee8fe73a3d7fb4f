//! `metro-service` — the scheduler/registry that runs the simulation.
//!
//! A [`Registry`] owns one [`LineSim`][metro_sim::LineSim] per configured
//! line, each behind its own async mutex.  [`Registry::start`] launches
//! one background loop per line:
//!
//! ```text
//! loop {
//!     select! {
//!         sleep(tick_interval) → lock the line, tick(), unlock
//!         stop signal changed  → break
//!     }
//! }
//! ```
//!
//! The per-line mutex is the whole concurrency contract: a tick holds it
//! for the entire mutate sequence, so concurrent readers observe either
//! the pre-tick or the fully post-tick state — never a half-updated train
//! list.  Lines are independent; there is no cross-line locking.

pub mod error;
pub mod registry;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ServiceError, ServiceResult};
pub use registry::Registry;
