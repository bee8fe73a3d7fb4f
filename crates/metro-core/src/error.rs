//! Shared error type.
//!
//! This subsystem takes no external user input, so the error surface is
//! internal consistency only: a degenerate line definition must fail at
//! construction, never at tick time.  Sub-crates wrap `MetroError` as one
//! variant of their own error enums.

use thiserror::Error;

/// The top-level error type for `metro-core` and a common base for the
/// other `metro-*` crates.
#[derive(Debug, Error)]
pub enum MetroError {
    /// A line was defined with fewer than 2 stations — trains would have
    /// nowhere to shuttle between.
    #[error("line '{line}' has {stations} station(s); at least 2 are required")]
    DegenerateTopology { line: String, stations: usize },

    #[error("unknown line '{0}'")]
    UnknownLine(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `metro-*` crates.
pub type MetroResult<T> = Result<T, MetroError>;
