//! Train motion state machine.
//!
//! A train is always in exactly one of two situations: **moving** between
//! two adjacent stations (`progress ∈ [0, 1)`, advanced by `speed` each
//! tick) or, instantaneously within a tick, **arriving** when the
//! accumulated progress would reach 1.0.
//!
//! The arrival transition is the only place direction ever changes, and
//! it happens *before* the next-station recompute: step onto the reached
//! station, flip if that station is the terminus for the current
//! direction, then look up the neighbor.  This ordering is what
//! guarantees perpetual end-to-end shuttling with no out-of-range index
//! ever being requested.

use metro_core::{Direction, SimParams, SimRng, Topology};

/// Mutable per-train state.
///
/// Invariant: `next_station` is always `topology.neighbor(current_station,
/// direction)`, and `speed` is strictly positive (resampled from the
/// configured positive range on every arrival).
#[derive(Clone, Debug)]
pub struct Train {
    pub id: String,
    pub current_station: usize,
    pub next_station: usize,
    pub direction: Direction,
    /// Fractional advancement from current to next station, in `[0, 1)`.
    pub progress: f64,
    /// Progress added per tick; strictly positive.
    pub speed: f64,
}

impl Train {
    /// Spawn train `i` of `params.train_count` at its evenly distributed
    /// starting position.
    ///
    /// Trains are spread across the line (`index = (len-1) * i / count`),
    /// alternate initial direction by parity, and start with a random
    /// partial progress so the line doesn't pulse in lockstep.
    pub fn spawn(
        i:      usize,
        prefix: &str,
        topo:   &Topology,
        params: &SimParams,
        rng:    &mut SimRng,
    ) -> Train {
        let current = topo.last_index() * i / params.train_count;
        let mut direction = if i % 2 == 0 {
            Direction::Outbound
        } else {
            Direction::Inbound
        };
        // A train spawned on a terminus must face away from it, or its
        // first segment would be zero-length.
        if topo.is_terminus(current, direction) {
            direction = direction.flip();
        }

        let progress = if params.initial_progress_max > 0.0 {
            rng.gen_range(0.0..params.initial_progress_max)
        } else {
            0.0
        };

        Train {
            id: format!("{}{:02}", prefix, i + 1),
            current_station: current,
            next_station: topo.neighbor(current, direction),
            direction,
            progress,
            speed: rng.gen_range(params.speed_range.clone()),
        }
    }

    /// Advance one tick.  Returns `true` if the train arrived at (and
    /// stepped onto) its next station during this tick.
    pub fn advance(&mut self, topo: &Topology, params: &SimParams, rng: &mut SimRng) -> bool {
        self.progress += self.speed;
        if self.progress < 1.0 {
            return false;
        }

        // Arrival: step onto the reached station and restart the segment.
        self.progress = 0.0;
        self.current_station = self.next_station;

        // Flip at a terminus BEFORE recomputing the neighbor; the clamp in
        // `neighbor` would otherwise pin the train in place for a segment.
        if topo.is_terminus(self.current_station, self.direction) {
            self.direction = self.direction.flip();
        }
        self.next_station = topo.neighbor(self.current_station, self.direction);
        self.speed = rng.gen_range(params.speed_range.clone());

        debug_assert!(self.speed > 0.0);
        debug_assert_eq!(
            self.next_station,
            topo.neighbor(self.current_station, self.direction),
        );
        debug_assert_ne!(self.next_station, self.current_station);

        true
    }
}
