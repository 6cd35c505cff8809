//! MCTS search statistics for diagnostics and tuning.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Statistics collected during MCTS search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Total iterations performed, summed over workers.
    pub iterations: u64,

    /// Nodes expanded (added to tree), root excluded.
    pub nodes_expanded: u64,

    /// Playouts performed.
    pub playouts: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate iterations per second.
    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.iterations as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Calculate playouts per second.
    #[must_use]
    pub fn playouts_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.playouts as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Average nodes added per iteration.
    #[must_use]
    pub fn avg_nodes_per_iteration(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.nodes_expanded as f64 / self.iterations as f64
        }
    }
}

/// Counters shared by the workers of one search.
#[derive(Debug, Default)]
pub(crate) struct StatsCounters {
    iterations: AtomicU64,
    nodes_expanded: AtomicU64,
    playouts: AtomicU64,
}

impl StatsCounters {
    pub(crate) fn iteration(&self) {
        self.iterations.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn expansion(&self) {
        self.nodes_expanded.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn playout(&self) {
        self.playouts.fetch_add(1, Ordering::Relaxed);
    }

    /// Read the counters once all workers have joined.
    pub(crate) fn finish(&self, time_us: u64) -> SearchStats {
        SearchStats {
            iterations: self.iterations.load(Ordering::Relaxed),
            nodes_expanded: self.nodes_expanded.load(Ordering::Relaxed),
            playouts: self.playouts.load(Ordering::Relaxed),
            time_us,
        }
    }
}
