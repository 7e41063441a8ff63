//! Optimization bookkeeping.

use serde::{Deserialize, Serialize};

/// Ledger of one optimization run. `applied` is insertion-ordered and
/// duplicate-free, so each rewrite lands at most once per run and a
/// re-run over already-optimized input leaves the ledger empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptimizationRecord {
    /// Human-readable labels of the rewrites that changed the artifact.
    pub applied: Vec<String>,
    /// The rewritten artifact after all applied rules.
    pub artifact: String,
    /// Advisory score estimate delta; re-review for ground truth.
    pub score_delta: u8,
}

impl OptimizationRecord {
    /// Record a label once; repeat applications of the same rule within a
    /// run do not duplicate it.
    pub fn record(&mut self, label: impl Into<String>) {
        let label = label.into();
        if !self.applied.iter().any(|l| *l == label) {
            self.applied.push(label);
        }
    }
}
