//! Search statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Counters collected during one search. They never affect the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, including terminal leaves.
    pub nodes: u64,
    /// Times the remaining siblings were skipped because `beta <= alpha`.
    pub cutoffs: u64,
    /// Deepest ply reached below the root.
    pub max_depth: u32,
}

impl SearchStats {
    /// Records a visit at `depth`.
    pub fn visit(&mut self, depth: u32) {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Records an alpha-beta cutoff.
    pub fn cutoff(&mut self) {
        self.cutoffs += 1;
    }

    /// Cutoffs per hundred visited nodes.
    pub fn cutoff_rate(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.cutoffs as f64 / self.nodes as f64 * 100.0
        }
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} nodes, {} cutoffs ({:.1}%), depth {}",
            self.nodes,
            self.cutoffs,
            self.cutoff_rate(),
            self.max_depth
        )
    }
}
