use std::time::Duration;

use crate::square::Square;
use crate::types::{Depth, Score};

/// Outcome of one top-level search decision.
pub struct SearchResult {
    /// Disc-count differential the best move guarantees under optimal
    /// adversarial play to the searched depth.
    pub score: Score,
    /// The chosen move; `None` only when the caller violated the
    /// has-legal-moves precondition.
    pub best_move: Option<Square>,
    /// Number of nodes visited while making this decision.
    pub n_nodes: u64,
    /// Depth budget the decision was searched to.
    pub depth: Depth,
    /// Wall-clock time the decision took.
    pub elapsed: Duration,
}
