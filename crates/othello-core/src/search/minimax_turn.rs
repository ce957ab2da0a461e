/// Represents whose perspective is being optimized at the current ply.
///
/// The turn role is toggled explicitly on every recursive call and is never
/// inferred from depth parity: a forced pass recurses at the same depth, so
/// parity and role fall out of step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MinimaxTurn {
    /// The searching side is to move; children are folded with `max`.
    Max,
    /// The opponent is to move; children are folded with `min`.
    Min,
}

impl MinimaxTurn {
    /// Switches the turn role to the opposite side.
    ///
    /// # Returns
    /// The opposite turn role
    pub fn switch(self) -> Self {
        match self {
            MinimaxTurn::Max => MinimaxTurn::Min,
            MinimaxTurn::Min => MinimaxTurn::Max,
        }
    }
}
