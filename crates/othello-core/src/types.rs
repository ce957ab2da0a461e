//! Common type aliases used throughout the engine.

/// Search depth, measured in plies where a disc is actually placed.
pub type Depth = u32;

/// Score, as a disc-count differential.
pub type Score = i32;
