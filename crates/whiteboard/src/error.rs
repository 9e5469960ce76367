//! Error types for the whiteboard

use crate::constants::MAX_SURFACE_SIZE;
use crate::types::SourceId;

/// Errors that make a whiteboard unusable until the caller corrects them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WhiteboardError {
    #[error("Invalid surface dimension: {size} (must be 1..={})", MAX_SURFACE_SIZE)]
    InvalidDimension { size: u32 },
}

/// A single source reported a coordinate that cannot be drawn.
///
/// Recovered locally: the source is skipped for the tick and every other
/// source still draws.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    #[error("{source_id} reported a non-finite coordinate ({x}, {y})")]
    NonFinite { source_id: SourceId, x: f32, y: f32 },
    #[error("{source_id} reported an out-of-range coordinate ({x}, {y})")]
    OutOfRange { source_id: SourceId, x: f32, y: f32 },
}
