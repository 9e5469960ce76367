use crate::types::Rgba8;

/// Largest accepted surface edge length in pixels.
pub const MAX_SURFACE_SIZE: u32 = 4096;

/// Value every pixel holds after creation or reset (transparent black).
pub const BACKGROUND: Rgba8 = Rgba8::new(0, 0, 0, 0);

/// Splat offsets along each axis. A splat covers a 3x3 block.
pub const SPLAT_OFFSETS: [i64; 3] = [-1, 0, 1];

/// Coordinates further than this many surface widths from the origin are
/// rejected before interpolation.
pub const COORDINATE_LIMIT_FACTOR: f32 = 4.0;

/// Offset added to local plane coordinates to map a unit quad centered on
/// the origin into [0, 1] UV space.
pub const UV_CENTER_OFFSET: f32 = 0.5;
