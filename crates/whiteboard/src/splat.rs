//! 3x3 splat stamping
//!
//! Every interpolated stroke point is drawn as a filled 3x3 block centered
//! on the nearest pixel.
//!
//! Indices are computed on the flattened buffer and clamped into
//! `[0, size * size)`. The clamp keeps every write in bounds, but a splat
//! centered on the left or right column wraps its outer column onto the
//! neighboring row, and splats past the first or last row pile up on the
//! first or last pixel. This is accepted cosmetic behavior at the edges.

use glam::Vec2;
use tracing::trace;

use crate::constants::SPLAT_OFFSETS;
use crate::surface::RasterSurface;
use crate::types::Rgba8;

/// Linear index of the pixel nearest to `center`, before clamping
///
/// Rounds half away from zero. May be negative or past the end of the
/// buffer; [`stamp`] clamps each splat index separately. Far off-surface
/// centers saturate at the `i64` limits instead of overflowing.
pub fn center_index(center: Vec2, size: u32) -> i64 {
    let x = center.x.round() as i64;
    let y = center.y.round() as i64;
    x.saturating_add((size as i64).saturating_mul(y))
}

/// Write a 3x3 block of `color` centered on `center`.
///
/// Returns the number of pixel writes (always 9). Does not commit.
pub fn stamp(surface: &mut RasterSurface, center: Vec2, color: Rgba8) -> usize {
    let size = surface.size() as i64;
    let last = surface.len() as i64 - 1;
    let center = center_index(center, surface.size());

    let mut writes = 0;
    for dy in SPLAT_OFFSETS {
        for dx in SPLAT_OFFSETS {
            let index = center
                .saturating_add(dx)
                .saturating_add(size * dy)
                .clamp(0, last);
            surface.write_pixel(index as usize, color);
            writes += 1;
        }
    }
    trace!("stamp: center index {} -> {} writes", center, writes);
    writes
}
