//! Straight-line interpolation between two stroke positions
//!
//! Sources can move several pixels per tick. [`interpolate`] fills the gap
//! with points no more than one pixel apart so the stamped stroke has no
//! holes.

use glam::Vec2;

/// Sample the segment `from -> to` at unit spacing.
///
/// Produces `N = max(1, ceil(|to - from|))` points at `t = i / N` for
/// `i in 0..N`. The first point is `from`; the last lies within one pixel of
/// `to`, which the next tick starts from. A stationary source yields exactly
/// one point.
pub fn interpolate(from: Vec2, to: Vec2) -> LinePoints {
    let distance = from.distance(to);
    // NaN casts to 0 and saturates on overflow
    let count = (distance.ceil() as u32).max(1);
    LinePoints {
        from,
        to,
        count,
        index: 0,
    }
}

/// Lazy sequence of interpolated points. A pure function of its endpoints:
/// clone it before iterating to replay the same points.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePoints {
    from: Vec2,
    to: Vec2,
    count: u32,
    index: u32,
}

impl Iterator for LinePoints {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        if self.index >= self.count {
            return None;
        }
        let t = self.index as f32 / self.count as f32;
        self.index += 1;
        Some(self.from + (self.to - self.from) * t)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LinePoints {}

impl std::iter::FusedIterator for LinePoints {}
