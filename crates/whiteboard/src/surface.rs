//! CPU raster surface - square RGBA8 storage bound to a presentation target

use tracing::{info, trace};

use crate::constants::{BACKGROUND, MAX_SURFACE_SIZE};
use crate::error::WhiteboardError;
use crate::present::PresentationTarget;
use crate::types::Rgba8;

/// A square RGBA8 CPU surface
///
/// Pixels are stored row-major; pixel (x, y) lives at `x + size * y`.
/// Writes stay in memory until [`RasterSurface::commit`] hands the buffer to
/// a presentation target.
///
/// Pixel slices are borrowed from the surface, so none can outlive a
/// [`RasterSurface::reset`].
#[derive(Debug, Clone)]
pub struct RasterSurface {
    size: u32,
    pixels: Vec<Rgba8>,
    commits: u64,
}

impl RasterSurface {
    /// Create a new surface of `size`x`size` pixels, all set to [`BACKGROUND`]
    ///
    /// The unsigned size rules out negative dimensions; zero and sizes above
    /// [`MAX_SURFACE_SIZE`] are rejected here.
    pub fn new(size: u32) -> Result<Self, WhiteboardError> {
        if size == 0 || size > MAX_SURFACE_SIZE {
            return Err(WhiteboardError::InvalidDimension { size });
        }
        let pixel_count = (size as usize) * (size as usize);
        info!("Created {}x{} raster surface", size, size);
        Ok(Self {
            size,
            pixels: vec![BACKGROUND; pixel_count],
            commits: 0,
        })
    }

    /// Edge length in pixels
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total number of pixels (`size * size`)
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false; a surface holds at least one pixel
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Write a pixel by linear index
    ///
    /// The caller must clamp `index` into `[0, len)`; the splat stamper does.
    #[inline]
    pub fn write_pixel(&mut self, index: usize, color: Rgba8) {
        debug_assert!(index < self.pixels.len(), "pixel index {index} out of range");
        self.pixels[index] = color;
    }

    /// Get a pixel by linear index
    #[inline]
    pub fn pixel_at(&self, index: usize) -> Option<Rgba8> {
        self.pixels.get(index).copied()
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.size || y >= self.size {
            return None;
        }
        let index = (y as usize) * (self.size as usize) + (x as usize);
        Some(self.pixels[index])
    }

    /// Get direct access to pixel data
    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// Get raw pixel data for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// True if every pixel still holds the background value
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&p| p == BACKGROUND)
    }

    /// Number of pixels that differ from the background
    pub fn painted_pixel_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p != BACKGROUND).count()
    }

    /// Hand the current buffer to the presentation target
    pub fn commit<T: PresentationTarget + ?Sized>(&mut self, target: &mut T) {
        target.present(self.size, self.as_bytes());
        self.commits += 1;
        trace!("Committed surface ({} commits)", self.commits);
    }

    /// Number of commits since creation
    pub fn commit_count(&self) -> u64 {
        self.commits
    }

    /// Throw away all pixel data and reallocate a fresh background buffer
    pub fn reset(&mut self) {
        let pixel_count = (self.size as usize) * (self.size as usize);
        self.pixels = vec![BACKGROUND; pixel_count];
        info!("Reset {}x{} raster surface", self.size, self.size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::present::TextureSnapshot;

    #[test]
    fn test_new_surface() {
        let surface = RasterSurface::new(64).unwrap();
        assert_eq!(surface.size(), 64);
        assert_eq!(surface.len(), 64 * 64);
        assert!(surface.is_blank());
    }

    #[test]
    fn test_invalid_dimension() {
        assert_eq!(
            RasterSurface::new(0).unwrap_err(),
            WhiteboardError::InvalidDimension { size: 0 }
        );
        assert_eq!(
            RasterSurface::new(MAX_SURFACE_SIZE + 1).unwrap_err(),
            WhiteboardError::InvalidDimension {
                size: MAX_SURFACE_SIZE + 1
            }
        );
        assert_eq!(RasterSurface::new(1).unwrap().len(), 1);
    }

    #[test]
    fn test_write_and_read_pixel() {
        let mut surface = RasterSurface::new(8).unwrap();
        let red = Rgba8::new(255, 0, 0, 255);

        surface.write_pixel(3 + 8 * 2, red);
        assert_eq!(surface.pixel(3, 2), Some(red));
        assert_eq!(surface.pixel_at(19), Some(red));
        assert_eq!(surface.painted_pixel_count(), 1);

        // Out of bounds should return None
        assert_eq!(surface.pixel(8, 0), None);
        assert_eq!(surface.pixel_at(64), None);
    }

    #[test]
    fn test_as_bytes() {
        let surface = RasterSurface::new(2).unwrap();
        // 4 pixels * 4 bytes
        assert_eq!(surface.as_bytes().len(), 16);
    }

    #[test]
    fn test_commit_presents_buffer() {
        let mut surface = RasterSurface::new(4).unwrap();
        let mut target = TextureSnapshot::new();
        surface.write_pixel(5, Rgba8::new(1, 2, 3, 4));

        // Nothing is visible before the commit
        assert_eq!(target.pixel(1, 1), None);

        surface.commit(&mut target);
        assert_eq!(target.pixel(1, 1), Some([1, 2, 3, 4]));
        assert_eq!(surface.commit_count(), 1);
        assert_eq!(target.present_count(), 1);
    }

    #[test]
    fn test_reset_restores_fresh_buffer() {
        let mut surface = RasterSurface::new(16).unwrap();
        for i in 0..surface.len() {
            surface.write_pixel(i, Rgba8::new(9, 9, 9, 9));
        }
        surface.reset();

        let fresh = RasterSurface::new(16).unwrap();
        assert_eq!(surface.pixels(), fresh.pixels());
        assert_eq!(surface.len(), 256);
    }
}
