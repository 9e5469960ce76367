//! Presentation targets that receive committed surface pixels
//!
//! The rendering side implements [`PresentationTarget`] (for example by
//! writing the bytes into a GPU texture). [`TextureSnapshot`] is an in-memory
//! target for headless hosts and tests.

/// Receives the full surface contents on every commit
pub trait PresentationTarget {
    /// Upload a `size`x`size` RGBA8 image. `pixels` holds `size * size * 4`
    /// bytes in row-major order.
    fn present(&mut self, size: u32, pixels: &[u8]);
}

/// Keeps a copy of the most recently presented image
#[derive(Debug, Default, Clone)]
pub struct TextureSnapshot {
    size: u32,
    bytes: Vec<u8>,
    present_count: u64,
}

impl TextureSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edge length of the last presented image (0 before the first present)
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Bytes of the last presented image
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// RGBA of the presented pixel at (x, y), if in bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size || y >= self.size {
            return None;
        }
        let start = ((y as usize) * (self.size as usize) + (x as usize)) * 4;
        let px = self.bytes.get(start..start + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Number of presents received so far
    pub fn present_count(&self) -> u64 {
        self.present_count
    }
}

impl PresentationTarget for TextureSnapshot {
    fn present(&mut self, size: u32, pixels: &[u8]) {
        self.size = size;
        self.bytes.clear();
        self.bytes.extend_from_slice(pixels);
        self.present_count += 1;
    }
}

impl<T: PresentationTarget + ?Sized> PresentationTarget for &mut T {
    fn present(&mut self, size: u32, pixels: &[u8]) {
        (**self).present(size, pixels);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_records_present() {
        let mut snapshot = TextureSnapshot::new();
        assert_eq!(snapshot.present_count(), 0);
        assert_eq!(snapshot.pixel(0, 0), None);

        let bytes = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];
        snapshot.present(2, &bytes);

        assert_eq!(snapshot.size(), 2);
        assert_eq!(snapshot.present_count(), 1);
        assert_eq!(snapshot.pixel(1, 0), Some([5, 6, 7, 8]));
        assert_eq!(snapshot.pixel(0, 1), Some([9, 10, 11, 12]));
        assert_eq!(snapshot.pixel(2, 0), None);
    }

    #[test]
    fn test_snapshot_replaces_previous_image() {
        let mut snapshot = TextureSnapshot::new();
        snapshot.present(1, &[1, 1, 1, 1]);
        snapshot.present(1, &[2, 2, 2, 2]);
        assert_eq!(snapshot.bytes(), &[2, 2, 2, 2]);
        assert_eq!(snapshot.present_count(), 2);
    }
}
