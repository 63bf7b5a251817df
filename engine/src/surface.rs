use crate::graphics::{Color, CpuRenderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn rgba_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

/// Something that owns an RGBA8 pixel buffer of a known size.
///
/// Rendering writes into `frame_mut()`; presentation is a separate concern handled by
/// [`crate::display::Display`], so the same drawing code runs headful and headless.
pub trait Surface {
    fn size(&self) -> SurfaceSize;
    fn frame(&self) -> &[u8];
    fn frame_mut(&mut self) -> &mut [u8];
}

/// An in-memory RGBA buffer. Used as the per-frame canvas and by tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaBufferSurface {
    size: SurfaceSize,
    buf: Vec<u8>,
}

impl RgbaBufferSurface {
    /// Allocates a zeroed (transparent black) buffer.
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            buf: vec![0u8; size.rgba_len()],
        }
    }

    /// Allocates a buffer with every pixel set to `color`.
    pub fn filled(size: SurfaceSize, color: Color) -> Self {
        let mut surface = Self::new(size);
        for px in surface.buf.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
        surface
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let idx = (y as usize * self.size.width as usize + x as usize) * 4;
        let px = self.buf.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn renderer(&mut self) -> CpuRenderer<'_> {
        CpuRenderer::new(&mut self.buf, self.size)
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }
}

impl Surface for RgbaBufferSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn frame(&self) -> &[u8] {
        &self.buf
    }

    fn frame_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_surface_is_zeroed_and_sized() {
        let s = RgbaBufferSurface::new(SurfaceSize::new(3, 2));
        assert_eq!(s.frame().len(), 3 * 2 * 4);
        assert!(s.frame().iter().all(|&b| b == 0));
    }

    #[test]
    fn filled_surface_reports_color_per_pixel() {
        let s = RgbaBufferSurface::filled(SurfaceSize::new(4, 4), [1, 2, 3, 255]);
        assert_eq!(s.pixel(0, 0), Some([1, 2, 3, 255]));
        assert_eq!(s.pixel(3, 3), Some([1, 2, 3, 255]));
        assert_eq!(s.pixel(4, 0), None);
    }

    #[test]
    fn empty_size_has_no_bytes() {
        let size = SurfaceSize::new(0, 10);
        assert!(size.is_empty());
        assert_eq!(size.rgba_len(), 0);
    }
}
