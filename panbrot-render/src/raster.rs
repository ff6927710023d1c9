use crate::color::Color;

/// A width × height pixel surface the renderer draws into.
///
/// The platform shell owns the concrete surface (a window framebuffer, a
/// canvas, an image file) and lends it to [`render`](crate::render) for the
/// duration of one call. Writes to distinct pixels are independent; the
/// renderer writes each pixel exactly once per frame.
pub trait RasterTarget {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Write one pixel. `(0, 0)` is the top-left corner; `x < width` and
    /// `y < height` hold for every call the renderer makes.
    fn set_pixel(&mut self, x: u32, y: u32, color: Color);
}

/// An in-memory RGBA raster, 4 bytes per pixel, row-major.
///
/// The reference [`RasterTarget`] used by headless rendering, PNG export,
/// and tests. New buffers start black and opaque.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let mut pixels = vec![0u8; width as usize * height as usize * 4];
        for chunk in pixels.chunks_exact_mut(4) {
            chunk[3] = 255;
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Raw RGBA bytes, suitable for display upload or PNG encoding.
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    /// Read a pixel back (alpha dropped). Used by tests and previews.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        Color::new(self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2])
    }
}

impl RasterTarget for Framebuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        debug_assert!(x < self.width && y < self.height);
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_rgba());
    }
}
