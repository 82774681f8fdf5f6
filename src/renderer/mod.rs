//! Pixel surfaces.
//!
//! *The caster never touches pixels.*  The projector writes wall columns into
//! a [`FrameBuffer`]; overlays go through the [`Overlay`] primitives; the
//! finished buffer is loaned to the window for exactly one frame.

pub mod minimap;
pub mod software;

/// Pixel format of the software frame-buffer (0xAARRGGBB).
pub type Rgba = u32;

/// Full-frame pixel store, allocated once at startup.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    pixels: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only view handed to the presentation layer.
    #[inline]
    pub fn as_slice(&self) -> &[Rgba] {
        &self.pixels
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.pixels[y * self.width + x]
    }

    /// Write one pixel.  Caller guarantees `x < width`, `y < height`.
    #[inline(always)]
    pub fn put(&mut self, x: usize, y: usize, colour: Rgba) {
        self.pixels[y * self.width + x] = colour;
    }

    /// Fill rows `y0..y1` of column `x`.
    #[inline]
    pub fn fill_column(&mut self, x: usize, y0: usize, y1: usize, colour: Rgba) {
        for y in y0..y1 {
            self.pixels[y * self.width + x] = colour;
        }
    }
}

/// Drawing primitives for 2-D overlays (minimap).
///
/// Coordinates are in pixels and may fall outside the surface; implementors
/// clip.
pub trait Overlay {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, colour: Rgba);

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colour: Rgba);
}
