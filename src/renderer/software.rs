//! CPU implementation of the overlay primitives, straight into the frame
//! buffer.

use super::{FrameBuffer, Overlay, Rgba};

impl Overlay for FrameBuffer {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, colour: Rgba) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.width() as i32);
        let y1 = y.saturating_add(h).min(self.height() as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for py in y0 as usize..y1 as usize {
            for px in x0 as usize..x1 as usize {
                self.put(px, py, colour);
            }
        }
    }

    /// Integer Bresenham; pixels off the surface are skipped.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colour: Rgba) {
        let (w, h) = (self.width() as i32, self.height() as i32);
        let mut x0 = x0;
        let mut y0 = y0;
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            if (0..w).contains(&x0) && (0..h).contains(&y0) {
                self.put(x0 as usize, y0 as usize, colour);
            }
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
