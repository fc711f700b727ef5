//! Drawing surface abstraction and the CPU-side line batch

use glam::DVec2;

use super::vertex::{Vertex, rgba_to_f32};

/// A surface the simulation draws on.
///
/// Coordinates are in the same space as pointer positions (pixels, origin at
/// the top-left, +y down). Lines drawn since the last `present()` become
/// visible on the next `present()`; nothing is erased except by `clear()`.
pub trait Canvas {
    /// Color used by subsequent `draw_line` calls
    fn set_draw_color(&mut self, r: u8, g: u8, b: u8, a: u8);
    /// Stroke a straight segment
    fn draw_line(&mut self, from: DVec2, to: DVec2);
    /// Wipe the surface to black, dropping undrawn lines
    fn clear(&mut self);
    /// Show everything drawn so far
    fn present(&mut self);
}

/// Lines waiting to be uploaded, in pixel space
#[derive(Debug, Clone)]
pub struct LineBatch {
    color: [f32; 4],
    vertices: Vec<Vertex>,
    clear_pending: bool,
}

impl Default for LineBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBatch {
    /// Empty batch. A fresh canvas starts with a pending clear so the first
    /// upload wipes whatever the texture held.
    pub fn new() -> Self {
        Self {
            color: [1.0; 4],
            vertices: Vec::new(),
            clear_pending: true,
        }
    }

    pub fn set_color(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.color = rgba_to_f32(r, g, b, a);
    }

    pub fn push_line(&mut self, from: DVec2, to: DVec2) {
        self.vertices
            .push(Vertex::new(from.x as f32, from.y as f32, self.color));
        self.vertices
            .push(Vertex::new(to.x as f32, to.y as f32, self.color));
    }

    /// Drop queued lines and wipe on the next upload
    pub fn request_clear(&mut self) {
        self.vertices.clear();
        self.clear_pending = true;
    }

    pub fn line_count(&self) -> usize {
        self.vertices.len() / 2
    }

    /// Whether the next upload must clear first; resets the flag
    pub fn take_clear(&mut self) -> bool {
        std::mem::take(&mut self.clear_pending)
    }

    /// Take the queued lines, converted to normalized device coordinates
    pub fn drain_ndc(&mut self, viewport: (f32, f32)) -> Vec<Vertex> {
        self.vertices
            .drain(..)
            .map(|v| {
                let (x, y) = pixel_to_ndc(v.position[0], v.position[1], viewport);
                Vertex::new(x, y, v.color)
            })
            .collect()
    }
}

/// Map pixel coordinates (origin top-left, +y down) to NDC (-1..1, +y up)
#[inline]
pub fn pixel_to_ndc(x: f32, y: f32, viewport: (f32, f32)) -> (f32, f32) {
    let (w, h) = viewport;
    (x / w * 2.0 - 1.0, 1.0 - y / h * 2.0)
}
