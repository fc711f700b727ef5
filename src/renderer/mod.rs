//! Rendering module
//!
//! The simulation draws through the `Canvas` trait. `LineRenderer` is the
//! wgpu implementation: lines accumulate in an offscreen canvas texture that
//! is only wiped on `clear()`, so trails persist between frames.

pub mod canvas;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use canvas::{Canvas, LineBatch};
pub use pipeline::LineRenderer;
pub use shapes::{draw_boundary, draw_particle};
pub use vertex::Vertex;

#[cfg(test)]
pub(crate) mod recording;
