//! Boundary and trail drawing

use super::canvas::Canvas;
use super::vertex::colors;
use crate::settings::Boundary;
use crate::sim::Particle;

/// Stroke the boundary as a closed polygon of `quality` edges, then present
pub fn draw_boundary<C: Canvas + ?Sized>(canvas: &mut C, boundary: &Boundary, quality: u32) {
    let [r, g, b, a] = colors::BOUNDARY;
    canvas.set_draw_color(r, g, b, a);

    let points = boundary.polygon(quality);
    for (i, &start) in points.iter().enumerate() {
        // Last edge wraps back to the first vertex
        let end = points[(i + 1) % points.len()];
        canvas.draw_line(start, end);
    }

    canvas.present();
}

/// Draw the ball's trail segment since the last frame, then move the trail
/// start up to the current position
pub fn draw_particle<C: Canvas + ?Sized>(canvas: &mut C, particle: &mut Particle) {
    let color = particle.color;
    canvas.set_draw_color(color.r, color.g, color.b, 255);
    canvas.draw_line(particle.prev, particle.pos);
    particle.prev = particle.pos;
}
