//! Boundary reflection
//!
//! One step of look-ahead against the containing circle. A step that would
//! reach or cross the circle mirrors the heading about the tangent at the
//! ball's current (pre-step) position, then the step is taken anyway. Fast
//! balls can therefore poke slightly past the edge before coming back.

use glam::DVec2;

use super::particle::Particle;
use crate::heading_to_unit;
use crate::settings::Boundary;

/// Euclidean distance
#[inline]
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    (b - a).length()
}

/// Mirror a heading (degrees) about the surface with outward unit `normal`.
/// Returns the new heading in degrees, in (-180, 180].
pub fn reflect_heading(alpha: f64, normal: DVec2) -> f64 {
    let heading = heading_to_unit(alpha);
    let dot = -heading.x * normal.x - heading.y * normal.y;
    let reflected = heading + 2.0 * dot * normal;
    reflected.y.atan2(reflected.x).to_degrees()
}

/// Advance a ball one frame, bouncing it off the boundary.
///
/// Returns true if the heading was reflected this frame.
pub fn advance(particle: &mut Particle, boundary: &Boundary, gravity: bool) -> bool {
    particle.derive_heading();

    let predicted = particle.pos + particle.dir;
    let reflected = distance(predicted, boundary.center) >= boundary.radius;
    if reflected {
        // Normal taken at the current position, not the crossing point
        let dist = distance(particle.pos, boundary.center);
        let normal = (particle.pos - boundary.center) / dist;
        particle.alpha = reflect_heading(particle.alpha, normal);
        particle.derive_heading();
    }

    particle.pos += particle.dir;

    if gravity {
        particle.apply_gravity_bias();
    }

    reflected
}
