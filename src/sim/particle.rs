//! Ball entity

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::color::Rgb;
use crate::{heading_to_unit, normalize_degrees};

/// A bouncing ball and the last point its trail was drawn to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Current position
    pub pos: DVec2,
    /// Position at the end of the previous draw
    pub prev: DVec2,
    /// Heading in degrees, measured from +x
    pub alpha: f64,
    /// Per-frame displacement derived from `alpha` and `speed`
    pub dir: DVec2,
    pub speed: f64,
    pub color: Rgb,
}

impl Particle {
    pub fn new(pos: DVec2, alpha: f64, speed: f64) -> Self {
        Self {
            pos,
            prev: pos,
            alpha,
            dir: DVec2::ZERO,
            speed,
            color: Rgb::BLACK,
        }
    }

    /// Set the color, clamping each channel to [0, 255]
    pub fn set_color(&mut self, r: i32, g: i32, b: i32) {
        self.color = Rgb::clamped(r, g, b);
    }

    /// Normalize the heading and recompute `dir` from it
    pub fn derive_heading(&mut self) {
        self.alpha = normalize_degrees(self.alpha);
        self.dir = heading_to_unit(self.alpha) * self.speed;
    }

    /// Nudge the heading toward "down" (+y on screen).
    ///
    /// Stylized torque: the bias is the signed distance of `alpha + 90` from
    /// 180 degrees, scaled by 3/180.
    pub fn apply_gravity_bias(&mut self) {
        let reference = normalize_degrees(self.alpha + 90.0);
        self.alpha += 3.0 * (180.0 - reference) / 180.0;
    }
}
