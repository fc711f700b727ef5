//! Simulation settings and boundary geometry
//!
//! Everything here is fixed at startup; nothing is read from disk or flags.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Simulation tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Balls per fan
    pub ray_count: u32,
    /// Maximum live balls
    pub capacity: usize,
    /// Ball speed (pixels per frame)
    pub speed: f64,
    /// Pause between frames (milliseconds)
    pub frame_delay_ms: u64,
    /// Boundary radius
    pub circle_radius: f64,
    /// Boundary polygon edge count
    pub circle_quality: u32,
    /// Chain colors from the previous ball instead of picking fresh ones
    pub smooth_colors: bool,
    /// Enable the heading bias
    pub gravity: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ray_count: NUMBER_OF_RAYS,
            capacity: TOTAL_NUMBER_OF_BALLS,
            speed: BALL_SPEED,
            frame_delay_ms: FRAME_DELAY_MS,
            circle_radius: CIRCLE_RADIUS,
            circle_quality: CIRCLE_QUALITY,
            smooth_colors: SMOOTH_COLORS,
            gravity: GRAVITATION,
        }
    }
}

impl Settings {
    /// Frame delay as a `Duration`
    pub fn frame_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.frame_delay_ms)
    }

    /// Degrees between neighbouring rays of a fan
    pub fn ray_step_degrees(&self) -> f64 {
        360.0 / self.ray_count.max(1) as f64
    }

    /// One-line JSON dump for the startup log
    pub fn to_log_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

/// The containing circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub center: DVec2,
    pub radius: f64,
}

impl Boundary {
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Circle centered on a display of the given size
    pub fn centered(width: u32, height: u32, radius: f64) -> Self {
        // Integer halving, like a pixel center
        let center = DVec2::new((width / 2) as f64, (height / 2) as f64);
        Self { center, radius }
    }

    /// Polygon approximation with `quality` vertices, first vertex at angle 0
    pub fn polygon(&self, quality: u32) -> Vec<DVec2> {
        let quality = quality.max(3);
        (0..quality)
            .map(|i| {
                let theta = std::f64::consts::TAU * i as f64 / quality as f64;
                self.center + DVec2::new(theta.cos(), theta.sin()) * self.radius
            })
            .collect()
    }
}
