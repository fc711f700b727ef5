//! Ray Bounce - balls bouncing inside a circle, drawing kaleidoscope trails
//!
//! Core modules:
//! - `sim`: Particle physics, color drift, spawning and the per-frame loop body
//! - `renderer`: Drawing surface abstraction and the wgpu line renderer
//! - `platform`: Native (winit) and browser (web-sys) windows and input
//! - `settings`: Tunables and boundary geometry
//! - `error`: Fatal platform initialization errors

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::PlatformError;
pub use settings::{Boundary, Settings};

/// Compile-time tunables
pub mod consts {
    /// Balls emitted per pointer move while dragging
    pub const NUMBER_OF_RAYS: u32 = 18;
    /// Maximum live balls; the oldest are dropped beyond this
    pub const TOTAL_NUMBER_OF_BALLS: usize = 2500;
    /// Ball speed in pixels per frame
    pub const BALL_SPEED: f64 = 8.0;
    /// Pause between frames (milliseconds)
    pub const FRAME_DELAY_MS: u64 = 15;

    /// Boundary circle
    pub const CIRCLE_RADIUS: f64 = 250.0;
    /// Number of straight edges used to draw the boundary
    pub const CIRCLE_QUALITY: u32 = 50;

    /// Derive each new ball's color from the previous ball
    pub const SMOOTH_COLORS: bool = true;
    /// Max per-channel drift when smoothing colors
    pub const COLOR_DRIFT: i32 = 3;
    /// Stylized pseudo-gravity bias on headings
    pub const GRAVITATION: bool = false;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(mut angle: f64) -> f64 {
    while angle < 0.0 {
        angle += 360.0;
    }
    while angle >= 360.0 {
        angle -= 360.0;
    }
    angle
}

/// Unit vector for a heading in degrees
#[inline]
pub fn heading_to_unit(degrees: f64) -> glam::DVec2 {
    let radians = degrees.to_radians();
    glam::DVec2::new(radians.cos(), radians.sin())
}
