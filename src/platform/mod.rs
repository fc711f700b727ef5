//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Window/canvas and GPU surface creation
//! - Pointer input, translated to `InputEvent`s
//! - Frame pacing (fixed delay between frames)

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::settings::{Boundary, Settings};
use crate::sim::{InputEvent, PointerButton};

/// Seed for ball colors, taken from the wall clock
#[cfg(not(target_arch = "wasm32"))]
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Seed for ball colors, taken from the wall clock
#[cfg(target_arch = "wasm32")]
pub fn time_seed() -> u64 {
    js_sys::Date::now() as u64
}

/// Map a DOM-style button index (0 = left, 2 = right) to a pointer button
pub fn button_from_index(index: i16) -> PointerButton {
    match index {
        0 => PointerButton::Primary,
        2 => PointerButton::Secondary,
        _ => PointerButton::Other,
    }
}

/// Backing-store size in device pixels and the CSS-pixel viewport lines are
/// given in, for a canvas of `client_w` x `client_h` CSS pixels
pub fn canvas_sizes(client_w: i32, client_h: i32, dpr: f64) -> ((u32, u32), (f32, f32)) {
    let (w, h) = (client_w.max(1) as u32, client_h.max(1) as u32);
    let physical = ((w as f64 * dpr) as u32, (h as f64 * dpr) as u32);
    (physical, (w as f32, h as f32))
}

/// Event for a `pagehide`. A page kept in the back-forward cache
/// (`persisted`) may be shown again, so it keeps running.
pub fn pagehide_event(persisted: bool) -> Option<InputEvent> {
    (!persisted).then_some(InputEvent::Quit)
}

fn log_startup(settings: &Settings, boundary: &Boundary, seed: u64) {
    log::info!("Settings: {}", settings.to_log_string());
    log::info!(
        "Boundary at ({}, {}) radius {}",
        boundary.center.x,
        boundary.center.y,
        boundary.radius
    );
    log::info!("Color seed: {}", seed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_mapping() {
        assert_eq!(button_from_index(0), PointerButton::Primary);
        assert_eq!(button_from_index(1), PointerButton::Other);
        assert_eq!(button_from_index(2), PointerButton::Secondary);
        assert_eq!(button_from_index(4), PointerButton::Other);
    }

    #[test]
    fn test_canvas_sizes_follow_client_and_dpr() {
        assert_eq!(canvas_sizes(1000, 600, 1.0), ((1000, 600), (1000.0, 600.0)));
        assert_eq!(canvas_sizes(500, 300, 2.0), ((1000, 600), (500.0, 300.0)));
        // Viewport tracks the new CSS size so a pointer at its middle maps to NDC 0
        let (_, viewport) = canvas_sizes(500, 400, 1.5);
        assert_eq!(crate::renderer::canvas::pixel_to_ndc(250.0, 200.0, viewport), (0.0, 0.0));
    }

    #[test]
    fn test_canvas_sizes_never_zero() {
        assert_eq!(canvas_sizes(0, -5, 2.0), ((2, 2), (1.0, 1.0)));
    }

    #[test]
    fn test_pagehide_quits_unless_cached() {
        assert_eq!(pagehide_event(false), Some(InputEvent::Quit));
        assert_eq!(pagehide_event(true), None);
    }
}
