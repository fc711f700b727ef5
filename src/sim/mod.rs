//! Simulation module
//!
//! All ball behavior lives here. This module is deterministic for a given seed
//! and input sequence:
//! - Fixed per-frame step, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (oldest ball first)
//! - Drawing goes through the `Canvas` trait, never a concrete backend

pub mod color;
pub mod particle;
pub mod reflect;
pub mod state;
pub mod tick;

pub use color::{Rgb, derive_color};
pub use particle::Particle;
pub use reflect::{advance, distance, reflect_heading};
pub use state::SimState;
pub use tick::{FrameOutcome, InputEvent, PointerButton, frame, handle_event};
