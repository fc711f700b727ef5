//! Per-frame simulation step
//!
//! Drains input, draws the boundary, then draws and advances every ball.

use glam::DVec2;

use super::reflect::advance;
use super::state::SimState;
use crate::renderer::{Canvas, draw_boundary, draw_particle};

/// Pointer button identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Starts dragging
    Primary,
    /// Clears every ball
    Secondary,
    /// Any other button; treated like primary
    Other,
}

/// Input events, in the order the platform received them
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    PointerDown { button: PointerButton, pos: DVec2 },
    PointerUp { button: PointerButton },
    PointerMoved { pos: DVec2 },
}

/// Whether the loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Apply one input event
pub fn handle_event<C: Canvas + ?Sized>(
    state: &mut SimState,
    event: InputEvent,
    canvas: &mut C,
) -> FrameOutcome {
    match event {
        InputEvent::Quit => return FrameOutcome::Quit,
        InputEvent::PointerDown {
            button: PointerButton::Secondary,
            ..
        } => {
            let removed = state.clear();
            canvas.clear();
            canvas.present();
            log::debug!("Cleared {} balls", removed);
        }
        InputEvent::PointerDown { .. } => {
            if !state.dragging {
                log::debug!("Drag started");
            }
            state.dragging = true;
        }
        InputEvent::PointerUp { .. } => {
            if state.dragging {
                log::debug!("Drag ended with {} balls alive", state.len());
            }
            state.dragging = false;
        }
        InputEvent::PointerMoved { pos } => {
            if state.dragging {
                let evicted = state.spawn_fan(pos);
                if evicted > 0 {
                    log::debug!("Evicted {} oldest balls", evicted);
                }
            }
        }
    }
    FrameOutcome::Continue
}

/// Run one frame: drain `events`, draw the boundary, then draw and advance
/// every ball oldest first.
///
/// Stops at the first `Quit` without drawing.
pub fn frame<C, I>(state: &mut SimState, events: I, canvas: &mut C) -> FrameOutcome
where
    C: Canvas + ?Sized,
    I: IntoIterator<Item = InputEvent>,
{
    for event in events {
        if handle_event(state, event, canvas) == FrameOutcome::Quit {
            return FrameOutcome::Quit;
        }
    }

    draw_boundary(canvas, &state.boundary, state.settings.circle_quality);

    let bounces = draw_and_advance(state, canvas);
    log::trace!("Frame drew {} balls, {} bounced", state.len(), bounces);
    FrameOutcome::Continue
}

/// Draw then advance every ball, oldest first. Returns how many reflected.
fn draw_and_advance<C: Canvas + ?Sized>(state: &mut SimState, canvas: &mut C) -> usize {
    let boundary = state.boundary;
    let gravity = state.settings.gravity;
    let mut bounces = 0;
    for particle in state.particles.iter_mut() {
        draw_particle(canvas, particle);
        if advance(particle, &boundary, gravity) {
            bounces += 1;
        }
    }
    bounces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{Op, RecordingCanvas};
    use crate::settings::{Boundary, Settings};
    use crate::sim::Particle;

    fn new_state() -> SimState {
        SimState::new(
            Settings::default(),
            Boundary::centered(800, 600, 250.0),
            12345,
        )
    }

    fn down(button: PointerButton, x: f64, y: f64) -> InputEvent {
        InputEvent::PointerDown {
            button,
            pos: DVec2::new(x, y),
        }
    }

    fn moved(x: f64, y: f64) -> InputEvent {
        InputEvent::PointerMoved {
            pos: DVec2::new(x, y),
        }
    }

    fn up() -> InputEvent {
        InputEvent::PointerUp {
            button: PointerButton::Primary,
        }
    }

    #[test]
    fn test_drag_spawns_fan() {
        let mut state = new_state();
        let mut canvas = RecordingCanvas::default();

        let events = [down(PointerButton::Primary, 400.0, 300.0), moved(410.0, 300.0)];
        assert_eq!(frame(&mut state, events, &mut canvas), FrameOutcome::Continue);

        assert!(state.dragging);
        assert_eq!(state.len(), 18);
        let headings: Vec<f64> = (0..18).map(|i| 20.0 * i as f64).collect();
        // Spawned near the center, so the first step never reflects
        for (ball, expected) in state.particles.iter().zip(headings) {
            assert!((ball.alpha - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_move_without_drag_spawns_nothing() {
        let mut state = new_state();
        let mut canvas = RecordingCanvas::default();
        frame(&mut state, [moved(400.0, 300.0)], &mut canvas);
        assert!(state.is_empty());
    }

    #[test]
    fn test_release_then_move_spawns_nothing() {
        let mut state = new_state();
        let mut canvas = RecordingCanvas::default();
        let events = [
            down(PointerButton::Primary, 400.0, 300.0),
            moved(401.0, 300.0),
            up(),
            moved(402.0, 300.0),
            moved(403.0, 300.0),
        ];
        frame(&mut state, events, &mut canvas);
        assert!(!state.dragging);
        assert_eq!(state.len(), 18);
    }

    #[test]
    fn test_other_button_starts_drag() {
        let mut state = new_state();
        let mut canvas = RecordingCanvas::default();
        frame(
            &mut state,
            [down(PointerButton::Other, 0.0, 0.0), moved(400.0, 300.0)],
            &mut canvas,
        );
        assert_eq!(state.len(), 18);
    }

    #[test]
    fn test_secondary_clears_and_keeps_drag_state() {
        let mut state = new_state();
        let mut canvas = RecordingCanvas::default();
        let events = [
            down(PointerButton::Primary, 400.0, 300.0),
            moved(400.0, 300.0),
            moved(401.0, 300.0),
            down(PointerButton::Secondary, 400.0, 300.0),
        ];
        frame(&mut state, events, &mut canvas);

        assert!(state.is_empty());
        assert!(state.dragging);
        // Clear is presented before the boundary is drawn
        assert_eq!(canvas.ops[0], Op::Clear);
        assert_eq!(canvas.ops[1], Op::Present);

        // Still dragging: the next move spawns again
        frame(&mut state, [moved(400.0, 300.0)], &mut canvas);
        assert_eq!(state.len(), 18);
    }

    #[test]
    fn test_secondary_while_idle_stays_idle() {
        let mut state = new_state();
        let mut canvas = RecordingCanvas::default();
        frame(
            &mut state,
            [down(PointerButton::Secondary, 0.0, 0.0), moved(400.0, 300.0)],
            &mut canvas,
        );
        assert!(!state.dragging);
        assert!(state.is_empty());
    }

    #[test]
    fn test_quit_stops_without_drawing() {
        let mut state = new_state();
        let mut canvas = RecordingCanvas::default();
        let events = [InputEvent::Quit, down(PointerButton::Primary, 0.0, 0.0)];
        assert_eq!(frame(&mut state, events, &mut canvas), FrameOutcome::Quit);
        assert!(canvas.ops.is_empty());
        assert!(!state.dragging);
    }

    #[test]
    fn test_frame_draws_boundary_then_trails() {
        let mut state = new_state();
        let mut canvas = RecordingCanvas::default();
        frame(
            &mut state,
            [down(PointerButton::Primary, 400.0, 300.0), moved(400.0, 300.0)],
            &mut canvas,
        );

        // Boundary: color + 50 lines + present, then one color + line per ball
        assert_eq!(canvas.count(&Op::Present), 1);
        assert_eq!(canvas.ops[51], Op::Present);
        let trails = &canvas.ops[52..];
        assert_eq!(trails.len(), 2 * 18);

        // First frame trails are zero length (spawned this frame)
        for op in trails {
            if let Op::Line(a, b) = op {
                assert_eq!(a, b);
            }
        }

        // Each ball moved one step after being drawn
        for ball in &state.particles {
            assert!(((ball.pos - ball.prev).length() - 8.0).abs() < 1e-9);
            assert_eq!(ball.prev, DVec2::new(400.0, 300.0));
        }
    }

    #[test]
    fn test_second_frame_draws_previous_step() {
        let mut state = new_state();
        let mut canvas = RecordingCanvas::default();
        frame(
            &mut state,
            [down(PointerButton::Primary, 400.0, 300.0), moved(400.0, 300.0)],
            &mut canvas,
        );
        let mut canvas = RecordingCanvas::default();
        frame(&mut state, std::iter::empty(), &mut canvas);

        let lines = canvas.lines();
        let trail = lines[50];
        assert_eq!(trail.0, DVec2::new(400.0, 300.0));
        assert!((trail.1 - DVec2::new(408.0, 300.0)).length() < 1e-9);
    }

    #[test]
    fn test_balls_stay_bounded_over_time() {
        let mut state = new_state();
        let mut canvas = RecordingCanvas::default();
        frame(
            &mut state,
            [down(PointerButton::Primary, 0.0, 0.0), moved(450.0, 350.0)],
            &mut canvas,
        );
        for _ in 0..500 {
            let mut canvas = RecordingCanvas::default();
            frame(&mut state, std::iter::empty(), &mut canvas);
        }
        let b = state.boundary;
        for ball in &state.particles {
            assert!((ball.pos - b.center).length() < b.radius + ball.speed);
        }
    }

    #[test]
    fn test_determinism() {
        // Same seed and inputs give identical balls
        let run = || {
            let mut state = new_state();
            let mut canvas = RecordingCanvas::default();
            let events = [
                down(PointerButton::Primary, 400.0, 300.0),
                moved(420.0, 310.0),
                moved(430.0, 320.0),
            ];
            frame(&mut state, events, &mut canvas);
            for _ in 0..50 {
                frame(&mut state, std::iter::empty(), &mut canvas);
            }
            state.particles
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_draw_and_advance_counts_bounces() {
        let mut state = new_state();
        let center = state.boundary.center;
        // One heading straight at the wall, one resting in the middle
        state
            .particles
            .push_back(Particle::new(center + DVec2::new(245.0, 0.0), 0.0, 8.0));
        state.particles.push_back(Particle::new(center, 90.0, 8.0));

        let mut canvas = RecordingCanvas::default();
        assert_eq!(draw_and_advance(&mut state, &mut canvas), 1);
        assert!((state.particles[0].alpha - 180.0).abs() < 1e-9);
        assert_eq!(canvas.lines().len(), 2);

        let mut canvas = RecordingCanvas::default();
        assert_eq!(draw_and_advance(&mut state, &mut canvas), 0);
    }

    #[test]
    fn test_gravity_setting_bends_headings() {
        let settings = Settings {
            gravity: true,
            ..Default::default()
        };
        let mut state = SimState::new(settings, Boundary::centered(800, 600, 250.0), 12345);
        let mut canvas = RecordingCanvas::default();
        frame(
            &mut state,
            [down(PointerButton::Primary, 400.0, 300.0), moved(400.0, 300.0)],
            &mut canvas,
        );

        // Interior step: 0 -> +1.5, 90 unchanged, 180 -> -1.5
        assert!((state.particles[0].alpha - 1.5).abs() < 1e-9);
        assert!((state.particles[4].alpha - 80.0 - 1.0 / 6.0).abs() < 1e-9);
        assert!((state.particles[9].alpha - 178.5).abs() < 1e-9);

        // Off by default
        let mut plain = new_state();
        frame(
            &mut plain,
            [down(PointerButton::Primary, 400.0, 300.0), moved(400.0, 300.0)],
            &mut canvas,
        );
        assert_eq!(plain.particles[0].alpha, 0.0);
    }

    #[test]
    fn test_capacity_held_during_long_drag() {
        let mut state = new_state();
        let mut canvas = RecordingCanvas::default();
        frame(&mut state, [down(PointerButton::Primary, 0.0, 0.0)], &mut canvas);
        for i in 0..200 {
            let events = (0..5).map(|j| moved(300.0 + i as f64, 250.0 + j as f64));
            frame(&mut state, events, &mut canvas);
            assert!(state.len() <= 2500);
        }
        assert_eq!(state.len(), 2500);
    }
}
