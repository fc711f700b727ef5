//! Native window via winit
//!
//! Window events are queued as `InputEvent`s and drained at the start of the
//! next frame. A frame runs on redraw; the next redraw is requested once the
//! frame delay has passed since the previous frame finished.

use std::sync::Arc;
use std::time::Instant;

use glam::DVec2;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::PlatformError;
use crate::renderer::LineRenderer;
use crate::settings::{Boundary, Settings};
use crate::sim::{FrameOutcome, InputEvent, PointerButton, SimState, frame};

/// Open a maximized window and run until it is closed
pub fn run(settings: Settings) -> Result<(), PlatformError> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(settings);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Everything that exists while the window is open
struct Session {
    state: SimState,
    renderer: LineRenderer,
    window: Arc<Window>,
}

struct App {
    settings: Settings,
    session: Option<Session>,
    /// Events received since the last frame
    pending: Vec<InputEvent>,
    cursor: DVec2,
    next_frame: Instant,
    redraw_pending: bool,
    error: Option<PlatformError>,
}

impl App {
    fn new(settings: Settings) -> Self {
        Self {
            settings,
            session: None,
            pending: Vec::new(),
            cursor: DVec2::ZERO,
            next_frame: Instant::now(),
            redraw_pending: false,
            error: None,
        }
    }

    fn start(&self, event_loop: &ActiveEventLoop) -> Result<Session, PlatformError> {
        let attrs = Window::default_attributes()
            .with_title("Ray Bounce")
            .with_maximized(true);
        let window = Arc::new(event_loop.create_window(attrs)?);

        // Circle sits at the center of the display the window fills
        let display = window
            .current_monitor()
            .or_else(|| event_loop.primary_monitor())
            .map(|monitor| monitor.size())
            .unwrap_or_else(|| window.inner_size());
        let boundary = Boundary::centered(display.width, display.height, self.settings.circle_radius);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let renderer = pollster::block_on(LineRenderer::new(
            surface,
            &adapter,
            (size.width, size.height),
            (size.width as f32, size.height as f32),
        ))?;

        let seed = super::time_seed();
        super::log_startup(&self.settings, &boundary, seed);

        Ok(Session {
            state: SimState::new(self.settings.clone(), boundary, seed),
            renderer,
            window,
        })
    }

    fn run_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let events = std::mem::take(&mut self.pending);
        match frame(&mut session.state, events, &mut session.renderer) {
            FrameOutcome::Continue => {
                self.next_frame = Instant::now() + self.settings.frame_delay();
            }
            FrameOutcome::Quit => {
                log::info!("Quit requested, closing window");
                // Drops the renderer before the window
                self.session = None;
                event_loop.exit();
            }
        }
    }
}

fn map_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        _ => PointerButton::Other,
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() || self.error.is_some() {
            return;
        }
        match self.start(event_loop) {
            Ok(session) => {
                session.window.request_redraw();
                self.redraw_pending = true;
                self.session = Some(session);
            }
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.pending.push(InputEvent::Quit);
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(session) = &mut self.session {
                    let (w, h) = (physical_size.width, physical_size.height);
                    session.renderer.resize((w, h), (w as f32, h as f32));
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = map_button(button);
                self.pending.push(match state {
                    ElementState::Pressed => InputEvent::PointerDown {
                        button,
                        pos: self.cursor,
                    },
                    ElementState::Released => InputEvent::PointerUp { button },
                });
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = DVec2::new(position.x, position.y);
                self.pending.push(InputEvent::PointerMoved { pos: self.cursor });
            }
            WindowEvent::RedrawRequested => {
                self.redraw_pending = false;
                self.run_frame(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(session) = &self.session else {
            return;
        };

        if !self.redraw_pending && Instant::now() >= self.next_frame {
            session.window.request_redraw();
            self.redraw_pending = true;
        }

        if self.redraw_pending {
            event_loop.set_control_flow(ControlFlow::Wait);
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
        }
    }
}
