//! Browser canvas via web-sys
//!
//! Mouse listeners push `InputEvent`s onto a shared queue; a `setTimeout`
//! chain drains it once per frame. Window resizes rescale the canvas.

use std::cell::RefCell;
use std::rc::Rc;

use glam::DVec2;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, PageTransitionEvent};

use super::{button_from_index, canvas_sizes, pagehide_event};
use crate::error::PlatformError;
use crate::renderer::LineRenderer;
use crate::settings::{Boundary, Settings};
use crate::sim::{FrameOutcome, InputEvent, SimState, frame};

/// Id of the `<canvas>` element to draw on
pub const CANVAS_ID: &str = "canvas";

struct WebApp {
    state: SimState,
    /// Dropped on quit, which also stops the frame chain
    renderer: Option<LineRenderer>,
    pending: Vec<InputEvent>,
    delay_ms: i32,
}

/// Attach to the page canvas and start the frame loop.
///
/// Returns once the loop is scheduled; frames keep running from timers.
pub async fn run(settings: Settings) -> Result<(), PlatformError> {
    let window = web_sys::window().ok_or(PlatformError::NoBrowserWindow)?;
    let document = window.document().ok_or(PlatformError::NoBrowserWindow)?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into().ok())
        .ok_or_else(|| PlatformError::NoCanvas(CANVAS_ID.to_string()))?;

    // Pointer positions are CSS pixels; the backing store is scaled by dpr
    let ((width, height), viewport) = canvas_sizes(
        canvas.client_width(),
        canvas.client_height(),
        window.device_pixel_ratio(),
    );
    canvas.set_width(width);
    canvas.set_height(height);

    let boundary = Boundary::centered(viewport.0 as u32, viewport.1 as u32, settings.circle_radius);

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
        ..Default::default()
    });
    let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await?;
    log::info!("Using adapter: {:?}", adapter.get_info().name);

    let renderer = LineRenderer::new(surface, &adapter, (width, height), viewport).await?;

    let seed = super::time_seed();
    super::log_startup(&settings, &boundary, seed);

    let delay_ms = settings.frame_delay_ms.min(i32::MAX as u64) as i32;
    let app = Rc::new(RefCell::new(WebApp {
        state: SimState::new(settings, boundary, seed),
        renderer: Some(renderer),
        pending: Vec::new(),
        delay_ms,
    }));

    setup_input_handlers(&window, &canvas, app.clone());
    schedule_frame(app, 0);

    log::info!("Ray Bounce running");
    Ok(())
}

fn push_event(app: &Rc<RefCell<WebApp>>, event: InputEvent) {
    app.borrow_mut().pending.push(event);
}

fn setup_input_handlers(window: &web_sys::Window, canvas: &HtmlCanvasElement, app: Rc<RefCell<WebApp>>) {
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let pos = DVec2::new(event.offset_x() as f64, event.offset_y() as f64);
            push_event(
                &app,
                InputEvent::PointerDown {
                    button: button_from_index(event.button()),
                    pos,
                },
            );
        });
        let _ = canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // On the window so a release outside the canvas still ends the drag
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            push_event(
                &app,
                InputEvent::PointerUp {
                    button: button_from_index(event.button()),
                },
            );
        });
        let _ = window.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let pos = DVec2::new(event.offset_x() as f64, event.offset_y() as f64);
            push_event(&app, InputEvent::PointerMoved { pos });
        });
        let _ = canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Right click clears; keep the browser menu out of the way
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            event.prevent_default();
        });
        let _ = canvas.add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Backing store and viewport follow the CSS size; the boundary stays put
    {
        let app = app.clone();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let ((width, height), viewport) = canvas_sizes(
                canvas.client_width(),
                canvas.client_height(),
                window.device_pixel_ratio(),
            );
            canvas.set_width(width);
            canvas.set_height(height);
            if let Some(renderer) = app.borrow_mut().renderer.as_mut() {
                renderer.resize((width, height), viewport);
                log::debug!("Canvas resized to {}x{}", width, height);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PageTransitionEvent| {
            if let Some(quit) = pagehide_event(event.persisted()) {
                push_event(&app, quit);
            }
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn schedule_frame(app: Rc<RefCell<WebApp>>, delay_ms: i32) {
    let Some(window) = web_sys::window() else {
        log::error!("Browser window gone, stopping");
        return;
    };
    let closure = Closure::once(move || run_frame(app));
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(closure.as_ref().unchecked_ref(), delay_ms)
    {
        log::error!("Failed to schedule frame: {:?}", e);
        return;
    }
    closure.forget();
}

fn run_frame(app: Rc<RefCell<WebApp>>) {
    let delay_ms = {
        let mut guard = app.borrow_mut();
        let WebApp {
            state,
            renderer,
            pending,
            delay_ms,
        } = &mut *guard;

        let Some(active) = renderer.as_mut() else {
            return;
        };

        let events = std::mem::take(pending);
        if frame(state, events, active) == FrameOutcome::Quit {
            log::info!("Quit requested, releasing GPU resources");
            *renderer = None;
            return;
        }
        *delay_ms
    };

    schedule_frame(app, delay_ms);
}
