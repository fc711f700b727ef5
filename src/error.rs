//! Error types for platform startup.
//!
//! Every variant is fatal: the binary logs it and exits.

use std::fmt;

/// Errors that can occur while creating the window, canvas or GPU context.
#[derive(Debug)]
pub enum PlatformError {
    /// The browser window or document is unavailable.
    NoBrowserWindow,
    /// No `<canvas id="...">` element to draw on.
    NoCanvas(String),
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter(wgpu::RequestAdapterError),
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
    /// The surface reports no usable texture format.
    NoSurfaceFormat,
    /// Failed to create or run the native event loop.
    #[cfg(not(target_arch = "wasm32"))]
    EventLoop(winit::error::EventLoopError),
    /// Failed to open the native window.
    #[cfg(not(target_arch = "wasm32"))]
    WindowCreation(winit::error::OsError),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::NoBrowserWindow => write!(f, "No browser window or document"),
            PlatformError::NoCanvas(id) => write!(f, "No canvas element with id '{}'", id),
            PlatformError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            PlatformError::NoAdapter(e) => write!(f, "No compatible GPU adapter found: {}", e),
            PlatformError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
            PlatformError::NoSurfaceFormat => write!(f, "Surface has no supported texture format"),
            #[cfg(not(target_arch = "wasm32"))]
            PlatformError::EventLoop(e) => write!(f, "Event loop failed: {}", e),
            #[cfg(not(target_arch = "wasm32"))]
            PlatformError::WindowCreation(e) => write!(f, "Failed to create window: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlatformError::SurfaceCreation(e) => Some(e),
            PlatformError::NoAdapter(e) => Some(e),
            PlatformError::DeviceCreation(e) => Some(e),
            #[cfg(not(target_arch = "wasm32"))]
            PlatformError::EventLoop(e) => Some(e),
            #[cfg(not(target_arch = "wasm32"))]
            PlatformError::WindowCreation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for PlatformError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        PlatformError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestAdapterError> for PlatformError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        PlatformError::NoAdapter(e)
    }
}

impl From<wgpu::RequestDeviceError> for PlatformError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        PlatformError::DeviceCreation(e)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<winit::error::EventLoopError> for PlatformError {
    fn from(e: winit::error::EventLoopError) -> Self {
        PlatformError::EventLoop(e)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<winit::error::OsError> for PlatformError {
    fn from(e: winit::error::OsError) -> Self {
        PlatformError::WindowCreation(e)
    }
}
