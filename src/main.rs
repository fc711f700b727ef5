//! Ray Bounce entry point
//!
//! Sets up logging for the target and hands off to the platform loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use raybounce::Settings;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    log::info!("Ray Bounce starting...");

    if let Err(e) = raybounce::platform::web::run(Settings::default()).await {
        log::error!("Startup failed: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Ray Bounce (native) starting...");

    if let Err(e) = raybounce::platform::native::run(Settings::default()) {
        log::error!("Fatal: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
