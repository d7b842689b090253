//! WebAssembly front end for a personal portfolio page.
//!
//! Pure page logic (the typing cycler, drag/orbit state, scene graph and
//! tessellation) builds on every target so it can be tested on the host.
//! Browser wiring is only compiled for `wasm32`.

pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod lifecycle;
pub mod rig;
pub mod scene;
pub mod snippet;
pub mod theme;
pub mod typing;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod page;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod ticker;

pub use error::SiteError;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = page::init(config::SiteConfig::default()) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}
