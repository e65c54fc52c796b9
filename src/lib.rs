//! Interaction layer for the landing page: mobile nav toggle, smooth-scroll
//! anchors, scroll reveals, animated counters, a demo contact form, and the
//! canvas particle backdrop. Everything is wired from the wasm start hook;
//! any element that is missing from the page is a silent no-op.
//!
//! The particle core (`particle`, `field`, `color`) is plain Rust with no
//! DOM types, so it builds and unit-tests natively; the browser-facing
//! modules are wasm-only.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod utils;

pub mod color;
pub mod counters;
pub mod field;
pub mod particle;

#[cfg(target_arch = "wasm32")]
pub mod contact;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod nav;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
#[cfg(target_arch = "wasm32")]
pub mod reveal;
#[cfg(target_arch = "wasm32")]
pub mod scroll;

pub use crate::field::ParticleField;
pub use crate::particle::Particle;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

/// Entry point: wire every page interaction. Runs once when the module is
/// instantiated.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    utils::set_panic_hook();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document on window"))?;

    nav::wire_menu(&document)?;
    scroll::wire_anchor_links(&document)?;
    reveal::observe_reveals(&document)?;
    reveal::reveal_on_load(&window, &document)?;
    counters::wire_stats(&document)?;
    contact::wire_form(&document)?;

    if let Some(handle) = renderer::start_field(&document, renderer::CANVAS_ID)? {
        // the backdrop runs for the page's lifetime
        handle.forget();
        console_log!("particle backdrop running on #{}", renderer::CANVAS_ID);
    }

    Ok(())
}
