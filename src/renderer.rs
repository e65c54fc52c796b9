// Renderer for the ambient particle backdrop. Owns the 2d context and the
// field, drives the requestAnimationFrame loop, and keeps the canvas sized
// to the viewport on resize.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::color::Color;
use crate::dom;
use crate::field::ParticleField;

/// Element id the page wiring looks for; absence means the backdrop is a
/// silent no-op.
pub const CANVAS_ID: &str = "particle-canvas";

/// Outer radius of each particle's glow gradient, in pixels.
const GLOW_RADIUS: f64 = 20.0;
/// Inner gradient stop alpha is scaled by `radius / 2` per particle.
const GLOW_ALPHA: f64 = 0.16;
const INNER_GLOW: Color = Color::new(122, 252, 255);
const OUTER_GLOW: Color = Color::new(123, 97, 255);

/// Live animation loop for one canvas. Dropping the handle leaves the loop
/// running (the frame closure keeps itself alive); call [`FieldHandle::stop`]
/// to actually tear it down, or [`FieldHandle::forget`] to commit to the
/// page's lifetime.
pub struct FieldHandle {
    window: Window,
    raf_id: Rc<Cell<Option<i32>>>,
    frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
    resize: Option<Closure<dyn FnMut()>>,
}

impl FieldHandle {
    pub fn is_running(&self) -> bool {
        self.raf_id.get().is_some()
    }

    /// Cancel the pending frame, drop the frame closure, and unhook the
    /// resize listener.
    pub fn stop(&mut self) {
        if let Some(id) = self.raf_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // breaks the closure's self-referential cycle so it can be freed
        self.frame.borrow_mut().take();
        if let Some(resize) = self.resize.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
        }
    }

    /// Leak the loop for the page's lifetime, matching the original site
    /// behavior of never tearing the backdrop down.
    pub fn forget(mut self) {
        if let Some(resize) = self.resize.take() {
            resize.forget();
        }
    }
}

/// Find the backdrop canvas and start the draw loop. Returns `Ok(None)`
/// when the canvas is absent: no draw calls, no listeners.
pub fn start_field(document: &Document, canvas_id: &str) -> Result<Option<FieldHandle>, JsValue> {
    let canvas = match document.get_element_by_id(canvas_id) {
        Some(element) => element,
        None => return Ok(None),
    };
    let canvas: HtmlCanvasElement = match canvas.dyn_into() {
        Ok(canvas) => canvas,
        Err(_) => return Ok(None),
    };
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;

    let (width, height) = dom::viewport_size(&window);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let mut rng = rand::thread_rng();
    let field = Rc::new(RefCell::new(ParticleField::new(width, height, &mut rng)));

    // Resize re-matches the surface and wrap bounds to the viewport. The
    // particle set is left alone; off-screen particles drift back through
    // wraparound.
    let resize = {
        let window = window.clone();
        let canvas = canvas.clone();
        let field = field.clone();
        Closure::wrap(Box::new(move || {
            let (width, height) = dom::viewport_size(&window);
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            field.borrow_mut().resize(width, height);
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;

    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

    {
        let window = window.clone();
        let field = field.clone();
        let raf_id = raf_id.clone();
        let scheduled = frame.clone();
        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
            {
                let mut field = field.borrow_mut();
                field.step();
                if let Err(err) = paint(&ctx, &field) {
                    console::error_1(&err);
                }
            }
            let next = scheduled.borrow();
            let callback = match next.as_ref() {
                Some(callback) => callback,
                None => return,
            };
            match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                Ok(id) => raf_id.set(Some(id)),
                Err(_) => raf_id.set(None),
            }
        }) as Box<dyn FnMut(f64)>));
    }

    let first = window
        .request_animation_frame(frame.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;
    raf_id.set(Some(first));

    Ok(Some(FieldHandle {
        window,
        raf_id,
        frame,
        resize: Some(resize),
    }))
}

/// Clear the surface and draw one glow disc per particle.
fn paint(ctx: &CanvasRenderingContext2d, field: &ParticleField) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, field.width(), field.height());
    for particle in field.particles() {
        let [x, y] = particle.pos;
        ctx.begin_path();
        let gradient = ctx.create_radial_gradient(x, y, 0.0, x, y, GLOW_RADIUS)?;
        let inner_alpha = GLOW_ALPHA * (particle.radius / 2.0);
        gradient.add_color_stop(0.0, &INNER_GLOW.to_css_rgba(inner_alpha))?;
        gradient.add_color_stop(1.0, &OUTER_GLOW.to_css_rgba(0.0))?;
        ctx.set_fill_style(&gradient.into());
        ctx.arc(x, y, particle.radius * 3.0, 0.0, std::f64::consts::PI * 2.0)?;
        ctx.fill();
    }
    Ok(())
}

/// JS-facing wrapper around the backdrop lifecycle, for embedding the
/// renderer outside the default page wiring.
#[wasm_bindgen]
pub struct ParticleBackdrop {
    handle: Option<FieldHandle>,
}

#[wasm_bindgen]
impl ParticleBackdrop {
    /// Mount on the canvas with the given id. A missing canvas yields an
    /// inert backdrop rather than an error.
    pub fn mount(canvas_id: &str) -> Result<ParticleBackdrop, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document on window"))?;
        Ok(ParticleBackdrop {
            handle: start_field(&document, canvas_id)?,
        })
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().map_or(false, FieldHandle::is_running)
    }

    pub fn stop(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.stop();
        }
    }
}
