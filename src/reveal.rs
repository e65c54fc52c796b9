// One-shot reveal transitions for elements scrolling into view.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::dom;

const REVEAL_THRESHOLD: f64 = 0.15;

/// Observe every `.reveal` and `.glass` element; the first time one crosses
/// the threshold it gains the `show` class and is dropped from the observer.
pub fn observe_reveals(document: &Document) -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("show");
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    for element in dom::elements(document, ".reveal")? {
        observer.observe(&element);
    }
    // stat cards and other glass panels reveal the same way
    for element in dom::elements(document, ".glass")? {
        observer.observe(&element);
    }

    callback.forget();
    Ok(())
}

/// Mark every reveal target shown once the window finishes loading.
pub fn reveal_on_load(window: &Window, document: &Document) -> Result<(), JsValue> {
    let document = document.clone();
    let on_load = Closure::wrap(Box::new(move || {
        if let Ok(elements) = dom::elements(&document, ".reveal, .glass") {
            for element in elements {
                let _ = element.class_list().add_1("show");
            }
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
    on_load.forget();
    Ok(())
}
