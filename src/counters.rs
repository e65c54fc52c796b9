// Animated statistics counters. The stats section starts its counters the
// first time it scrolls into view; cards without a real `data-target`
// render the site's `+` placeholder instead.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

#[cfg(target_arch = "wasm32")]
use crate::dom;

/// Full counter sweep from zero to target.
pub const COUNT_DURATION_MS: f64 = 1600.0;

#[cfg(target_arch = "wasm32")]
const STATS_THRESHOLD: f64 = 0.2;

/// Render a count with thousands separators, e.g. `1234567` to `1,234,567`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Watch `#stats`; on first intersection, kick off every counter and
/// disconnect the observer.
#[cfg(target_arch = "wasm32")]
pub fn wire_stats(document: &Document) -> Result<(), JsValue> {
    let stats = match document.get_element_by_id("stats") {
        Some(element) => element,
        None => return Ok(()),
    };

    let doc = document.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let first: IntersectionObserverEntry = match entries.get(0).dyn_into() {
                Ok(entry) => entry,
                Err(_) => return,
            };
            if first.is_intersecting() {
                if let Err(err) = animate_counters(&doc) {
                    web_sys::console::error_1(&err);
                }
                observer.disconnect();
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from(STATS_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(&stats);
    callback.forget();
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn animate_counters(document: &Document) -> Result<(), JsValue> {
    for counter in dom::elements(document, ".stat-card .count")? {
        let target = counter
            .closest(".stat-card")?
            .and_then(|card| card.get_attribute("data-target"))
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(0);

        // the original site shows a bare "+" where no exact number exists
        if target == 0 {
            counter.set_text_content(Some("+"));
            continue;
        }
        animate_counter(counter, target)?;
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn animate_counter(counter: Element, target: u64) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let start = window
        .performance()
        .map(|performance| performance.now())
        .unwrap_or(0.0);

    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let scheduled = frame.clone();
    let raf_window = window.clone();
    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let progress = ((timestamp - start) / COUNT_DURATION_MS).min(1.0);
        let value = (progress * target as f64).floor() as u64;
        counter.set_text_content(Some(&format_count(value)));
        if progress < 1.0 {
            if let Some(callback) = scheduled.borrow().as_ref() {
                let _ = raf_window.request_animation_frame(callback.as_ref().unchecked_ref());
            }
        }
        // the finished closure stays allocated with the page, as the
        // original inline step function did
    }) as Box<dyn FnMut(f64)>));

    window.request_animation_frame(frame.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(65_536), "65,536");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
