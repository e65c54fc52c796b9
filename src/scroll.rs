// Smooth scrolling for same-page anchor links.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom;

pub fn wire_anchor_links(document: &Document) -> Result<(), JsValue> {
    for link in dom::elements(document, r#"a[href^="#"]"#)? {
        let document = document.clone();
        let anchor = link.clone();
        let click = Closure::wrap(Box::new(move |event: Event| {
            let href = match anchor.get_attribute("href") {
                Some(href) => href,
                None => return,
            };
            // a bare "#" link keeps its default behavior
            if href.len() <= 1 {
                return;
            }
            event.prevent_default();
            if let Ok(Some(section)) = document.query_selector(&href) {
                let mut options = ScrollIntoViewOptions::new();
                options
                    .behavior(ScrollBehavior::Smooth)
                    .block(ScrollLogicalPosition::Start);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }) as Box<dyn FnMut(Event)>);
        link.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        click.forget();
    }
    Ok(())
}
