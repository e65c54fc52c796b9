// Mobile navigation: hamburger toggle plus close-on-navigate for the
// mobile menu links.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::dom;

pub fn wire_menu(document: &Document) -> Result<(), JsValue> {
    let hamburger = match document.get_element_by_id("hamburger") {
        Some(element) => element,
        None => return Ok(()),
    };
    let menu: HtmlElement = match document
        .get_element_by_id("mobileMenu")
        .and_then(|element| element.dyn_into().ok())
    {
        Some(menu) => menu,
        None => return Ok(()),
    };

    {
        let hamburger = hamburger.clone();
        let menu = menu.clone();
        let toggle = Closure::wrap(Box::new(move || {
            // aria-hidden="false" means the menu is currently open
            let open = menu.get_attribute("aria-hidden").as_deref() == Some("false");
            let _ = menu.set_attribute("aria-hidden", if open { "true" } else { "false" });
            let _ = menu
                .style()
                .set_property("display", if open { "none" } else { "flex" });
            let _ = hamburger.class_list().toggle("open");
        }) as Box<dyn FnMut()>);
        hamburger.add_event_listener_with_callback("click", toggle.as_ref().unchecked_ref())?;
        toggle.forget();
    }

    // navigating from the mobile menu closes it
    for link in dom::elements(document, ".mm-link")? {
        let menu = menu.clone();
        let close = Closure::wrap(Box::new(move || {
            let _ = menu.style().set_property("display", "none");
            let _ = menu.set_attribute("aria-hidden", "true");
        }) as Box<dyn FnMut()>);
        link.add_event_listener_with_callback("click", close.as_ref().unchecked_ref())?;
        close.forget();
    }

    Ok(())
}
