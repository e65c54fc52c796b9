// Demo contact form: client-side validation and an acknowledgement alert,
// no backend behind it.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, FormData, HtmlFormElement};

pub fn wire_form(document: &Document) -> Result<(), JsValue> {
    let form: HtmlFormElement = match document
        .get_element_by_id("contactForm")
        .and_then(|element| element.dyn_into().ok())
    {
        Some(form) => form,
        None => return Ok(()),
    };

    let handler_form = form.clone();
    let submit = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        let window = match web_sys::window() {
            Some(window) => window,
            None => return,
        };
        let fields = match FormData::new_with_form(&handler_form) {
            Ok(fields) => fields,
            Err(_) => return,
        };

        let name = text_field(&fields, "name");
        let email = text_field(&fields, "email");
        let message = text_field(&fields, "message");
        if name.is_empty() || email.is_empty() || message.is_empty() {
            let _ = window.alert_with_message("Please fill all fields before sending.");
            return;
        }

        let _ = window.alert_with_message(
            "Thanks — your message has been received (demo). \
             Replace this with your backend or Formspree URL.",
        );
        handler_form.reset();
    }) as Box<dyn FnMut(Event)>);
    form.add_event_listener_with_callback("submit", submit.as_ref().unchecked_ref())?;
    submit.forget();
    Ok(())
}

fn text_field(fields: &FormData, name: &str) -> String {
    fields
        .get(name)
        .as_string()
        .unwrap_or_default()
        .trim()
        .to_owned()
}
