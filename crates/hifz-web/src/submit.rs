//! Submit normalizer
//!
//! Re-enables disabled selects that hold a value immediately before their
//! form submits, so the browser includes them in the submitted data.

use hifz_core::reenable_on_submit;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement, HtmlSelectElement};

/// Attach the normalizer to every form present in the document.
pub fn install(document: &Document) {
    let Ok(forms) = document.query_selector_all("form") else {
        return;
    };
    for index in 0..forms.length() {
        let Some(node) = forms.get(index) else {
            continue;
        };
        let Ok(form) = node.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        attach(&form);
    }
}

fn attach(form: &HtmlFormElement) {
    let handler = {
        let form = form.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_event| {
            normalize(&form);
        })
    };
    let _ = form.add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref());
    handler.forget();
}

/// Re-enable every disabled select of `form` that holds a selected value.
/// Valueless selects stay disabled and are omitted from the payload.
pub fn normalize(form: &HtmlFormElement) {
    let Ok(selects) = form.query_selector_all("select[disabled]") else {
        return;
    };
    for index in 0..selects.length() {
        let Some(node) = selects.get(index) else {
            continue;
        };
        let Ok(select) = node.dyn_into::<HtmlSelectElement>() else {
            continue;
        };
        if reenable_on_submit(select.disabled(), &select.value()) {
            select.set_disabled(false);
        }
    }
}
