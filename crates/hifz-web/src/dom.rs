//! Thin helpers over repetitive web-sys DOM operations

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlOptionElement, HtmlSelectElement};

/// Fetch an element by id and cast it to a concrete element type. `None`
/// when the element is missing or of a different type.
pub fn typed_element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<T>().ok())
}

/// Remove every option of a select.
pub fn clear_options(select: &HtmlSelectElement) {
    select.set_inner_html("");
}

/// Append one `<option>` with the given value and label.
pub fn append_option(select: &HtmlSelectElement, value: &str, label: &str) {
    if let Ok(option) = HtmlOptionElement::new_with_text_and_value(label, value) {
        let _ = select.append_child(&option);
    }
}

/// Replace a select's content with a single disabled, valueless placeholder
/// option.
pub fn set_placeholder(select: &HtmlSelectElement, text: &str) {
    clear_options(select);
    if let Ok(option) = HtmlOptionElement::new_with_text_and_value(text, "") {
        option.set_disabled(true);
        option.set_selected(true);
        let _ = select.append_child(&option);
    }
}
