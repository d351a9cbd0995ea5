//! One-time initialization of the dynamic progress bars

use hifz_core::parse_progress_attrs;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// Set the CSS width and `aria-valuenow` of every `.progress-width-dynamic`
/// element from its `data-width` / `data-value` attributes.
pub fn init(document: &Document) {
    let Ok(bars) = document.query_selector_all(".progress-width-dynamic") else {
        return;
    };
    for index in 0..bars.length() {
        let Some(node) = bars.get(index) else {
            continue;
        };
        let Ok(bar) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        init_bar(&bar);
    }
}

fn init_bar(bar: &HtmlElement) {
    let dataset = bar.dataset();
    let width = dataset.get("width").unwrap_or_default();
    let value = dataset.get("value").unwrap_or_default();
    let Some(attrs) = parse_progress_attrs(&width, &value) else {
        log::warn!("progress bar with unusable data attributes: width={width:?} value={value:?}");
        return;
    };
    let _ = bar
        .style()
        .set_property("width", &format!("{}%", attrs.width_percent));
    let _ = bar.set_attribute("aria-valuenow", &attrs.aria_value.to_string());
}
