//! Page list retrieval over the browser fetch API

use hifz_core::{parse_pages_response, LoadError, PageOption};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::wiring::PAGES_ENDPOINT;

/// Fetch the page list for a sourate.
///
/// Transport failures, non-success statuses and undecodable bodies all
/// surface as [`LoadError`]. No retry, no timeout; superseded requests are
/// not aborted -- the state machine discards their settlements.
pub async fn fetch_pages(sourate_index: &str) -> Result<Vec<PageOption>, LoadError> {
    let query = String::from(js_sys::encode_uri_component(sourate_index));
    let url = format!("{PAGES_ENDPOINT}?sourate_index={query}");

    let window = web_sys::window().ok_or_else(|| LoadError::network("no window"))?;
    let response = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(|e| LoadError::network(js_message(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| LoadError::network("fetch did not yield a response"))?;

    if !response.ok() {
        return Err(LoadError::Status {
            status: response.status(),
        });
    }

    let body = response.text().map_err(|e| LoadError::network(js_message(&e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| LoadError::network(js_message(&e)))?;
    let body = body.as_string().unwrap_or_default();

    parse_pages_response(&body)
}

/// Best-effort human-readable message out of a thrown JS value.
fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
