//! Wire types for the sourate pages endpoint

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// One selectable page of a sourate.
///
/// The endpoint serves pages as two-element arrays `[value, label]`; the
/// serde bridge below maps that onto named fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct PageOption {
    /// Value submitted with the form.
    pub value: String,
    /// Label shown to the user, e.g. "Page 3".
    pub label: String,
}

impl PageOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl From<(String, String)> for PageOption {
    fn from((value, label): (String, String)) -> Self {
        Self { value, label }
    }
}

impl From<PageOption> for (String, String) {
    fn from(page: PageOption) -> Self {
        (page.value, page.label)
    }
}

/// Response envelope of `GET /api/sourate-pages/`.
#[derive(Debug, Deserialize)]
struct PagesEnvelope {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    pages: Option<Vec<PageOption>>,
}

/// Decode a pages response body.
///
/// A present `error` field wins over `pages`, matching the endpoint's
/// contract. An empty `pages` list is a valid result.
pub fn parse_pages_response(body: &str) -> Result<Vec<PageOption>, LoadError> {
    let envelope: PagesEnvelope =
        serde_json::from_str(body).map_err(|e| LoadError::decode(e.to_string()))?;
    if let Some(message) = envelope.error {
        return Err(LoadError::Api { message });
    }
    envelope
        .pages
        .ok_or_else(|| LoadError::decode("missing `pages` field"))
}
