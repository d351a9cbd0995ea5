//! Fixed wiring between the server-rendered templates and the controllers
//!
//! Element ids and the endpoint path are owned by the template layer; they
//! are data here, not behavior.

/// Endpoint serving the page list of a sourate.
pub const PAGES_ENDPOINT: &str = "/api/sourate-pages/";

/// One sourate select bound to one or two page selects.
#[derive(Debug, Clone, Copy)]
pub struct SelectBinding {
    /// Id of the sourate select.
    pub sourate: &'static str,
    /// Id of the first (or only) page select.
    pub first_page: &'static str,
    /// Id of the second page select, for start/end ranges.
    pub second_page: Option<&'static str>,
}

/// The three form variants shipped by the templates.
pub const SELECT_BINDINGS: &[SelectBinding] = &[
    // Memorization form: start and end page
    SelectBinding {
        sourate: "sourate-select",
        first_page: "debut-page-select",
        second_page: Some("fin-page-select"),
    },
    // Listening form: start and end page
    SelectBinding {
        sourate: "sourate-select-ecoute",
        first_page: "debut-page-select-ecoute",
        second_page: Some("fin-page-select-ecoute"),
    },
    // Repetition form: a single page
    SelectBinding {
        sourate: "sourate-select-repetition",
        first_page: "page-select-repetition",
        second_page: None,
    },
];
