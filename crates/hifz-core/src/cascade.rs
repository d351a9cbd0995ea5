//! Cascading select state (Model in the TEA pattern)
//!
//! One [`CascadeState`] is shared by the one or two page selects bound to a
//! sourate select; both always display the same content, so a start and an
//! end page can be picked from the same universe of pages.

use crate::pages::PageOption;

/// Placeholder shown while no sourate is selected.
pub const PLACEHOLDER_AWAITING_SOURATE: &str = "Sélectionnez d'abord une sourate";
/// Placeholder shown while a page list is loading.
pub const PLACEHOLDER_LOADING: &str = "Chargement...";
/// Placeholder shown after a failed page load.
pub const PLACEHOLDER_LOAD_ERROR: &str = "Erreur de chargement";
/// Placeholder shown when a sourate has no pages.
pub const PLACEHOLDER_NO_PAGES: &str = "Aucune page disponible";

/// Lifecycle phase of a bound page-select pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CascadePhase {
    /// No sourate selected yet
    #[default]
    AwaitingSourate,

    /// A page load is in flight
    Loading,

    /// Pages loaded (possibly none)
    Ready,

    /// The last load failed
    Failed,
}

/// State of the page selects bound to one sourate select
#[derive(Debug, Clone, Default)]
pub struct CascadeState {
    pub phase: CascadePhase,
    pub options: Vec<PageOption>,
    /// Load generation. Bumped whenever the expected content changes, so a
    /// settlement carrying an older generation is stale and must be ignored.
    seq: u64,
}

impl CascadeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current load generation.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Arm a new load and return its generation.
    pub(crate) fn begin_load(&mut self) -> u64 {
        self.seq += 1;
        self.phase = CascadePhase::Loading;
        self.options.clear();
        self.seq
    }

    /// Return to the awaiting state. Also bumps the generation: a load still
    /// in flight must not repopulate selects the user just cleared.
    pub(crate) fn reset_awaiting(&mut self) {
        self.seq += 1;
        self.phase = CascadePhase::AwaitingSourate;
        self.options.clear();
    }

    pub(crate) fn finish(&mut self, pages: Vec<PageOption>) {
        self.phase = CascadePhase::Ready;
        self.options = pages;
    }

    pub(crate) fn fail(&mut self) {
        self.phase = CascadePhase::Failed;
        self.options.clear();
    }

    /// Placeholder text to display, if the state calls for one.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self.phase {
            CascadePhase::AwaitingSourate => Some(PLACEHOLDER_AWAITING_SOURATE),
            CascadePhase::Loading => Some(PLACEHOLDER_LOADING),
            CascadePhase::Failed => Some(PLACEHOLDER_LOAD_ERROR),
            CascadePhase::Ready if self.options.is_empty() => Some(PLACEHOLDER_NO_PAGES),
            CascadePhase::Ready => None,
        }
    }

    /// A select is enabled exactly when it holds real page options.
    pub fn disabled(&self) -> bool {
        self.placeholder().is_some()
    }
}
