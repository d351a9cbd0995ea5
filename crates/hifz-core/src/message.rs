//! Message and effect types for the cascade state machine (TEA pattern)

use crate::error::LoadError;
use crate::pages::PageOption;

/// All messages handled by the cascade state machine
#[derive(Debug, Clone)]
pub enum CascadeMsg {
    /// The sourate select changed value, or its initial value was observed
    /// at bind time. An empty value means no sourate is selected.
    SourateChanged { value: String },

    /// A page load settled. `seq` is the generation returned by
    /// [`Command::FetchPages`]; settlements from superseded loads carry an
    /// older generation and are discarded.
    PagesLoaded {
        seq: u64,
        result: Result<Vec<PageOption>, LoadError>,
    },
}

/// Effects requested from the adapter after an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch the page list for a sourate. The settlement must be fed back
    /// as [`CascadeMsg::PagesLoaded`] with the same `seq`.
    FetchPages { sourate_index: String, seq: u64 },
}
