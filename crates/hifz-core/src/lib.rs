//! # hifz-core - Core Domain Types
//!
//! Foundation crate for the hifz frontend. Provides the wire types of the
//! sourate pages endpoint, the cascading-select state machine, and the small
//! pure policies behind form submission and progress-bar initialization.
//!
//! This crate has no DOM access and no wasm dependency -- it only depends on
//! external crates (serde, serde_json, thiserror, tracing) and is tested
//! natively. The browser adapter lives in `hifz-web`.
//!
//! ## Public API
//!
//! ### Cascade State Machine (`cascade`, `message`, `update`)
//! - [`CascadeState`] - Phase, option list, and load generation of a bound
//!   page-select pair (Model in the TEA pattern)
//! - [`CascadeMsg`] - Messages fed by the adapter (sourate changes, load
//!   settlements)
//! - [`Command`] - Effects requested back from the adapter (page fetches)
//! - [`update()`] - The transition function
//!
//! ### Wire Types (`pages`)
//! - [`PageOption`] - One selectable page, `[value, label]` on the wire
//! - [`parse_pages_response()`] - Decode the `{pages}` / `{error}` envelope
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Crate-level error enum
//! - [`LoadError`] - Clone-able outcome of a page load
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ### Policies (`submit`, `progress`)
//! - [`reenable_on_submit()`] - Whether a disabled select should be
//!   re-enabled just before its form submits
//! - [`parse_progress_attrs()`] - Numeric parsing for dynamic progress bars

pub mod cascade;
pub mod error;
pub mod message;
pub mod pages;
pub mod progress;
pub mod submit;
pub mod update;

/// Prelude for common imports used throughout the hifz crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use cascade::{
    CascadePhase, CascadeState, PLACEHOLDER_AWAITING_SOURATE, PLACEHOLDER_LOADING,
    PLACEHOLDER_LOAD_ERROR, PLACEHOLDER_NO_PAGES,
};
pub use error::{Error, LoadError, Result};
pub use message::{CascadeMsg, Command};
pub use pages::{parse_pages_response, PageOption};
pub use progress::{parse_progress_attrs, ProgressAttrs};
pub use submit::reenable_on_submit;
pub use update::update;
