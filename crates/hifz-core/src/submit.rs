//! Submit-time normalization policy for disabled selects
//!
//! Disabled controls are excluded from standard form submission. A page
//! select can be left disabled by the loading lifecycle after the user
//! already picked a value; that value must still reach the server.

/// Whether a disabled select should be re-enabled just before its form
/// submits: only when it currently holds a selected value. A select without
/// a value stays disabled and is omitted from the payload.
pub fn reenable_on_submit(disabled: bool, value: &str) -> bool {
    disabled && !value.is_empty()
}
