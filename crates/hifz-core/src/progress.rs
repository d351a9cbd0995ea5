//! Attribute parsing for the dynamic progress bars
//!
//! The templates render `.progress-width-dynamic` elements carrying
//! `data-width` and `data-value`; the adapter turns those into a CSS width
//! and an `aria-valuenow` attribute.

/// Parsed data attributes of a progress bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressAttrs {
    /// Bar width in percent.
    pub width_percent: f64,
    /// Integer value for `aria-valuenow`.
    pub aria_value: i64,
}

/// Parse the `data-width` / `data-value` attributes of a progress bar.
/// Returns `None` when either attribute is missing or non-numeric.
pub fn parse_progress_attrs(width: &str, value: &str) -> Option<ProgressAttrs> {
    let width_percent: f64 = width.trim().parse().ok()?;
    let value: f64 = value.trim().parse().ok()?;
    if !width_percent.is_finite() || !value.is_finite() {
        return None;
    }
    Some(ProgressAttrs {
        width_percent,
        // aria-valuenow takes an integer; fractional values are truncated.
        aria_value: value.trunc() as i64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_attributes() {
        let attrs = parse_progress_attrs("75", "75").unwrap();
        assert_eq!(attrs.width_percent, 75.0);
        assert_eq!(attrs.aria_value, 75);
    }

    #[test]
    fn test_fractional_value_is_truncated() {
        let attrs = parse_progress_attrs("62.5", "62.5").unwrap();
        assert_eq!(attrs.width_percent, 62.5);
        assert_eq!(attrs.aria_value, 62);
    }

    #[test]
    fn test_surrounding_whitespace_is_accepted() {
        let attrs = parse_progress_attrs(" 40 ", " 40 ").unwrap();
        assert_eq!(attrs.width_percent, 40.0);
    }

    #[test]
    fn test_non_numeric_attributes_are_rejected() {
        assert!(parse_progress_attrs("", "10").is_none());
        assert!(parse_progress_attrs("10", "").is_none());
        assert!(parse_progress_attrs("wide", "10").is_none());
        assert!(parse_progress_attrs("10", "NaN").is_none());
    }
}
