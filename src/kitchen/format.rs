//! Display formatting and input parsing
//!
//! Rounding for display happens here, never inside the calculations.

use super::scaler::round_to_hundredths;

/// Parse a user-entered amount.
///
/// Empty, non-numeric or non-finite text gives `None` so the caller can
/// leave the result blank instead of calculating.
pub fn parse_amount(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `"<value to 2 decimals> <unit>"`
pub fn format_amount(value: f64, unit: &str) -> String {
    format!("{:.2} {}", clean_zero(round_to_hundredths(value)), unit)
}

/// Whole grams, e.g. `"180 g"`
pub fn format_grams(grams: f64) -> String {
    format!("{:.0} g", clean_zero(grams.round()))
}

/// Scale factor label, e.g. `"0.50×"`
pub fn format_factor(factor: f64) -> String {
    format!("{:.2}×", clean_zero(round_to_hundredths(factor)))
}

// -0.0 would print as "-0.00"
fn clean_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1.5"), Some(1.5));
        assert_eq!(parse_amount(" -40 "), Some(-40.0));
        assert_eq!(parse_amount("0"), Some(0.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("two"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(236.588, "ml"), "236.59 ml");
        assert_eq!(format_amount(0.0, "C"), "0.00 C");
        assert_eq!(format_amount(1.125, "cups"), "1.13 cups");
        assert_eq!(format_amount(-0.001, "F"), "0.00 F");
    }

    #[test]
    fn test_format_grams() {
        assert_eq!(format_grams(180.0), "180 g");
        assert_eq!(format_grams(75.591), "76 g");
        assert_eq!(format_grams(112.5), "113 g");
    }

    #[test]
    fn test_format_factor() {
        assert_eq!(format_factor(0.5), "0.50×");
        assert_eq!(format_factor(2.0 / 3.0), "0.67×");
    }
}
