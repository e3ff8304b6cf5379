//! Numeric helpers for credit amounts and dice results.

/// Rounds a credit amount to whole cents.
///
/// Unit prices such as 10.6 are not exactly representable, so every balance written to the
/// wallet goes through this to keep stored values stable across many sales.
pub fn round_credits(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats an evaluated dice value, dropping the fraction when it is whole.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_credits_to_cents() {
        assert_eq!(round_credits(10.6 * 3.0), 31.8);
        assert_eq!(round_credits(60.6 + 10.6), 71.2);
    }

    #[test]
    fn formats_whole_and_fractional_values() {
        assert_eq!(format_number(6.0), "6");
        assert_eq!(format_number(-4.0), "-4");
        assert_eq!(format_number(3.5), "3.50");
        assert_eq!(format_number(1.0 / 3.0), "0.33");
    }
}
