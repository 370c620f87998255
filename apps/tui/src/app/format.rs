//! Count formatting for the status cards.
//!
//! Narrow viewports get abbreviated ("pretty") values, wide viewports the
//! literal integer. The cutoff is the original dashboard's 770-unit
//! breakpoint.

pub const COMPACT_WIDTH_THRESHOLD: u16 = 770;

/// Abbreviates a count to one decimal place: 1_234_567 -> "1.2M".
///
/// Truncates rather than rounds so a value never displays as the next
/// bucket up (999_999 stays "999.9K").
pub fn pretty_count(value: u64) -> String {
    const UNITS: [(u64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

    for (divisor, suffix) in UNITS {
        if value >= divisor {
            #[allow(clippy::cast_precision_loss)]
            let scaled = ((value as f64 / divisor as f64) * 10.0).floor() / 10.0;
            if scaled.fract().abs() < f64::EPSILON {
                return format!("{scaled:.0}{suffix}");
            }
            return format!("{scaled:.1}{suffix}");
        }
    }

    value.to_string()
}

/// Formats a card value for the given viewport width.
pub fn format_count(value: u64, viewport_width: u16) -> String {
    if viewport_width < COMPACT_WIDTH_THRESHOLD {
        pretty_count(value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewport_abbreviates() {
        assert_eq!(format_count(1_234_567, 100), "1.2M");
        assert_eq!(format_count(1_234_567, COMPACT_WIDTH_THRESHOLD - 1), "1.2M");
    }

    #[test]
    fn wide_viewport_renders_literal_integer() {
        assert_eq!(format_count(1_234_567, COMPACT_WIDTH_THRESHOLD), "1234567");
        assert_eq!(format_count(1_234_567, 1000), "1234567");
    }

    #[test]
    fn pretty_count_buckets() {
        assert_eq!(pretty_count(0), "0");
        assert_eq!(pretty_count(999), "999");
        assert_eq!(pretty_count(1_000), "1K");
        assert_eq!(pretty_count(1_500), "1.5K");
        assert_eq!(pretty_count(999_999), "999.9K");
        assert_eq!(pretty_count(1_000_000), "1M");
        assert_eq!(pretty_count(32_456_789), "32.4M");
        assert_eq!(pretty_count(2_100_000_000), "2.1B");
    }
}
