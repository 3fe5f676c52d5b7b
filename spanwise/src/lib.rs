//! Spanwise
//!
//! Turns elapsed durations into calendar-like breakdowns ("2 years 9 months")
//! using fixed unit sizes: a month is 30 days and a year is 365 days.

mod breakdown;
mod error;
mod error_kind;
mod humanize;
pub mod primitives;
pub mod time;
mod unit;

pub use breakdown::Breakdown;
pub use error::{
    ERR_INVALID_DURATION, ERR_MISSING_UNIT, ERR_NON_POSITIVE_DURATION, ERR_UNSUPPORTED_UNIT,
    HumanizeError,
};
pub use error_kind::ErrorKind;
pub use humanize::{
    DEFAULT_UNIT, Humanized, humanize, humanize_breakdown, humanize_ms, humanize_value,
    humanize_with, to_milliseconds,
};
pub use unit::{Unit, normalize_unit};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_unit_is_milliseconds() {
        assert_eq!(normalize_unit(DEFAULT_UNIT), Ok(Unit::Millisecond));
    }

    #[test]
    fn test_units_sorted_by_size() {
        let sizes: Vec<u64> = Unit::ALL.iter().map(Unit::milliseconds).collect();
        let mut sorted = sizes.clone();
        sorted.sort();
        assert_eq!(sizes, sorted);
    }

    #[test]
    fn test_units_no_duplicate_names() {
        let mut seen = std::collections::HashSet::new();
        for unit in Unit::ALL {
            assert!(seen.insert(unit.name()), "Duplicate unit: {}", unit);
            assert!(seen.insert(unit.short_code()), "Duplicate code: {}", unit);
        }
    }
}
