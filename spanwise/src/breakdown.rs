//! Duration breakdown
//!
//! Splits a millisecond total into whole years, months, days, hours, minutes,
//! seconds and leftover milliseconds using the fixed sizes from
//! [`crate::time`], largest unit first.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::time::{
    MILLISECONDS_IN_DAY, MILLISECONDS_IN_HOUR, MILLISECONDS_IN_MINUTE, MILLISECONDS_IN_MONTH,
    MILLISECONDS_IN_SECOND, MILLISECONDS_IN_YEAR,
};

/// A duration split into calendar-like components
///
/// `Display` renders the non-zero components from years down to seconds,
/// e.g. `"2 years 1 day 3 hours"`. Milliseconds are never rendered.
///
/// Only `years` is unbounded; every smaller component stays below the next
/// unit up, so it fits in a `u64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Breakdown {
    pub years: u128,
    pub months: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub milliseconds: u64,
}

impl Breakdown {
    /// Decompose a millisecond total
    #[must_use]
    pub fn from_milliseconds(total: u128) -> Self {
        let year = u128::from(MILLISECONDS_IN_YEAR);
        let years = total / year;
        // Below one year, so it fits
        let rest = (total % year) as u64;
        let (months, rest) = split(rest, MILLISECONDS_IN_MONTH);
        let (days, rest) = split(rest, MILLISECONDS_IN_DAY);
        let (hours, rest) = split(rest, MILLISECONDS_IN_HOUR);
        let (minutes, rest) = split(rest, MILLISECONDS_IN_MINUTE);
        let (seconds, milliseconds) = split(rest, MILLISECONDS_IN_SECOND);

        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
            milliseconds,
        }
    }

    /// Reassemble the millisecond total
    ///
    /// Saturates at `u128::MAX` for breakdowns that were not produced by
    /// [`Breakdown::from_milliseconds`].
    #[must_use]
    pub fn total_milliseconds(&self) -> u128 {
        [
            (self.years, MILLISECONDS_IN_YEAR),
            (u128::from(self.months), MILLISECONDS_IN_MONTH),
            (u128::from(self.days), MILLISECONDS_IN_DAY),
            (u128::from(self.hours), MILLISECONDS_IN_HOUR),
            (u128::from(self.minutes), MILLISECONDS_IN_MINUTE),
            (u128::from(self.seconds), MILLISECONDS_IN_SECOND),
            (u128::from(self.milliseconds), 1),
        ]
        .iter()
        .fold(0u128, |acc, (count, size)| {
            acc.saturating_add(count.saturating_mul(u128::from(*size)))
        })
    }

    /// True when every component, milliseconds included, is zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Displayed components in order, paired with their singular label
    #[must_use]
    pub fn fields(&self) -> [(&'static str, u128); 6] {
        [
            ("year", self.years),
            ("month", u128::from(self.months)),
            ("day", u128::from(self.days)),
            ("hour", u128::from(self.hours)),
            ("minute", u128::from(self.minutes)),
            ("second", u128::from(self.seconds)),
        ]
    }
}

/// Floor division and remainder
fn split(value: u64, size: u64) -> (u64, u64) {
    (value / size, value % size)
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (label, value) in self.fields() {
            if value == 0 {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            let plural = if value > 1 { "s" } else { "" };
            write!(f, "{} {}{}", value, label, plural)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::MILLISECONDS_IN_WEEK;

    fn from_ms(total: u64) -> Breakdown {
        Breakdown::from_milliseconds(u128::from(total))
    }

    #[test]
    fn test_two_years() {
        let b = from_ms(730 * MILLISECONDS_IN_DAY);
        assert_eq!(
            b,
            Breakdown {
                years: 2,
                ..Breakdown::default()
            }
        );
        assert_eq!(b.to_string(), "2 years");
    }

    #[test]
    fn test_all_components() {
        let total = MILLISECONDS_IN_YEAR
            + 2 * MILLISECONDS_IN_MONTH
            + 3 * MILLISECONDS_IN_DAY
            + 4 * MILLISECONDS_IN_HOUR
            + 5 * MILLISECONDS_IN_MINUTE
            + 6 * MILLISECONDS_IN_SECOND
            + 7;
        let b = from_ms(total);
        assert_eq!(b.years, 1);
        assert_eq!(b.months, 2);
        assert_eq!(b.days, 3);
        assert_eq!(b.hours, 4);
        assert_eq!(b.minutes, 5);
        assert_eq!(b.seconds, 6);
        assert_eq!(b.milliseconds, 7);
        assert_eq!(b.total_milliseconds(), u128::from(total));
        assert_eq!(
            b.to_string(),
            "1 year 2 months 3 days 4 hours 5 minutes 6 seconds"
        );
    }

    #[test]
    fn test_week_is_seven_days() {
        let b = from_ms(MILLISECONDS_IN_WEEK);
        assert_eq!(b.days, 7);
        assert_eq!(b.to_string(), "7 days");
    }

    #[test]
    fn test_skips_zero_fields() {
        let b = from_ms(MILLISECONDS_IN_YEAR + MILLISECONDS_IN_HOUR);
        assert_eq!(b.to_string(), "1 year 1 hour");
    }

    #[test]
    fn test_milliseconds_not_displayed() {
        let b = Breakdown::from_milliseconds(1_500);
        assert_eq!(b.seconds, 1);
        assert_eq!(b.milliseconds, 500);
        assert_eq!(b.to_string(), "1 second");

        let b = Breakdown::from_milliseconds(999);
        assert_eq!(b.milliseconds, 999);
        assert!(!b.is_zero());
        assert_eq!(b.to_string(), "");
    }

    #[test]
    fn test_zero() {
        let b = Breakdown::from_milliseconds(0);
        assert!(b.is_zero());
        assert_eq!(b.to_string(), "");
        assert_eq!(b.total_milliseconds(), 0);
    }

    #[test]
    fn test_large_total() {
        let b = Breakdown::from_milliseconds(273_452_400_000);
        assert_eq!(b.to_string(), "8 years 8 months 4 days 23 hours");
        assert_eq!(b.total_milliseconds(), 273_452_400_000);
    }

    #[test]
    fn test_years_past_u64_total() {
        let total = u128::from(u64::MAX) + 1;
        let b = Breakdown::from_milliseconds(total);
        assert_eq!(b.years, 584_942_417);
        assert_eq!(b.total_milliseconds(), total);
    }

    #[test]
    fn test_max_roundtrip() {
        let b = Breakdown::from_milliseconds(u128::MAX);
        assert_eq!(b.total_milliseconds(), u128::MAX);
    }

    #[test]
    fn test_serialize() {
        let b = from_ms(MILLISECONDS_IN_DAY + 1);
        let json = serde_json::to_value(b).unwrap();
        assert_eq!(json["days"], 1);
        assert_eq!(json["milliseconds"], 1);
        assert_eq!(json["years"], 0);
    }
}
