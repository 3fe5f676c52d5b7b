//! Duration humanization
//!
//! Converts a numeric duration plus a unit designator into a [`Breakdown`]
//! and its display string.
//!
//! # Examples
//!
//! ```
//! use spanwise::{humanize, humanize_breakdown};
//!
//! assert_eq!(humanize(730.0, "days").unwrap(), "2 years");
//! assert_eq!(humanize(12.0, "M").unwrap(), "1 year");
//!
//! let breakdown = humanize_breakdown(90.0, "minutes").unwrap();
//! assert_eq!(breakdown.hours, 1);
//! assert_eq!(breakdown.minutes, 30);
//! assert_eq!(breakdown.to_string(), "1 hour 30 minutes");
//! ```

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::breakdown::Breakdown;
use crate::error::HumanizeError;
use crate::primitives::{is_numeric, normalize_bool};
use crate::time::{MILLISECONDS_IN_MONTH, MILLISECONDS_IN_YEAR};
use crate::unit::{Unit, normalize_unit};

/// Unit assumed when the caller does not give one
pub const DEFAULT_UNIT: &str = "ms";

/// Inputs that map to a rounder equivalent instead of the generic conversion
///
/// Exact matches only. `24 months` is not special and stays `1 year 11 months
/// 25 days`.
const SPECIAL_CASES: &[(f64, Unit, u64)] = &[
    (12.0, Unit::Month, MILLISECONDS_IN_YEAR),
    (52.0, Unit::Week, MILLISECONDS_IN_YEAR),
    (366.0, Unit::Day, MILLISECONDS_IN_YEAR),
    (31.0, Unit::Day, MILLISECONDS_IN_MONTH),
];

/// Result of [`humanize_with`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Humanized {
    /// Display string
    Text(String),
    /// Structured breakdown
    Object(Breakdown),
}

impl Humanized {
    /// The display string, rendering the breakdown if needed
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Object(breakdown) => breakdown.to_string(),
        }
    }

    /// The breakdown, if this result was requested as an object
    #[must_use]
    pub fn breakdown(&self) -> Option<&Breakdown> {
        match self {
            Self::Text(_) => None,
            Self::Object(breakdown) => Some(breakdown),
        }
    }
}

impl fmt::Display for Humanized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Object(breakdown) => fmt::Display::fmt(breakdown, f),
        }
    }
}

/// Convert a duration in `unit` to whole milliseconds
///
/// Applies the special cases (`12 M`, `52 w`, `366 d` are one year, `31 d` is
/// one month) before the generic `duration * unit size` conversion.
/// Sub-millisecond fractions are truncated. Totals are carried in `u128`, so
/// only durations past roughly 10^28 years saturate.
#[must_use]
pub fn to_milliseconds(duration: f64, unit: Unit) -> u128 {
    if let Some((_, _, ms)) = SPECIAL_CASES
        .iter()
        .find(|(value, special, _)| *value == duration && *special == unit)
    {
        return u128::from(*ms);
    }

    let size = u128::from(unit.milliseconds());
    if duration.fract() == 0.0 && duration <= u128::MAX as f64 {
        // Integral input: stay in integer arithmetic to keep exactness
        (duration as u128).saturating_mul(size)
    } else {
        (duration * size as f64) as u128
    }
}

/// Validate inputs and build the breakdown
fn resolve(duration: f64, unit: &str) -> Result<Breakdown, HumanizeError> {
    if !duration.is_finite() {
        return Err(HumanizeError::InvalidDuration);
    }
    if duration <= 0.0 {
        return Err(HumanizeError::NonPositiveDuration);
    }
    let unit = normalize_unit(unit)?;
    Ok(Breakdown::from_milliseconds(to_milliseconds(duration, unit)))
}

/// Humanize a duration into a display string
///
/// # Errors
///
/// * `HumanizeError::InvalidDuration` if `duration` is NaN or infinite
/// * `HumanizeError::NonPositiveDuration` if `duration <= 0`
/// * `HumanizeError::MissingUnit` if `unit` is empty or blank
/// * `HumanizeError::UnsupportedUnit` if `unit` names no known unit
pub fn humanize(duration: f64, unit: &str) -> Result<String, HumanizeError> {
    resolve(duration, unit).map(|breakdown| breakdown.to_string())
}

/// Humanize a duration given in milliseconds
///
/// # Errors
///
/// Same as [`humanize`], minus the unit errors.
pub fn humanize_ms(duration: f64) -> Result<String, HumanizeError> {
    humanize(duration, DEFAULT_UNIT)
}

/// Humanize a duration into its structured breakdown
///
/// The display string is available through the breakdown's `Display` impl.
///
/// # Errors
///
/// Same as [`humanize`].
pub fn humanize_breakdown(duration: f64, unit: &str) -> Result<Breakdown, HumanizeError> {
    resolve(duration, unit)
}

/// Humanize a duration, choosing the result shape at runtime
///
/// # Errors
///
/// Same as [`humanize`].
pub fn humanize_with(
    duration: f64,
    unit: &str,
    as_object: bool,
) -> Result<Humanized, HumanizeError> {
    let breakdown = resolve(duration, unit)?;
    Ok(if as_object {
        Humanized::Object(breakdown)
    } else {
        Humanized::Text(breakdown.to_string())
    })
}

/// Humanize loosely-typed input
///
/// `duration` must be a JSON number. A missing `unit` defaults to `"ms"`,
/// while a present unit must be a non-blank string. `as_object` is only
/// honored when it is a JSON boolean.
///
/// # Errors
///
/// * `HumanizeError::InvalidDuration` if `duration` is not a number
/// * `HumanizeError::MissingUnit` if `unit` is present but not a non-blank string
/// * Any error from [`humanize`]
pub fn humanize_value(
    duration: &Value,
    unit: Option<&Value>,
    as_object: Option<&Value>,
) -> Result<Humanized, HumanizeError> {
    if !is_numeric(duration) {
        return Err(HumanizeError::InvalidDuration);
    }
    let duration = duration.as_f64().ok_or(HumanizeError::InvalidDuration)?;
    let unit = match unit {
        None => DEFAULT_UNIT,
        Some(value) => value.as_str().ok_or(HumanizeError::MissingUnit)?,
    };
    humanize_with(duration, unit, normalize_bool(as_object))
}
