//! Unit designators
//!
//! A unit is given either as a short code (`ms`, `s`, `m`, `h`, `d`, `w`,
//! `M`, `y`) or as a long name, singular or plural. Short codes are matched
//! exactly, so `m` is a minute and `M` is a month. Anything else is
//! lower-cased, stripped of one trailing `s` and compared with the long
//! names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HumanizeError;
use crate::primitives::{is_blank, loose_eq};
use crate::time::{
    MILLISECONDS_IN_DAY, MILLISECONDS_IN_HOUR, MILLISECONDS_IN_MINUTE, MILLISECONDS_IN_MONTH,
    MILLISECONDS_IN_SECOND, MILLISECONDS_IN_WEEK, MILLISECONDS_IN_YEAR,
};

/// Unit a duration is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// Short codes, matched case-sensitively
const SHORT_CODES: &[(&str, Unit)] = &[
    ("ms", Unit::Millisecond),
    ("s", Unit::Second),
    ("m", Unit::Minute),
    ("h", Unit::Hour),
    ("d", Unit::Day),
    ("w", Unit::Week),
    ("M", Unit::Month),
    ("y", Unit::Year),
];

impl Unit {
    /// All units, smallest first
    pub const ALL: [Unit; 8] = [
        Unit::Millisecond,
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Week,
        Unit::Month,
        Unit::Year,
    ];

    /// Canonical singular long name
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Millisecond => "millisecond",
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Short code for this unit
    #[must_use]
    pub fn short_code(&self) -> &'static str {
        match self {
            Self::Millisecond => "ms",
            Self::Second => "s",
            Self::Minute => "m",
            Self::Hour => "h",
            Self::Day => "d",
            Self::Week => "w",
            Self::Month => "M",
            Self::Year => "y",
        }
    }

    /// Number of milliseconds in one of this unit
    #[must_use]
    pub fn milliseconds(&self) -> u64 {
        match self {
            Self::Millisecond => 1,
            Self::Second => MILLISECONDS_IN_SECOND,
            Self::Minute => MILLISECONDS_IN_MINUTE,
            Self::Hour => MILLISECONDS_IN_HOUR,
            Self::Day => MILLISECONDS_IN_DAY,
            Self::Week => MILLISECONDS_IN_WEEK,
            Self::Month => MILLISECONDS_IN_MONTH,
            Self::Year => MILLISECONDS_IN_YEAR,
        }
    }
}

/// Resolve a unit designator
///
/// # Errors
///
/// * `HumanizeError::MissingUnit` if the designator is empty or blank
/// * `HumanizeError::UnsupportedUnit` if it names no known unit
pub fn normalize_unit(unit: &str) -> Result<Unit, HumanizeError> {
    if is_blank(Some(unit)) {
        return Err(HumanizeError::MissingUnit);
    }
    let trimmed = unit.trim();

    if let Some((_, found)) = SHORT_CODES.iter().find(|(code, _)| *code == trimmed) {
        return Ok(*found);
    }

    let lowered = trimmed.to_lowercase();
    let singular = lowered.strip_suffix('s').unwrap_or(&lowered);

    Unit::ALL
        .iter()
        .find(|u| loose_eq(u.name(), singular))
        .copied()
        .ok_or_else(|| HumanizeError::UnsupportedUnit(unit.to_string()))
}

impl FromStr for Unit {
    type Err = HumanizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_unit(s)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
