//! Humanize error type

use std::fmt;

use crate::error_kind::ErrorKind;

/// Error message for non-positive durations
pub const ERR_NON_POSITIVE_DURATION: &str = "duration should be a non-zero positive number";

/// Error message prefix for units that do not resolve
pub const ERR_UNSUPPORTED_UNIT: &str = "unsupported unit";

/// Error message for non-numeric durations
pub const ERR_INVALID_DURATION: &str = "duration should be a finite number";

/// Error message for missing or blank units
pub const ERR_MISSING_UNIT: &str = "unit should be a non-empty string";

/// Error returned by the humanize operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HumanizeError {
    /// Duration is missing, not a number, NaN or infinite
    InvalidDuration,
    /// Unit is missing, empty or whitespace only
    MissingUnit,
    /// Duration is zero or negative
    NonPositiveDuration,
    /// Unit does not name a supported unit (holds the input as given)
    UnsupportedUnit(String),
}

impl HumanizeError {
    /// Machine-readable kind of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDuration | Self::MissingUnit => ErrorKind::InvalidArgument,
            Self::NonPositiveDuration | Self::UnsupportedUnit(_) => ErrorKind::Range,
        }
    }
}

impl fmt::Display for HumanizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDuration => f.write_str(ERR_INVALID_DURATION),
            Self::MissingUnit => f.write_str(ERR_MISSING_UNIT),
            Self::NonPositiveDuration => f.write_str(ERR_NON_POSITIVE_DURATION),
            Self::UnsupportedUnit(unit) => write!(f, "{}: {:?}", ERR_UNSUPPORTED_UNIT, unit),
        }
    }
}

impl std::error::Error for HumanizeError {}
