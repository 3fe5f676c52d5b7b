//! Machine-readable error kinds
//!
//! Every [`HumanizeError`](crate::HumanizeError) belongs to one of two kinds,
//! so callers can tell malformed input apart from well-formed input that is
//! out of range without matching on individual variants.

use std::fmt;

/// Error kinds for humanize failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input is missing or has the wrong shape
    ///
    /// Raised before any conversion happens (non-numeric duration,
    /// empty or blank unit).
    InvalidArgument,

    /// Input is well-formed but outside the supported domain
    ///
    /// Non-positive durations and unit names that do not resolve.
    Range,
}

impl ErrorKind {
    /// Convert to the string representation used in machine output
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::Range => "range",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
