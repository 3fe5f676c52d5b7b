//! User-facing message strings

/// Prefix for errors printed on stderr
pub const ERR_PREFIX: &str = "Error: ";

/// Debug message prefix for the resolved unit
pub const MSG_UNIT_RESOLVED: &str = "Resolved unit: ";

/// Debug message prefix for the millisecond total
pub const MSG_TOTAL_MILLISECONDS: &str = "Total milliseconds: ";

/// Exit code for humanize errors
pub const EXIT_HUMANIZE_ERROR: u8 = 1;
