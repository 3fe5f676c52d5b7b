//! Time constants for duration calculations
//!
//! Every value is derived from [`SECONDS_IN_MINUTE`] by a multiplication
//! chain. Months are a fixed 30 days and years a fixed 365 days; nothing
//! here knows about calendars, leap years or time zones.

/// Seconds per minute
pub const SECONDS_IN_MINUTE: u64 = 60;

/// Seconds per hour
pub const SECONDS_IN_HOUR: u64 = 60 * SECONDS_IN_MINUTE;

/// Seconds per day
pub const SECONDS_IN_DAY: u64 = 24 * SECONDS_IN_HOUR;

/// Seconds per week
pub const SECONDS_IN_WEEK: u64 = 7 * SECONDS_IN_DAY;

/// Milliseconds per second
pub const MILLISECONDS_IN_SECOND: u64 = 1000;

/// Milliseconds per minute
pub const MILLISECONDS_IN_MINUTE: u64 = SECONDS_IN_MINUTE * MILLISECONDS_IN_SECOND;

/// Milliseconds per hour
pub const MILLISECONDS_IN_HOUR: u64 = SECONDS_IN_HOUR * MILLISECONDS_IN_SECOND;

/// Milliseconds per day
pub const MILLISECONDS_IN_DAY: u64 = SECONDS_IN_DAY * MILLISECONDS_IN_SECOND;

/// Milliseconds per week
pub const MILLISECONDS_IN_WEEK: u64 = SECONDS_IN_WEEK * MILLISECONDS_IN_SECOND;

/// Milliseconds per month (30-day approximation)
pub const MILLISECONDS_IN_MONTH: u64 = 30 * MILLISECONDS_IN_DAY;

/// Milliseconds per year (365-day approximation)
pub const MILLISECONDS_IN_YEAR: u64 = 365 * MILLISECONDS_IN_DAY;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_constants() {
        assert_eq!(SECONDS_IN_MINUTE, 60);
        assert_eq!(SECONDS_IN_HOUR, 3_600);
        assert_eq!(SECONDS_IN_DAY, 86_400);
        assert_eq!(SECONDS_IN_WEEK, 604_800);
    }

    #[test]
    fn test_millisecond_constants() {
        assert_eq!(MILLISECONDS_IN_SECOND, 1_000);
        assert_eq!(MILLISECONDS_IN_MINUTE, 60_000);
        assert_eq!(MILLISECONDS_IN_HOUR, 3_600_000);
        assert_eq!(MILLISECONDS_IN_DAY, 86_400_000);
        assert_eq!(MILLISECONDS_IN_WEEK, 604_800_000);
        assert_eq!(MILLISECONDS_IN_MONTH, 2_592_000_000);
        assert_eq!(MILLISECONDS_IN_YEAR, 31_536_000_000);
    }

    #[test]
    fn test_chain_is_consistent() {
        assert_eq!(MILLISECONDS_IN_YEAR, MILLISECONDS_IN_DAY * 365);
        assert_eq!(MILLISECONDS_IN_MONTH, MILLISECONDS_IN_DAY * 30);
        assert_eq!(MILLISECONDS_IN_WEEK, MILLISECONDS_IN_DAY * 7);
        assert_eq!(MILLISECONDS_IN_DAY, MILLISECONDS_IN_HOUR * 24);
        assert_eq!(MILLISECONDS_IN_HOUR, MILLISECONDS_IN_MINUTE * 60);
    }
}
