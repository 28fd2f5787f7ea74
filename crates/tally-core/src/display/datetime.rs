//! DateTime display utilities.
//!
//! Timestamps are stored in UTC and shown in the system timezone. Calendar
//! dates (due dates, check-in days) are shown as-is.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
/// - Year, month, and day are zero-padded
/// - Time is in 24-hour format with zero-padded components
/// - Timezone abbreviation is included (e.g., UTC, CET, JST)
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_date_time_shape() {
        let ts = Timestamp::from_second(1704067200).unwrap();
        let output = LocalDateTime(&ts).to_string();
        // Exact value depends on the system timezone
        assert!(output.starts_with("2023-12-31") || output.starts_with("2024-01-01"));
        assert!(output.len() > "YYYY-MM-DD HH:MM:SS".len());
    }
}
