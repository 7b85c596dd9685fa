//! Time source for status derivation and id assignment.

use jiff::{civil::Date, tz::TimeZone, Timestamp, Zoned};

/// Supplies "now" to the trip store.
pub trait Clock {
    /// Current calendar date in the user's time zone.
    fn today(&self) -> Date;

    /// Current Unix time in milliseconds.
    fn now_millis(&self) -> i64;
}

/// The real wall clock, in the system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        Zoned::now().date()
    }

    fn now_millis(&self) -> i64 {
        Timestamp::now().as_millisecond()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: Date,
    millis: i64,
}

impl FixedClock {
    /// Freezes the clock at midnight UTC of `today`.
    pub fn on(today: Date) -> Self {
        let millis = today
            .to_zoned(TimeZone::UTC)
            .map(|zoned| zoned.timestamp().as_millisecond())
            .unwrap_or_default();
        Self { today, millis }
    }

    /// Freezes the clock at an explicit date and millisecond timestamp.
    pub fn at(today: Date, millis: i64) -> Self {
        Self { today, millis }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.today
    }

    fn now_millis(&self) -> i64 {
        self.millis
    }
}
