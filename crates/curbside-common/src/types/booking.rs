//! Booking window - the requested start and end instants

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Milliseconds in one hour
pub const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;

/// Requested rental period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl BookingWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Window of `hours` whole hours starting at `start`
    pub fn from_hours(start: DateTime<Utc>, hours: i64) -> Self {
        Self {
            start,
            end: start + chrono::Duration::hours(hours),
        }
    }

    /// Wall-clock length in fractional hours, unrounded.
    ///
    /// Negative when `end` precedes `start`.
    pub fn hours(&self) -> Decimal {
        let millis = self.end.timestamp_millis() - self.start.timestamp_millis();
        Decimal::from(millis) / Decimal::from(MILLIS_PER_HOUR)
    }

    /// Whether `end` precedes `start`
    pub fn is_reversed(&self) -> bool {
        self.end < self.start
    }
}
