//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Creates a timestamp from Unix seconds.
    ///
    /// Seconds outside chrono's representable range saturate to the
    /// range boundary instead of panicking.
    pub fn from_unix_secs(secs: i64) -> Self {
        use chrono::TimeZone;
        match Utc.timestamp_opt(secs, 0) {
            chrono::LocalResult::Single(dt) => Self(dt),
            _ => Self(DateTime::<Utc>::MIN_UTC),
        }
    }

    /// Returns the timestamp as Unix seconds.
    pub fn as_unix_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Returns the duration from another timestamp to this one.
    ///
    /// Returns negative duration if other is after self.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// Returns the signed number of hours from another timestamp to this one.
    ///
    /// Fractional hours are preserved; negative when other is after self.
    pub fn hours_since(&self, other: &Timestamp) -> f64 {
        self.duration_since(other).num_milliseconds() as f64 / (1000.0 * 60.0 * 60.0)
    }

    /// Creates a new timestamp by adding the specified number of seconds.
    pub fn plus_secs(&self, secs: i64) -> Self {
        Self(self.0 + Duration::seconds(secs))
    }

    /// Creates a new timestamp the specified number of days earlier.
    pub fn days_earlier(&self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }

    /// Creates a new timestamp the specified number of calendar months earlier.
    ///
    /// When the source day does not exist in the target month, the result
    /// clamps to the last valid day (Mar 31 minus one month is Feb 28, or
    /// Feb 29 in a leap year).
    pub fn months_earlier(&self, months: u32) -> Self {
        match self.0.checked_sub_months(Months::new(months)) {
            Some(dt) => Self(dt),
            None => Self(DateTime::<Utc>::MIN_UTC),
        }
    }

    /// Creates a new timestamp the specified number of calendar years earlier.
    ///
    /// Follows the same end-of-month clamping as [`Timestamp::months_earlier`]
    /// (Feb 29 minus one year is Feb 28).
    pub fn years_earlier(&self, years: u32) -> Self {
        self.months_earlier(years * 12)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}
