//! Date-range windows and creation-time filtering.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Measurable, Timestamp};

/// Named lookback windows offered by the analytics and report views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    Day,
    #[default]
    Week,
    Month,
    Year,
    Custom,
}

impl TimeRange {
    /// Returns the wire-format name of this range.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Day => "day",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
            TimeRange::Custom => "custom",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A closed interval of timestamps, `start <= end` by construction for
/// the named ranges; custom bounds are taken as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateWindow {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl DateWindow {
    /// Derives a window from a named range and a reference instant.
    ///
    /// Day/Week subtract exact 24h multiples. Month/Year subtract
    /// calendar units, clamping to the last valid day of the target
    /// month (see [`Timestamp::months_earlier`]). Custom uses the
    /// supplied bounds; both default to `now` when absent.
    pub fn from_range(
        range: TimeRange,
        now: Timestamp,
        custom_start: Option<Timestamp>,
        custom_end: Option<Timestamp>,
    ) -> Self {
        match range {
            TimeRange::Day => Self {
                start: now.days_earlier(1),
                end: now,
            },
            TimeRange::Week => Self {
                start: now.days_earlier(7),
                end: now,
            },
            TimeRange::Month => Self {
                start: now.months_earlier(1),
                end: now,
            },
            TimeRange::Year => Self {
                start: now.years_earlier(1),
                end: now,
            },
            TimeRange::Custom => Self {
                start: custom_start.unwrap_or(now),
                end: custom_end.unwrap_or(now),
            },
        }
    }

    /// True when the timestamp falls inside the window, bounds included.
    pub fn contains(&self, instant: Timestamp) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Keeps the items whose creation time falls inside the window.
///
/// Preserves input order. Filtering an already-filtered slice with the
/// same window returns the same items.
pub fn filter_created_within<'a, T: Measurable>(
    items: &'a [T],
    window: &DateWindow,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| window.contains(item.created_at()))
        .collect()
}
