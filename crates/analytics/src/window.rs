//! Trailing reporting windows over the order history.
//!
//! Every time computation in the engine is anchored to an explicit viewer
//! instant carried by the window; nothing here reads the process clock.

use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use saltbox_core::Order;
use serde::{Deserialize, Serialize};

/// Window lengths offered by the dashboard's range selector.
///
/// The filter itself accepts any day count; these are the choices the
/// view exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WindowPreset {
    /// Last 7 days.
    Week,
    /// Last 30 days.
    #[default]
    Month,
    /// Last 90 days.
    Quarter,
    /// Last 365 days.
    Year,
}

impl WindowPreset {
    /// Number of trailing days the preset covers.
    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
            Self::Year => 365,
        }
    }

    /// Display label for the range selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Week => "Last 7 days",
            Self::Month => "Last 30 days",
            Self::Quarter => "Last 90 days",
            Self::Year => "Last 365 days",
        }
    }
}

/// A trailing window of whole viewer-local days ending at `now`.
///
/// `now` is the viewer's current instant in the viewer's own UTC offset.
/// It is threaded explicitly so identical inputs always produce identical
/// reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingWindow {
    /// Trailing length of the window in days.
    pub days: u32,
    /// The viewer's current instant.
    pub now: DateTime<FixedOffset>,
}

impl ReportingWindow {
    /// Window covering the last `days` days ending at `now`.
    #[must_use]
    pub const fn new(days: u32, now: DateTime<FixedOffset>) -> Self {
        Self { days, now }
    }

    /// Window for one of the range-selector presets.
    #[must_use]
    pub const fn from_preset(preset: WindowPreset, now: DateTime<FixedOffset>) -> Self {
        Self::new(preset.days(), now)
    }

    /// Earliest viewer-local instant still inside the window.
    ///
    /// The cutoff is the start of the viewer-local day `days` days before
    /// `now`, so the window edge always falls on a calendar-day boundary
    /// and agrees with the daily buckets of the sales series.
    #[must_use]
    pub fn cutoff(&self) -> NaiveDateTime {
        self.now
            .date_naive()
            .checked_sub_days(Days::new(u64::from(self.days)))
            .unwrap_or(NaiveDate::MIN)
            .and_time(NaiveTime::MIN)
    }

    /// Whether an instant falls inside the window.
    ///
    /// A missing instant counts as the epoch start, which no realistic
    /// window reaches: undated orders are excluded rather than guessed
    /// into the present.
    #[must_use]
    pub fn contains(&self, instant: Option<DateTime<Utc>>) -> bool {
        let created = instant.unwrap_or(DateTime::UNIX_EPOCH);
        created.with_timezone(&self.now.timezone()).naive_local() >= self.cutoff()
    }

    /// The viewer-local calendar date of an instant.
    #[must_use]
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.now.timezone()).date_naive()
    }
}

/// Reduce an order collection to those placed inside the window.
///
/// Result order follows input order. An empty result is valid and flows
/// through every downstream reducer as zeros and empty sequences.
#[must_use]
pub fn filter_by_window<'a>(orders: &'a [Order], window: &ReportingWindow) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|order| window.contains(order.created_at))
        .collect()
}
