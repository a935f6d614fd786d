//! Time utilities for temporal analysis
//!
//! Calendar-month bucketing shared by every statistics series. Buckets are
//! always computed in UTC from the fact's own instant; nothing here reads the
//! wall clock.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use std::fmt;

/// A UTC calendar month, ordered chronologically (year, then month)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthBucket {
    year: i32,
    month: u32,
}

impl MonthBucket {
    /// Truncate an instant to the month that contains it
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use community_stats::utils::time::MonthBucket;
    /// let ts = Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 59).unwrap();
    /// assert_eq!(MonthBucket::from_instant(&ts).label(), "2024-03");
    /// ```
    pub fn from_instant(instant: &DateTime<Utc>) -> Self {
        Self {
            year: instant.year(),
            month: instant.month(),
        }
    }

    /// First instant of the month in UTC
    pub fn start(&self) -> DateTime<Utc> {
        // Day 1 at midnight always exists in UTC
        Utc.with_ymd_and_hms(self.year, self.month, 1, 0, 0, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    /// Milliseconds since the Unix epoch of the month start
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use community_stats::utils::time::MonthBucket;
    /// let ts = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    /// assert_eq!(MonthBucket::from_instant(&ts).start_millis(), 1_704_067_200_000);
    /// ```
    pub fn start_millis(&self) -> i64 {
        self.start().timestamp_millis()
    }

    /// "YYYY-MM" label used by per-month series
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MonthBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
