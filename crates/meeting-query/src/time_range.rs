//! Minute intervals within a single day.
//!
//! A [`TimeRange`] covers `[start, start + duration)` on the minute axis
//! `[0, 1440)`. The only range allowed to touch minute 1440 is one that closes the
//! day, built inclusively up to [`TimeRange::LAST_MINUTE_OF_DAY`].

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{MeetingError, Result};

/// An immutable span of minutes within a day.
///
/// Ordering is by `start` ascending, then by `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: u32,
    duration: u32,
}

#[derive(Deserialize)]
struct RawTimeRange {
    start: u32,
    duration: u32,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = MeetingError;

    fn try_from(raw: RawTimeRange) -> Result<Self> {
        TimeRange::new(raw.start, raw.duration)
    }
}

impl TimeRange {
    /// First minute of the day.
    pub const START_OF_DAY: u32 = 0;
    /// Exclusive end of the minute axis.
    pub const END_OF_DAY: u32 = 24 * 60;
    /// Last addressable minute; the day-closing window is built inclusively up to it.
    pub const LAST_MINUTE_OF_DAY: u32 = Self::END_OF_DAY - 1;
    /// The entire day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: Self::START_OF_DAY,
        duration: Self::END_OF_DAY,
    };

    /// Checked constructor.
    ///
    /// # Errors
    /// Returns [`MeetingError::InvalidRange`] if `duration` is zero or the range
    /// would end after [`TimeRange::END_OF_DAY`].
    pub fn new(start: u32, duration: u32) -> Result<Self> {
        let in_day = start
            .checked_add(duration)
            .is_some_and(|end| end <= Self::END_OF_DAY);
        if duration == 0 || !in_day {
            return Err(MeetingError::InvalidRange { start, duration });
        }
        Ok(Self { start, duration })
    }

    /// Build a range from a start and a duration without validation.
    pub fn from_start_duration(start: u32, duration: u32) -> Self {
        debug_assert!(start + duration <= Self::END_OF_DAY, "range ends after 24:00");
        Self { start, duration }
    }

    /// Build a range from two minute offsets.
    ///
    /// When `inclusive` is set, `end` itself is part of the range, so
    /// `from_start_end(s, LAST_MINUTE_OF_DAY, true)` ends at [`TimeRange::END_OF_DAY`].
    pub fn from_start_end(start: u32, end: u32, inclusive: bool) -> Self {
        debug_assert!(end >= start, "range ends before it starts");
        if inclusive {
            Self::from_start_duration(start, end - start + 1)
        } else {
            Self::from_start_duration(start, end - start)
        }
    }

    /// Minute offset of a wall-clock time, e.g. `minutes_of(8, 30) == 510`.
    pub const fn minutes_of(hours: u32, minutes: u32) -> u32 {
        hours * 60 + minutes
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Exclusive end minute.
    pub fn end(&self) -> u32 {
        self.start + self.duration
    }

    /// True if `minute` falls within `[start, end)`.
    pub fn contains_minute(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end()
    }

    /// True if `other` lies entirely within this range. Both boundaries are
    /// inclusive: a range contains itself.
    pub fn contains(&self, other: &TimeRange) -> bool {
        other.start >= self.start && other.end() <= self.end()
    }

    /// True if the two ranges share at least one minute. Adjacent ranges, where
    /// one ends exactly when the other starts, do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// Comparator by start minute only.
    pub fn order_by_start(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.start.cmp(&b.start)
    }

    /// Comparator by end minute only.
    pub fn order_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.end().cmp(&b.end())
    }
}

fn write_clock(f: &mut fmt::Formatter<'_>, minute: u32) -> fmt::Result {
    match NaiveTime::from_num_seconds_from_midnight_opt(minute * 60, 0) {
        Some(time) => write!(f, "{}", time.format("%H:%M")),
        // 24:00 is not a NaiveTime.
        None => write!(f, "{:02}:{:02}", minute / 60, minute % 60),
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_clock(f, self.start)?;
        f.write_str("-")?;
        write_clock(f, self.end())
    }
}

/// Flattened output row for a free window, with the derived `end` spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowView {
    pub start: u32,
    pub end: u32,
    pub duration: u32,
}

impl From<&TimeRange> for WindowView {
    fn from(range: &TimeRange) -> Self {
        Self {
            start: range.start(),
            end: range.end(),
            duration: range.duration(),
        }
    }
}

