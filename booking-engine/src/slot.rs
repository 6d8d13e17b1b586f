//! Time slots and overlap checks
//!
//! Every conflict decision in the engine is built on half-open
//! `[start, end)` intervals: a reservation ending exactly when another
//! begins does not conflict.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use shared::{BookingError, BookingResult};

/// Check whether two half-open ranges overlap.
///
/// Zero-length ranges never overlap anything; callers reject
/// zero/negative-duration requests before any search runs.
pub fn ranges_overlap<T: PartialOrd>(start_a: T, end_a: T, start_b: T, end_b: T) -> bool {
    if start_a >= end_a || start_b >= end_b {
        return false;
    }
    start_a < end_b && start_b < end_a
}

/// A validated availability window: one calendar day plus a half-open
/// time range on that day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlot {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl TimeSlot {
    /// Build a slot, rejecting `end <= start`
    pub fn new(date: NaiveDate, start_time: NaiveTime, end_time: NaiveTime) -> BookingResult<Self> {
        if end_time <= start_time {
            return Err(BookingError::invalid_input(format!(
                "end time {} must be after start time {}",
                end_time, start_time
            )));
        }
        Ok(Self {
            date,
            start_time,
            end_time,
        })
    }

    /// Window start as a full timestamp
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    /// Window end as a full timestamp
    pub fn ends_at(&self) -> NaiveDateTime {
        self.date.and_time(self.end_time)
    }

    /// Whether two slots intersect
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        ranges_overlap(
            self.starts_at(),
            self.ends_at(),
            other.starts_at(),
            other.ends_at(),
        )
    }

    /// The same window shifted by whole minutes, used for
    /// alternate-slot suggestions. Returns None when the shifted window
    /// would leave its calendar day.
    pub fn shifted(&self, minutes: i64) -> Option<TimeSlot> {
        let delta = Duration::minutes(minutes);
        let (start, start_wrap) = self.start_time.overflowing_add_signed(delta);
        let (end, end_wrap) = self.end_time.overflowing_add_signed(delta);
        if start_wrap != 0 || end_wrap != 0 {
            return None;
        }
        // overflowing_add_signed never reorders a valid window
        Some(TimeSlot {
            date: self.date,
            start_time: start,
            end_time: end,
        })
    }
}
