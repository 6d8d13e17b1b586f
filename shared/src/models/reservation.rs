//! Reservation Model (预订)

use super::TableShape;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Reservation status lifecycle
///
/// `PENDING -> CONFIRMED -> SEATED -> COMPLETED`; `PENDING`/`CONFIRMED`
/// may be cancelled; `PENDING`/`CONFIRMED`/`SEATED` may become
/// `NO_SHOW`. `COMPLETED`, `CANCELLED` and `NO_SHOW` are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Seated,
    Completed,
    Cancelled,
    NoShow,
}

impl ReservationStatus {
    /// Terminal states admit no further transition
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ReservationStatus::Completed | ReservationStatus::Cancelled | ReservationStatus::NoShow
        )
    }

    /// Non-terminal reservations hold their table for the slot
    pub fn is_blocking(&self) -> bool {
        !self.is_terminal()
    }

    /// Whether a transition to `next` is legal
    ///
    /// Seating goes through `CONFIRMED`; `PENDING -> SEATED` is not in
    /// the transition table.
    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        matches!(
            (self, next),
            (ReservationStatus::Pending, ReservationStatus::Confirmed)
                | (ReservationStatus::Pending, ReservationStatus::Cancelled)
                | (ReservationStatus::Pending, ReservationStatus::NoShow)
                | (ReservationStatus::Confirmed, ReservationStatus::Seated)
                | (ReservationStatus::Confirmed, ReservationStatus::Cancelled)
                | (ReservationStatus::Confirmed, ReservationStatus::NoShow)
                | (ReservationStatus::Seated, ReservationStatus::Completed)
                | (ReservationStatus::Seated, ReservationStatus::NoShow)
        )
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReservationStatus::Pending => "PENDING",
            ReservationStatus::Confirmed => "CONFIRMED",
            ReservationStatus::Seated => "SEATED",
            ReservationStatus::Completed => "COMPLETED",
            ReservationStatus::Cancelled => "CANCELLED",
            ReservationStatus::NoShow => "NO_SHOW",
        };
        write!(f, "{}", s)
    }
}

/// Reservation entity
///
/// `end_time > start_time` always holds; conflict checks treat the
/// window as half-open `[start_time, end_time)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    /// None until persisted
    pub id: Option<i64>,
    pub customer_id: i64,
    /// None until a table is assigned
    pub table_id: Option<i64>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub party_size: i32,
    pub status: ReservationStatus,
    /// Confirmation code handed to the guest
    pub confirmation_code: String,
    pub special_requests: Option<String>,
    /// Set only when cancelled
    pub cancellation_reason: Option<String>,
    /// Epoch milliseconds, one per status transition
    pub created_at: i64,
    pub confirmed_at: Option<i64>,
    pub seated_at: Option<i64>,
    pub completed_at: Option<i64>,
    pub cancelled_at: Option<i64>,
    pub no_show_at: Option<i64>,
}

/// Guest preferences consumed by table scoring
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TablePreferences {
    /// Preferred zone
    pub zone_id: Option<i64>,
    /// Preferred table shape
    pub shape: Option<TableShape>,
    /// Free-text location preference, matched against the zone display
    /// name (case-insensitive substring)
    pub location: Option<String>,
    /// Guest requires an accessible table
    #[serde(default)]
    pub accessible: bool,
}

/// Incoming booking request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub customer_id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub party_size: i32,
    /// Explicitly requested table; when set, only this table is
    /// conflict-checked
    pub table_id: Option<i64>,
    pub preferences: Option<TablePreferences>,
    pub special_requests: Option<String>,
}

/// Cancel reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCancel {
    /// Required; cancelling without a reason is rejected
    pub reason: String,
}
