//! Maintenance Record Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Maintenance status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
}

/// Table maintenance record (桌台维护)
///
/// A table under `IN_PROGRESS` maintenance, or with a `SCHEDULED`
/// window overlapping the query window, is unavailable regardless of
/// reservations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub id: i64,
    pub table_id: i64,
    pub scheduled_start: NaiveDateTime,
    pub scheduled_end: NaiveDateTime,
    pub status: MaintenanceStatus,
}

/// Create maintenance record payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceCreate {
    pub table_id: i64,
    pub scheduled_start: NaiveDateTime,
    pub scheduled_end: NaiveDateTime,
}
