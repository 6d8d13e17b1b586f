//! Storage read seam
//!
//! The engine consumes full snapshots through this read-only
//! interface and returns decisions; it performs no I/O of its own and
//! holds no locks. The write path (persisting the reservation the
//! engine hands back) belongs to the caller, which must re-run the
//! availability check inside the same transaction or serialized
//! critical section that performs the write - see the concurrency
//! notes on [`crate::engine`].

use chrono::{NaiveDate, NaiveDateTime};
use shared::BookingError;
use shared::models::{DiningTable, MaintenanceRecord, Reservation, ReservationSettings, Zone};
use thiserror::Error;

/// Storage collaborator error
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Backend(String),
}

/// Result type for store reads
pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for BookingError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(resource) => BookingError::not_found(resource),
            StoreError::Backend(message) => BookingError::store(message),
        }
    }
}

/// Read interface the engine runs against.
///
/// Implementations back onto whatever persistence the application
/// uses; the in-memory implementation in the integration tests is the
/// reference for the expected semantics.
#[allow(async_fn_in_trait)]
pub trait BookingStore {
    /// All active tables
    async fn active_tables(&self) -> StoreResult<Vec<DiningTable>>;

    /// All zones (display names feed location-preference scoring)
    async fn zones(&self) -> StoreResult<Vec<Zone>>;

    /// Every reservation on the date, regardless of status
    async fn reservations_on(&self, date: NaiveDate) -> StoreResult<Vec<Reservation>>;

    /// Maintenance records that are `IN_PROGRESS`, or whose scheduled
    /// window overlaps `[start, end)`
    async fn maintenance_in_window(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> StoreResult<Vec<MaintenanceRecord>>;

    /// Restaurant settings; `None` falls back to
    /// [`ReservationSettings::default`]
    async fn settings(&self) -> StoreResult<Option<ReservationSettings>>;
}
