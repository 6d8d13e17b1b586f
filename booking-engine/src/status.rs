//! Status State Machines
//!
//! Lifecycle guards for reservations and the derived table-status
//! projection. Table status is never stored: it is computed from the
//! reservation and maintenance snapshot at query time, and the legal
//! transition relation is only enforced for directly-requested status
//! changes (e.g. staff forcing a table into maintenance).

use chrono::NaiveDateTime;
use shared::models::{
    MaintenanceRecord, MaintenanceStatus, Reservation, ReservationStatus, TableStatus,
};
use shared::{BookingError, BookingResult};

/// Guard a reservation transition, failing with `InvalidTransition`
/// naming both states when it is not in the lifecycle table.
pub fn ensure_reservation_transition(
    from: ReservationStatus,
    to: ReservationStatus,
) -> BookingResult<()> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(BookingError::invalid_transition(from, to))
    }
}

/// Guard a directly-requested table transition.
pub fn ensure_table_transition(from: TableStatus, to: TableStatus) -> BookingResult<()> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(BookingError::invalid_transition(from, to))
    }
}

/// Apply a legal transition to a reservation value, stamping the
/// matching timestamp.
///
/// Cancelling requires a reason. Mutating a terminal reservation is an
/// error, never a silent no-op.
pub fn apply_reservation_transition(
    reservation: &mut Reservation,
    to: ReservationStatus,
    cancellation_reason: Option<String>,
    at_millis: i64,
) -> BookingResult<()> {
    ensure_reservation_transition(reservation.status, to)?;

    match to {
        ReservationStatus::Confirmed => reservation.confirmed_at = Some(at_millis),
        ReservationStatus::Seated => reservation.seated_at = Some(at_millis),
        ReservationStatus::Completed => reservation.completed_at = Some(at_millis),
        ReservationStatus::Cancelled => {
            let reason = cancellation_reason
                .filter(|r| !r.trim().is_empty())
                .ok_or_else(|| {
                    BookingError::invalid_input("cancellation requires a reason")
                })?;
            reservation.cancellation_reason = Some(reason);
            reservation.cancelled_at = Some(at_millis);
        }
        ReservationStatus::NoShow => reservation.no_show_at = Some(at_millis),
        ReservationStatus::Pending => {}
    }

    reservation.status = to;
    Ok(())
}

/// Project a table's status at an instant from the snapshot.
///
/// Maintenance wins over any reservation overlap; an overlapping
/// `SEATED` reservation implies `OCCUPIED`; any other non-terminal
/// overlap implies `RESERVED`.
pub fn project_table_status(
    table_id: i64,
    at: NaiveDateTime,
    reservations: &[Reservation],
    maintenance: &[MaintenanceRecord],
) -> TableStatus {
    let under_maintenance = maintenance.iter().any(|m| {
        m.table_id == table_id
            && match m.status {
                MaintenanceStatus::InProgress => true,
                MaintenanceStatus::Scheduled => {
                    m.scheduled_start <= at && at < m.scheduled_end
                }
                MaintenanceStatus::Completed => false,
            }
    });
    if under_maintenance {
        return TableStatus::Maintenance;
    }

    let covering = reservations.iter().filter(|r| {
        r.table_id == Some(table_id)
            && r.status.is_blocking()
            && r.date == at.date()
            && r.start_time <= at.time()
            && at.time() < r.end_time
    });

    let mut status = TableStatus::Available;
    for r in covering {
        if r.status == ReservationStatus::Seated {
            return TableStatus::Occupied;
        }
        status = TableStatus::Reserved;
    }
    status
}
