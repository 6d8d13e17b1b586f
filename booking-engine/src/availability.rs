//! Table Availability Calculator
//!
//! The sole source of truth for conflict-freedom: a table excluded
//! here is never selected by the assignment algorithms for the same
//! window. A reservation blocks its table while in a non-terminal
//! status; maintenance blocks while in progress or whenever its
//! scheduled window overlaps the query window.

use chrono::NaiveDate;
use serde::Serialize;
use shared::models::{DiningTable, MaintenanceRecord, MaintenanceStatus, Reservation};

use crate::slot::{TimeSlot, ranges_overlap};

/// Availability of a table set for one window
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityReport {
    pub available_tables: Vec<DiningTable>,
    pub total_tables: usize,
    pub available_count: usize,
    /// `available_count / total_tables`, 0.0 for an empty table set
    pub availability_rate: f64,
}

/// Availability of a table set for one date in a batch query
#[derive(Debug, Clone, Serialize)]
pub struct DailyAvailability {
    pub date: NaiveDate,
    pub report: AvailabilityReport,
}

/// Return the subset of `tables` free for `slot`.
///
/// Reservations on other dates or in terminal status are ignored.
pub fn find_available_tables(
    tables: &[DiningTable],
    slot: &TimeSlot,
    reservations: &[Reservation],
    maintenance: &[MaintenanceRecord],
) -> AvailabilityReport {
    let total_tables = tables.len();
    let available_tables: Vec<DiningTable> = tables
        .iter()
        .filter(|table| is_table_free(table.id, slot, reservations, maintenance))
        .cloned()
        .collect();

    let available_count = available_tables.len();
    let availability_rate = if total_tables == 0 {
        0.0
    } else {
        available_count as f64 / total_tables as f64
    };

    AvailabilityReport {
        available_tables,
        total_tables,
        available_count,
        availability_rate,
    }
}

/// Batch mode: one time window checked across several dates, used by
/// "suggest another day" flows.
pub fn find_availability_by_dates(
    tables: &[DiningTable],
    dates: &[NaiveDate],
    start_time: chrono::NaiveTime,
    end_time: chrono::NaiveTime,
    reservations: &[Reservation],
    maintenance: &[MaintenanceRecord],
) -> shared::BookingResult<Vec<DailyAvailability>> {
    dates
        .iter()
        .map(|&date| {
            let slot = TimeSlot::new(date, start_time, end_time)?;
            Ok(DailyAvailability {
                date,
                report: find_available_tables(tables, &slot, reservations, maintenance),
            })
        })
        .collect()
}

/// Whether a single table is free for the window
pub fn is_table_free(
    table_id: i64,
    slot: &TimeSlot,
    reservations: &[Reservation],
    maintenance: &[MaintenanceRecord],
) -> bool {
    let reserved = reservations.iter().any(|r| {
        r.table_id == Some(table_id)
            && r.status.is_blocking()
            && r.date == slot.date
            && ranges_overlap(r.start_time, r.end_time, slot.start_time, slot.end_time)
    });
    if reserved {
        return false;
    }

    !maintenance
        .iter()
        .any(|record| record.table_id == table_id && maintenance_blocks(record, slot))
}

fn maintenance_blocks(record: &MaintenanceRecord, slot: &TimeSlot) -> bool {
    match record.status {
        // In-progress work blocks even past its scheduled window
        MaintenanceStatus::InProgress => true,
        MaintenanceStatus::Scheduled => ranges_overlap(
            record.scheduled_start,
            record.scheduled_end,
            slot.starts_at(),
            slot.ends_at(),
        ),
        MaintenanceStatus::Completed => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, NaiveTime};
    use shared::models::ReservationStatus;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 7).unwrap()
    }

    fn dt(h: u32) -> NaiveDateTime {
        day().and_time(t(h, 0))
    }

    fn make_table(id: i64, capacity: i32) -> DiningTable {
        DiningTable {
            id,
            name: format!("T{}", id),
            zone_id: 1,
            capacity,
            min_capacity: 1,
            shape: None,
            is_accessible: false,
            is_active: true,
        }
    }

    fn make_reservation(table_id: i64, start: NaiveTime, end: NaiveTime) -> Reservation {
        Reservation {
            id: Some(1),
            customer_id: 10,
            table_id: Some(table_id),
            date: day(),
            start_time: start,
            end_time: end,
            party_size: 2,
            status: ReservationStatus::Confirmed,
            confirmation_code: "abc".to_string(),
            special_requests: None,
            cancellation_reason: None,
            created_at: 0,
            confirmed_at: None,
            seated_at: None,
            completed_at: None,
            cancelled_at: None,
            no_show_at: None,
        }
    }

    fn make_maintenance(
        table_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
        status: MaintenanceStatus,
    ) -> MaintenanceRecord {
        MaintenanceRecord {
            id: 1,
            table_id,
            scheduled_start: start,
            scheduled_end: end,
            status,
        }
    }

    #[test]
    fn test_overlapping_reservation_excludes_table() {
        let tables = vec![make_table(1, 4)];
        let booked = vec![make_reservation(1, t(19, 0), t(21, 0))];
        let slot = TimeSlot::new(day(), t(20, 0), t(22, 0)).unwrap();

        let report = find_available_tables(&tables, &slot, &booked, &[]);
        assert_eq!(report.available_count, 0);
        assert_eq!(report.total_tables, 1);
        assert_eq!(report.availability_rate, 0.0);
    }

    #[test]
    fn test_boundary_adjacent_reservation_keeps_table() {
        // existing 19:00-21:00, request 21:00-23:00
        let tables = vec![make_table(1, 4)];
        let booked = vec![make_reservation(1, t(19, 0), t(21, 0))];
        let slot = TimeSlot::new(day(), t(21, 0), t(23, 0)).unwrap();

        let report = find_available_tables(&tables, &slot, &booked, &[]);
        assert_eq!(report.available_count, 1);
        assert_eq!(report.availability_rate, 1.0);
    }

    #[test]
    fn test_terminal_reservation_does_not_block() {
        let tables = vec![make_table(1, 4)];
        let mut cancelled = make_reservation(1, t(19, 0), t(21, 0));
        cancelled.status = ReservationStatus::Cancelled;
        let slot = TimeSlot::new(day(), t(19, 30), t(20, 30)).unwrap();

        let report = find_available_tables(&tables, &slot, &[cancelled], &[]);
        assert_eq!(report.available_count, 1);
    }

    #[test]
    fn test_reservation_on_other_date_does_not_block() {
        let tables = vec![make_table(1, 4)];
        let mut other_day = make_reservation(1, t(19, 0), t(21, 0));
        other_day.date = NaiveDate::from_ymd_opt(2025, 6, 8).unwrap();
        let slot = TimeSlot::new(day(), t(19, 0), t(21, 0)).unwrap();

        let report = find_available_tables(&tables, &slot, &[other_day], &[]);
        assert_eq!(report.available_count, 1);
    }

    #[test]
    fn test_scheduled_maintenance_blocks_overlapping_window() {
        let tables = vec![make_table(1, 4)];
        let records = vec![make_maintenance(
            1,
            dt(18),
            dt(20),
            MaintenanceStatus::Scheduled,
        )];
        let slot = TimeSlot::new(day(), t(19, 0), t(21, 0)).unwrap();

        let report = find_available_tables(&tables, &slot, &[], &records);
        assert_eq!(report.available_count, 0);
    }

    #[test]
    fn test_in_progress_maintenance_blocks_regardless_of_window() {
        let tables = vec![make_table(1, 4)];
        // scheduled window already lapsed, but work is still running
        let records = vec![make_maintenance(
            1,
            dt(8),
            dt(10),
            MaintenanceStatus::InProgress,
        )];
        let slot = TimeSlot::new(day(), t(19, 0), t(21, 0)).unwrap();

        let report = find_available_tables(&tables, &slot, &[], &records);
        assert_eq!(report.available_count, 0);
    }

    #[test]
    fn test_completed_maintenance_does_not_block() {
        let tables = vec![make_table(1, 4)];
        let records = vec![make_maintenance(
            1,
            dt(18),
            dt(20),
            MaintenanceStatus::Completed,
        )];
        let slot = TimeSlot::new(day(), t(19, 0), t(21, 0)).unwrap();

        let report = find_available_tables(&tables, &slot, &[], &records);
        assert_eq!(report.available_count, 1);
    }

    #[test]
    fn test_empty_table_set_has_zero_rate() {
        let slot = TimeSlot::new(day(), t(19, 0), t(21, 0)).unwrap();
        let report = find_available_tables(&[], &slot, &[], &[]);
        assert_eq!(report.total_tables, 0);
        assert_eq!(report.availability_rate, 0.0);
    }

    #[test]
    fn test_batch_mode_reports_per_date() {
        let tables = vec![make_table(1, 4)];
        let booked = vec![make_reservation(1, t(19, 0), t(21, 0))];
        let free_day = NaiveDate::from_ymd_opt(2025, 6, 8).unwrap();

        let results =
            find_availability_by_dates(&tables, &[day(), free_day], t(19, 0), t(21, 0), &booked, &[])
                .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].report.available_count, 0);
        assert_eq!(results[1].report.available_count, 1);
    }
}
