//! End-to-end booking flows against an in-memory store
//!
//! The `InMemoryStore` here is the reference implementation of the
//! `BookingStore` read semantics.

use booking_engine::{
    BookingOutcome, BookingStore, EngineConfig, ReservationEngine, StoreResult,
    apply_reservation_transition,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use shared::BookingError;
use shared::models::{
    DiningTable, MaintenanceRecord, MaintenanceStatus, Reservation, ReservationRequest,
    ReservationSettings, ReservationStatus, TablePreferences, Zone,
};

#[derive(Clone, Default)]
struct InMemoryStore {
    tables: Vec<DiningTable>,
    zones: Vec<Zone>,
    reservations: Vec<Reservation>,
    maintenance: Vec<MaintenanceRecord>,
    settings: Option<ReservationSettings>,
}

impl BookingStore for InMemoryStore {
    async fn active_tables(&self) -> StoreResult<Vec<DiningTable>> {
        Ok(self
            .tables
            .iter()
            .filter(|t| t.is_active)
            .cloned()
            .collect())
    }

    async fn zones(&self) -> StoreResult<Vec<Zone>> {
        Ok(self.zones.clone())
    }

    async fn reservations_on(&self, date: NaiveDate) -> StoreResult<Vec<Reservation>> {
        Ok(self
            .reservations
            .iter()
            .filter(|r| r.date == date)
            .cloned()
            .collect())
    }

    async fn maintenance_in_window(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> StoreResult<Vec<MaintenanceRecord>> {
        Ok(self
            .maintenance
            .iter()
            .filter(|m| {
                m.status == MaintenanceStatus::InProgress
                    || (m.scheduled_start < end && start < m.scheduled_end)
            })
            .cloned()
            .collect())
    }

    async fn settings(&self) -> StoreResult<Option<ReservationSettings>> {
        Ok(self.settings.clone())
    }
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

// booking date is a Saturday, "now" the Friday before
fn booking_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 7).unwrap()
}

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 6)
        .unwrap()
        .and_time(t(12, 0))
}

fn make_table(id: i64, zone_id: i64, capacity: i32) -> DiningTable {
    DiningTable {
        id,
        name: format!("T{}", id),
        zone_id,
        capacity,
        min_capacity: 1,
        shape: None,
        is_accessible: false,
        is_active: true,
    }
}

fn make_zone(id: i64, name: &str) -> Zone {
    Zone {
        id,
        name: name.to_string(),
        description: None,
    }
}

fn make_request(party_size: i32) -> ReservationRequest {
    ReservationRequest {
        customer_id: 1,
        date: booking_date(),
        start_time: t(19, 0),
        end_time: t(21, 0),
        party_size,
        table_id: None,
        preferences: None,
        special_requests: None,
    }
}

fn confirmed_reservation(table_id: i64, party_size: i32, start: NaiveTime, end: NaiveTime) -> Reservation {
    Reservation {
        id: Some(1),
        customer_id: 2,
        table_id: Some(table_id),
        date: booking_date(),
        start_time: start,
        end_time: end,
        party_size,
        status: ReservationStatus::Confirmed,
        confirmation_code: "existing".to_string(),
        special_requests: None,
        cancellation_reason: None,
        created_at: 0,
        confirmed_at: Some(0),
        seated_at: None,
        completed_at: None,
        cancelled_at: None,
        no_show_at: None,
    }
}

fn engine(store: InMemoryStore) -> ReservationEngine<InMemoryStore> {
    ReservationEngine::new(
        store,
        EngineConfig {
            max_combination_tables: 3,
            alternative_limit: 2,
            suggestion_offsets_min: vec![-60, 60, 120],
        },
    )
}

#[tokio::test]
async fn booking_succeeds_on_empty_day_with_perfect_fit() {
    // single table, capacity 4, party of 4
    let store = InMemoryStore {
        tables: vec![make_table(1, 1, 4)],
        zones: vec![make_zone(1, "Main Hall")],
        ..InMemoryStore::default()
    };

    let outcome = engine(store)
        .request_booking(&make_request(4), now())
        .await
        .unwrap();

    match outcome {
        BookingOutcome::Booked {
            reservation, score, ..
        } => {
            assert_eq!(reservation.table_id, Some(1));
            assert_eq!(reservation.status, ReservationStatus::Pending);
            assert_eq!(reservation.party_size, 4);
            assert!(!reservation.confirmation_code.is_empty());
            // capacity == party_size maxes the capacity component
            assert_eq!(score, 40.0);
        }
        other => panic!("expected Booked, got {:?}", other),
    }
}

#[tokio::test]
async fn auto_confirm_creates_confirmed_reservations() {
    let store = InMemoryStore {
        tables: vec![make_table(1, 1, 4)],
        settings: Some(ReservationSettings {
            auto_confirm: true,
            ..ReservationSettings::default()
        }),
        ..InMemoryStore::default()
    };

    let outcome = engine(store)
        .request_booking(&make_request(2), now())
        .await
        .unwrap();

    match outcome {
        BookingOutcome::Booked { reservation, .. } => {
            assert_eq!(reservation.status, ReservationStatus::Confirmed);
            assert!(reservation.confirmed_at.is_some());
        }
        other => panic!("expected Booked, got {:?}", other),
    }
}

#[tokio::test]
async fn day_limit_rejects_before_any_table_search() {
    // rule allows 2 reservations; two confirmed 4-guest parties exist
    let mut settings = ReservationSettings::default();
    for rule in settings.day_rules.values_mut() {
        rule.max_reservations = 2;
        rule.max_guests_total = 10;
    }
    let store = InMemoryStore {
        tables: vec![make_table(1, 1, 4), make_table(2, 1, 4), make_table(3, 1, 4)],
        reservations: vec![
            confirmed_reservation(1, 4, t(19, 0), t(21, 0)),
            confirmed_reservation(2, 4, t(19, 0), t(21, 0)),
        ],
        settings: Some(settings),
        ..InMemoryStore::default()
    };

    let outcome = engine(store)
        .request_booking(&make_request(2), now())
        .await
        .unwrap();

    match outcome {
        BookingOutcome::PolicyRejected { rejection } => {
            let json = serde_json::to_value(&rejection).unwrap();
            assert_eq!(json["reason"], "RESERVATION_LIMIT_REACHED");
            assert_eq!(json["current_reservations"], 2);
            assert_eq!(json["available_slots"], 0);
        }
        other => panic!("expected PolicyRejected, got {:?}", other),
    }
}

#[tokio::test]
async fn conflicting_slot_is_refused_with_suggestions() {
    // table booked 19:00-21:00; request overlaps at 20:00-22:00
    let store = InMemoryStore {
        tables: vec![make_table(1, 1, 4)],
        reservations: vec![confirmed_reservation(1, 4, t(19, 0), t(21, 0))],
        ..InMemoryStore::default()
    };

    let mut request = make_request(4);
    request.start_time = t(20, 0);
    request.end_time = t(22, 0);

    let outcome = engine(store)
        .request_booking(&request, now())
        .await
        .unwrap();

    match outcome {
        BookingOutcome::NoAvailability {
            alternative_slots, ..
        } => {
            // +60 (21:00-23:00) is boundary-adjacent and free,
            // +120 would cross midnight, -60 overlaps
            assert_eq!(alternative_slots.len(), 1);
            assert_eq!(alternative_slots[0].start_time, t(21, 0));
        }
        other => panic!("expected NoAvailability, got {:?}", other),
    }
}

#[tokio::test]
async fn boundary_adjacent_slot_is_free() {
    // existing 19:00-21:00, request exactly 21:00-23:00
    let store = InMemoryStore {
        tables: vec![make_table(1, 1, 4)],
        reservations: vec![confirmed_reservation(1, 4, t(19, 0), t(21, 0))],
        ..InMemoryStore::default()
    };

    let mut request = make_request(4);
    request.start_time = t(21, 0);
    request.end_time = t(23, 0);

    let outcome = engine(store)
        .request_booking(&request, now())
        .await
        .unwrap();
    assert!(matches!(outcome, BookingOutcome::Booked { .. }));
}

#[tokio::test]
async fn oversized_party_gets_combinations_fewest_tables_first() {
    // party of 10 over {4, 4, 4, 6}
    let store = InMemoryStore {
        tables: vec![
            make_table(1, 1, 4),
            make_table(2, 1, 4),
            make_table(3, 1, 4),
            make_table(4, 1, 6),
        ],
        ..InMemoryStore::default()
    };

    let outcome = engine(store)
        .request_booking(&make_request(10), now())
        .await
        .unwrap();

    match outcome {
        BookingOutcome::CombinationProposed { combinations } => {
            assert!(!combinations.is_empty());
            assert_eq!(combinations[0].len(), 2);
            let total: i32 = combinations[0].iter().map(|t| t.capacity).sum();
            assert!(total >= 10);
        }
        other => panic!("expected CombinationProposed, got {:?}", other),
    }
}

#[tokio::test]
async fn explicit_table_request_checks_only_that_table() {
    // T1 is free, but the guest asked for the booked T2
    let store = InMemoryStore {
        tables: vec![make_table(1, 1, 4), make_table(2, 1, 4)],
        reservations: vec![confirmed_reservation(2, 4, t(19, 0), t(21, 0))],
        ..InMemoryStore::default()
    };

    let mut request = make_request(2);
    request.table_id = Some(2);

    let outcome = engine(store)
        .request_booking(&request, now())
        .await
        .unwrap();
    assert!(matches!(outcome, BookingOutcome::NoAvailability { .. }));
}

#[tokio::test]
async fn explicit_table_request_books_when_free() {
    let store = InMemoryStore {
        tables: vec![make_table(1, 1, 4), make_table(2, 1, 6)],
        ..InMemoryStore::default()
    };

    let mut request = make_request(4);
    request.table_id = Some(2);

    let outcome = engine(store)
        .request_booking(&request, now())
        .await
        .unwrap();
    match outcome {
        BookingOutcome::Booked { reservation, .. } => {
            assert_eq!(reservation.table_id, Some(2));
        }
        other => panic!("expected Booked, got {:?}", other),
    }
}

#[tokio::test]
async fn unknown_explicit_table_is_a_hard_error() {
    let store = InMemoryStore {
        tables: vec![make_table(1, 1, 4)],
        ..InMemoryStore::default()
    };

    let mut request = make_request(2);
    request.table_id = Some(99);

    let err = engine(store)
        .request_booking(&request, now())
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::NotFound { .. }));
}

#[tokio::test]
async fn weekday_rule_can_restrict_the_table_pool() {
    // Saturday bookings only run on table 2
    let mut settings = ReservationSettings::default();
    settings.day_rules.get_mut(&6).unwrap().tables_available = Some(vec![2]);

    let store = InMemoryStore {
        tables: vec![make_table(1, 1, 4), make_table(2, 1, 4)],
        settings: Some(settings),
        ..InMemoryStore::default()
    };

    let outcome = engine(store)
        .request_booking(&make_request(4), now())
        .await
        .unwrap();
    match outcome {
        BookingOutcome::Booked { reservation, .. } => {
            assert_eq!(reservation.table_id, Some(2));
        }
        other => panic!("expected Booked, got {:?}", other),
    }
}

#[tokio::test]
async fn preferences_steer_assignment_between_equal_fits() {
    let store = InMemoryStore {
        tables: vec![make_table(1, 1, 4), make_table(2, 7, 4)],
        zones: vec![make_zone(1, "Main Hall"), make_zone(7, "Garden Terrace")],
        ..InMemoryStore::default()
    };

    let mut request = make_request(4);
    request.preferences = Some(TablePreferences {
        zone_id: Some(7),
        ..TablePreferences::default()
    });

    let outcome = engine(store)
        .request_booking(&request, now())
        .await
        .unwrap();
    match outcome {
        BookingOutcome::Booked {
            reservation,
            score,
            alternatives,
        } => {
            assert_eq!(reservation.table_id, Some(2));
            assert_eq!(score, 70.0);
            assert_eq!(alternatives.len(), 1);
        }
        other => panic!("expected Booked, got {:?}", other),
    }
}

#[tokio::test]
async fn default_preferred_location_applies_when_request_has_none() {
    let store = InMemoryStore {
        tables: vec![make_table(1, 1, 4), make_table(2, 7, 4)],
        zones: vec![make_zone(1, "Main Hall"), make_zone(7, "Garden Terrace")],
        settings: Some(ReservationSettings {
            default_preferred_location: Some("terrace".to_string()),
            ..ReservationSettings::default()
        }),
        ..InMemoryStore::default()
    };

    let outcome = engine(store)
        .request_booking(&make_request(4), now())
        .await
        .unwrap();
    match outcome {
        BookingOutcome::Booked { reservation, .. } => {
            assert_eq!(reservation.table_id, Some(2));
        }
        other => panic!("expected Booked, got {:?}", other),
    }
}

#[tokio::test]
async fn maintenance_blocks_assignment() {
    let store = InMemoryStore {
        tables: vec![make_table(1, 1, 4)],
        maintenance: vec![MaintenanceRecord {
            id: 1,
            table_id: 1,
            scheduled_start: booking_date().and_time(t(18, 0)),
            scheduled_end: booking_date().and_time(t(22, 0)),
            status: MaintenanceStatus::Scheduled,
        }],
        ..InMemoryStore::default()
    };

    let outcome = engine(store)
        .request_booking(&make_request(4), now())
        .await
        .unwrap();
    assert!(matches!(outcome, BookingOutcome::NoAvailability { .. }));
}

#[tokio::test]
async fn invalid_window_fails_before_any_search() {
    let store = InMemoryStore {
        tables: vec![make_table(1, 1, 4)],
        ..InMemoryStore::default()
    };

    let mut request = make_request(4);
    request.end_time = request.start_time;

    let err = engine(store)
        .request_booking(&request, now())
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::InvalidInput { .. }));
}

#[tokio::test]
async fn booked_reservation_follows_the_lifecycle() {
    let store = InMemoryStore {
        tables: vec![make_table(1, 1, 4)],
        ..InMemoryStore::default()
    };

    let outcome = engine(store)
        .request_booking(&make_request(4), now())
        .await
        .unwrap();
    let BookingOutcome::Booked { mut reservation, .. } = outcome else {
        panic!("expected Booked");
    };

    // seating a pending reservation must go through CONFIRMED first
    let err =
        apply_reservation_transition(&mut reservation, ReservationStatus::Seated, None, 1)
            .unwrap_err();
    assert!(matches!(err, BookingError::InvalidTransition { .. }));

    apply_reservation_transition(&mut reservation, ReservationStatus::Confirmed, None, 1).unwrap();
    apply_reservation_transition(&mut reservation, ReservationStatus::Seated, None, 2).unwrap();
    apply_reservation_transition(&mut reservation, ReservationStatus::Completed, None, 3).unwrap();
    assert_eq!(reservation.status, ReservationStatus::Completed);
}

#[tokio::test]
async fn day_availability_scans_multiple_dates() {
    let free_day = NaiveDate::from_ymd_opt(2025, 6, 8).unwrap();
    let store = InMemoryStore {
        tables: vec![make_table(1, 1, 4)],
        reservations: vec![confirmed_reservation(1, 4, t(19, 0), t(21, 0))],
        ..InMemoryStore::default()
    };

    let results = engine(store)
        .day_availability(&[booking_date(), free_day], t(19, 0), t(21, 0))
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].report.available_count, 0);
    assert_eq!(results[1].report.available_count, 1);
}
