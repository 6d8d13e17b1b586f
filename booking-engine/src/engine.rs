//! Reservation Engine
//!
//! Orchestrates one booking request: day-level admission first (cheap
//! policy checks short-circuit), then availability, then table
//! assignment - the explicitly requested table, the best-scoring
//! single table, or bounded multi-table combinations for oversized
//! parties. Returns a structured decision plus, on success, the
//! reservation value for the caller's write path.
//!
//! # Concurrency
//!
//! Every call works on a snapshot read through the store and holds no
//! locks, so two racing requests can both see a table as free. The
//! caller owns double-booking protection: re-run the availability
//! check inside the same transaction or serialized critical section
//! that writes the reservation (e.g. a storage-level exclusion
//! constraint on table + overlapping window). A snapshot from this
//! engine must never be trusted across that write boundary.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use shared::BookingResult;
use shared::models::{
    DiningTable, Reservation, ReservationRequest, ReservationSettings, ReservationStatus,
    TableStatus,
};
use uuid::Uuid;

use crate::admission::{AdmissionRejection, check_day_admission};
use crate::assignment::{ScoredTable, assign_best_table};
use crate::availability::{DailyAvailability, find_availability_by_dates, find_available_tables, is_table_free};
use crate::combination::find_table_combinations;
use crate::config::EngineConfig;
use crate::scoring::score_table;
use crate::slot::TimeSlot;
use crate::status::project_table_status;
use crate::store::BookingStore;

/// Decision for one booking request
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingOutcome {
    /// A table was assigned; the caller persists `reservation`
    Booked {
        reservation: Reservation,
        score: f64,
        alternatives: Vec<ScoredTable>,
    },
    /// Day-level policy refused the request
    PolicyRejected { rejection: AdmissionRejection },
    /// No table or combination fits; a normal negative result
    NoAvailability {
        reason: String,
        /// Free nearby windows on the same day, if any
        alternative_slots: Vec<TimeSlot>,
    },
    /// Party exceeds every single table; staff pick a combination
    CombinationProposed { combinations: Vec<Vec<DiningTable>> },
}

/// Booking engine over a storage read seam
#[derive(Clone)]
pub struct ReservationEngine<S> {
    store: S,
    config: EngineConfig,
}

impl<S: BookingStore> ReservationEngine<S> {
    pub fn new(store: S, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// Decide one booking request against the current snapshot.
    ///
    /// `now` is the caller's clock; the past-date rule only uses its
    /// calendar date.
    pub async fn request_booking(
        &self,
        request: &ReservationRequest,
        now: NaiveDateTime,
    ) -> BookingResult<BookingOutcome> {
        let slot = TimeSlot::new(request.date, request.start_time, request.end_time)?;

        let settings = match self.store.settings().await? {
            Some(settings) => settings,
            None => {
                tracing::debug!("no reservation settings stored, using fallback defaults");
                ReservationSettings::default()
            }
        };

        let reservations = self.store.reservations_on(request.date).await?;

        let admission = check_day_admission(
            request.date,
            request.party_size,
            &reservations,
            &settings,
            now.date(),
        )?;
        if let Some(rejection) = admission.rejection {
            tracing::info!(
                date = %request.date,
                party_size = request.party_size,
                ?rejection,
                "booking rejected by day-level policy"
            );
            return Ok(BookingOutcome::PolicyRejected { rejection });
        }

        let mut tables = self.store.active_tables().await?;
        if let Some(rule) = settings.rule_for(request.date.weekday())
            && let Some(allowed) = &rule.tables_available
        {
            tables.retain(|t| allowed.contains(&t.id));
        }

        let maintenance = self
            .store
            .maintenance_in_window(slot.starts_at(), slot.ends_at())
            .await?;
        let zones = self.store.zones().await?;

        let mut preferences = request.preferences.clone().unwrap_or_default();
        if preferences.location.is_none() {
            preferences.location = settings.default_preferred_location.clone();
        }

        // Explicitly requested table: conflict-check only that table
        if let Some(table_id) = request.table_id {
            let table = tables
                .iter()
                .find(|t| t.id == table_id)
                .ok_or_else(|| shared::BookingError::not_found(format!("dining_table:{}", table_id)))?
                .clone();

            if request.party_size > table.capacity || request.party_size < table.min_capacity {
                return Ok(BookingOutcome::NoAvailability {
                    reason: format!(
                        "table {} seats {} to {}, party of {} does not fit",
                        table.name, table.min_capacity, table.capacity, request.party_size
                    ),
                    alternative_slots: Vec::new(),
                });
            }

            if is_table_free(table.id, &slot, &reservations, &maintenance) {
                let score = score_table(&table, request.party_size, &preferences, &zones);
                let reservation = build_reservation(request, table.id, &settings, now);
                tracing::info!(
                    table_id = table.id,
                    party_size = request.party_size,
                    score,
                    "requested table assigned"
                );
                return Ok(BookingOutcome::Booked {
                    reservation,
                    score,
                    alternatives: Vec::new(),
                });
            }

            let alternative_slots = self
                .suggest_slots(std::slice::from_ref(&table), request.party_size, &slot, &reservations)
                .await?;
            return Ok(BookingOutcome::NoAvailability {
                reason: format!("table {} is not free for the requested window", table.name),
                alternative_slots,
            });
        }

        // Oversized party: no single table can hold it
        if tables.iter().all(|t| t.capacity < request.party_size) {
            let free = find_available_tables(&tables, &slot, &reservations, &maintenance);
            let combinations = find_table_combinations(
                &free.available_tables,
                request.party_size,
                self.config.max_combination_tables,
            )?;
            if combinations.is_empty() {
                tracing::warn!(
                    party_size = request.party_size,
                    max_tables = self.config.max_combination_tables,
                    "no table combination covers the party"
                );
                let alternative_slots = self
                    .suggest_slots(&tables, request.party_size, &slot, &reservations)
                    .await?;
                return Ok(BookingOutcome::NoAvailability {
                    reason: "no table combination covers the party".to_string(),
                    alternative_slots,
                });
            }
            return Ok(BookingOutcome::CombinationProposed { combinations });
        }

        let outcome = assign_best_table(
            &tables,
            request.party_size,
            &preferences,
            &slot,
            &reservations,
            &maintenance,
            &zones,
            self.config.alternative_limit,
        )?;

        if let (Some(table), Some(score)) = (outcome.table, outcome.score) {
            let reservation = build_reservation(request, table.id, &settings, now);
            tracing::info!(
                table_id = table.id,
                party_size = request.party_size,
                score,
                "table assigned"
            );
            return Ok(BookingOutcome::Booked {
                reservation,
                score,
                alternatives: outcome.alternatives,
            });
        }

        let alternative_slots = self
            .suggest_slots(&tables, request.party_size, &slot, &reservations)
            .await?;
        tracing::info!(
            date = %request.date,
            party_size = request.party_size,
            suggestions = alternative_slots.len(),
            "no table available for the requested window"
        );
        Ok(BookingOutcome::NoAvailability {
            reason: outcome
                .reason
                .unwrap_or_else(|| crate::assignment::REASON_NO_TABLES.to_string()),
            alternative_slots,
        })
    }

    /// One time window checked across several dates ("suggest another
    /// day").
    pub async fn day_availability(
        &self,
        dates: &[NaiveDate],
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> BookingResult<Vec<DailyAvailability>> {
        let tables = self.store.active_tables().await?;
        let (Some(&first), Some(&last)) = (dates.iter().min(), dates.iter().max()) else {
            return Ok(Vec::new());
        };

        let mut reservations = Vec::new();
        for &date in dates {
            reservations.extend(self.store.reservations_on(date).await?);
        }
        let maintenance = self
            .store
            .maintenance_in_window(first.and_time(start_time), last.and_time(end_time))
            .await?;

        Ok(find_availability_by_dates(
            &tables,
            dates,
            start_time,
            end_time,
            &reservations,
            &maintenance,
        )?)
    }

    /// Project one table's derived status at an instant
    pub async fn table_status(&self, table_id: i64, at: NaiveDateTime) -> BookingResult<TableStatus> {
        let reservations = self.store.reservations_on(at.date()).await?;
        let maintenance = self
            .store
            .maintenance_in_window(at, at + chrono::Duration::milliseconds(1))
            .await?;
        Ok(project_table_status(table_id, at, &reservations, &maintenance))
    }

    /// Probe nearby same-day windows and keep those where some table
    /// fitting the party is free.
    async fn suggest_slots(
        &self,
        tables: &[DiningTable],
        party_size: i32,
        slot: &TimeSlot,
        reservations: &[Reservation],
    ) -> BookingResult<Vec<TimeSlot>> {
        let mut suggestions = Vec::new();
        for &offset in &self.config.suggestion_offsets_min {
            let Some(candidate) = slot.shifted(offset) else {
                continue;
            };
            let maintenance = self
                .store
                .maintenance_in_window(candidate.starts_at(), candidate.ends_at())
                .await?;
            let report = find_available_tables(tables, &candidate, reservations, &maintenance);
            let fits = report
                .available_tables
                .iter()
                .any(|t| t.capacity >= party_size && party_size >= t.min_capacity);
            if fits {
                suggestions.push(candidate);
            }
        }
        Ok(suggestions)
    }
}

fn build_reservation(
    request: &ReservationRequest,
    table_id: i64,
    settings: &ReservationSettings,
    now: NaiveDateTime,
) -> Reservation {
    let now_millis = now.and_utc().timestamp_millis();
    let status = if settings.auto_confirm {
        ReservationStatus::Confirmed
    } else {
        ReservationStatus::Pending
    };
    Reservation {
        id: None,
        customer_id: request.customer_id,
        table_id: Some(table_id),
        date: request.date,
        start_time: request.start_time,
        end_time: request.end_time,
        party_size: request.party_size,
        status,
        confirmation_code: Uuid::new_v4().to_string(),
        special_requests: request.special_requests.clone(),
        cancellation_reason: None,
        created_at: now_millis,
        confirmed_at: settings.auto_confirm.then_some(now_millis),
        seated_at: None,
        completed_at: None,
        cancelled_at: None,
        no_show_at: None,
    }
}
