//! Day-Level Admission Control
//!
//! Cheap policy checks that run before any per-table conflict search,
//! in a fixed order so the first violation short-circuits. Every
//! rejection carries a machine-readable reason plus the numbers needed
//! to render a useful message.
//!
//! "Today" is an explicit parameter: the engine never reads a clock,
//! and the past-date rule compares calendar days only, so a same-day
//! booking for a later hour is never rejected as "in the past".

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use shared::models::{Reservation, ReservationSettings, ReservationStatus, weekday_index};
use shared::{BookingError, BookingResult};

/// Machine-readable admission rejection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "reason", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdmissionRejection {
    /// Requested date is strictly before today's calendar date
    DateInPast { requested: NaiveDate, today: NaiveDate },
    /// The weekday rule exists but the day is disabled
    RestaurantClosed { weekday: u8 },
    /// No rule is configured for the weekday
    NoRuleForDay { weekday: u8 },
    /// Request is further ahead than the advance-booking window
    AdvanceWindowExceeded { days_ahead: i64, max_advance_days: i64 },
    /// The day's reservation count is exhausted
    ReservationLimitReached {
        max_reservations: i32,
        current_reservations: i32,
        available_slots: i32,
    },
    /// Admitting the party would exceed the day's guest total
    GuestLimitReached {
        max_guests_total: i32,
        current_guests: i32,
        requested: i32,
        shortfall: i32,
    },
}

/// Outcome of the day-level policy check
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdmissionDecision {
    pub allowed: bool,
    pub rejection: Option<AdmissionRejection>,
}

impl AdmissionDecision {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            rejection: None,
        }
    }

    pub fn reject(rejection: AdmissionRejection) -> Self {
        Self {
            allowed: false,
            rejection: Some(rejection),
        }
    }
}

/// Validate a requested date and party size against the day-level
/// policy.
///
/// `existing` is the reservation snapshot for the restaurant; only
/// `PENDING`/`CONFIRMED` reservations on the requested date count
/// toward the limits.
pub fn check_day_admission(
    date: NaiveDate,
    party_size: i32,
    existing: &[Reservation],
    settings: &ReservationSettings,
    today: NaiveDate,
) -> BookingResult<AdmissionDecision> {
    if party_size < 1 {
        return Err(BookingError::invalid_input(format!(
            "party size must be >= 1, got {}",
            party_size
        )));
    }

    if date < today {
        return Ok(AdmissionDecision::reject(AdmissionRejection::DateInPast {
            requested: date,
            today,
        }));
    }

    let weekday = weekday_index(date.weekday());
    let rule = match settings.rule_for(date.weekday()) {
        Some(rule) if rule.enabled => rule,
        Some(_) => {
            return Ok(AdmissionDecision::reject(
                AdmissionRejection::RestaurantClosed { weekday },
            ));
        }
        None => {
            return Ok(AdmissionDecision::reject(AdmissionRejection::NoRuleForDay {
                weekday,
            }));
        }
    };

    let days_ahead = (date - today).num_days();
    if days_ahead > settings.max_advance_days {
        return Ok(AdmissionDecision::reject(
            AdmissionRejection::AdvanceWindowExceeded {
                days_ahead,
                max_advance_days: settings.max_advance_days,
            },
        ));
    }

    let counted: Vec<&Reservation> = existing
        .iter()
        .filter(|r| {
            r.date == date
                && matches!(
                    r.status,
                    ReservationStatus::Pending | ReservationStatus::Confirmed
                )
        })
        .collect();

    let current_reservations = counted.len() as i32;
    if current_reservations >= rule.max_reservations {
        return Ok(AdmissionDecision::reject(
            AdmissionRejection::ReservationLimitReached {
                max_reservations: rule.max_reservations,
                current_reservations,
                available_slots: 0,
            },
        ));
    }

    let current_guests: i32 = counted.iter().map(|r| r.party_size).sum();
    if current_guests + party_size > rule.max_guests_total {
        return Ok(AdmissionDecision::reject(
            AdmissionRejection::GuestLimitReached {
                max_guests_total: rule.max_guests_total,
                current_guests,
                requested: party_size,
                shortfall: current_guests + party_size - rule.max_guests_total,
            },
        ));
    }

    Ok(AdmissionDecision::allow())
}
