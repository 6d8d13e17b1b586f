//! Single-Table Assignment
//!
//! Pure decision function: filter candidate tables for the party and
//! window, score the survivors, and return the best match plus a short
//! list of alternatives for manual override. An empty survivor set is
//! a normal negative result the caller presents to the guest, never an
//! error.

use serde::Serialize;
use shared::models::{DiningTable, MaintenanceRecord, Reservation, TablePreferences, Zone};
use shared::{BookingError, BookingResult};

use crate::availability::is_table_free;
use crate::scoring::score_table;
use crate::slot::TimeSlot;

pub const REASON_NO_TABLES: &str = "no tables available";

/// A scored candidate, kept for the alternatives list
#[derive(Debug, Clone, Serialize)]
pub struct ScoredTable {
    pub table: DiningTable,
    pub score: f64,
}

/// Result of a single-table assignment attempt
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentOutcome {
    pub assigned: bool,
    pub table: Option<DiningTable>,
    pub score: Option<f64>,
    /// Next-best candidates, bounded, for manual override in the UI
    pub alternatives: Vec<ScoredTable>,
    pub reason: Option<String>,
}

impl AssignmentOutcome {
    fn no_tables() -> Self {
        Self {
            assigned: false,
            table: None,
            score: None,
            alternatives: Vec::new(),
            reason: Some(REASON_NO_TABLES.to_string()),
        }
    }
}

/// Pick the best-scoring free table for the party.
///
/// Ties keep the candidate-list order (stable sort); this carries no
/// load-balancing intent, it is simply deterministic.
pub fn assign_best_table(
    tables: &[DiningTable],
    party_size: i32,
    preferences: &TablePreferences,
    slot: &TimeSlot,
    reservations: &[Reservation],
    maintenance: &[MaintenanceRecord],
    zones: &[Zone],
    alternative_limit: usize,
) -> BookingResult<AssignmentOutcome> {
    if party_size < 1 {
        return Err(BookingError::invalid_input(format!(
            "party size must be >= 1, got {}",
            party_size
        )));
    }

    let mut candidates: Vec<ScoredTable> = tables
        .iter()
        .filter(|t| {
            t.is_active
                && t.capacity >= party_size
                && party_size >= t.min_capacity
                && is_table_free(t.id, slot, reservations, maintenance)
        })
        .map(|t| ScoredTable {
            table: t.clone(),
            score: score_table(t, party_size, preferences, zones),
        })
        .collect();

    if candidates.is_empty() {
        return Ok(AssignmentOutcome::no_tables());
    }

    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    let best = candidates.remove(0);
    candidates.truncate(alternative_limit);

    Ok(AssignmentOutcome {
        assigned: true,
        table: Some(best.table),
        score: Some(best.score),
        alternatives: candidates,
        reason: None,
    })
}
