//! Table Scoring
//!
//! Weighted fitness of a candidate table for a party and preference
//! set, on a 0-100 scale. Only the relative order matters to the
//! assignment algorithm; the absolute scale is for display. Unmet
//! preferences contribute zero, never a penalty.

use shared::models::{DiningTable, TablePreferences, Zone};

/// Weight shares of the total score
const CAPACITY_WEIGHT: f64 = 40.0;
const ZONE_WEIGHT: f64 = 30.0;
const SHAPE_WEIGHT: f64 = 10.0;
const LOCATION_WEIGHT: f64 = 10.0;
const ACCESSIBLE_WEIGHT: f64 = 10.0;

/// Score a candidate table for a party.
///
/// Callers must pre-filter: a table with `capacity < party_size` or
/// `party_size < min_capacity` never reaches scoring.
pub fn score_table(
    table: &DiningTable,
    party_size: i32,
    preferences: &TablePreferences,
    zones: &[Zone],
) -> f64 {
    let mut score = capacity_fit(table.capacity, party_size) * CAPACITY_WEIGHT;

    if preferences.zone_id == Some(table.zone_id) {
        score += ZONE_WEIGHT;
    }

    if let (Some(preferred), Some(shape)) = (preferences.shape, table.shape)
        && preferred == shape
    {
        score += SHAPE_WEIGHT;
    }

    if let Some(wanted) = &preferences.location
        && let Some(zone_name) = zone_name_of(zones, table.zone_id)
        && zone_name.to_lowercase().contains(&wanted.to_lowercase())
    {
        score += LOCATION_WEIGHT;
    }

    if preferences.accessible && table.is_accessible {
        score += ACCESSIBLE_WEIGHT;
    }

    score
}

/// Closeness of table capacity to party size: 1.0 for an exact fit,
/// approaching 0 as the table gets oversized.
fn capacity_fit(capacity: i32, party_size: i32) -> f64 {
    if capacity <= 0 {
        return 0.0;
    }
    1.0 - (capacity - party_size) as f64 / capacity as f64
}

fn zone_name_of(zones: &[Zone], zone_id: i64) -> Option<&str> {
    zones
        .iter()
        .find(|z| z.id == zone_id)
        .map(|z| z.name.as_str())
}
