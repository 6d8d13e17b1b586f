//! Multi-Table Combination Optimizer
//!
//! For parties too large for any single table: bounded depth-first
//! search over index-increasing table subsets whose summed capacity
//! covers the party. Fewer tables rank first - they are easier to
//! serve. Preference scoring is deliberately not applied at this
//! stage.
//!
//! The search is exponential but bounded: branching factor is the
//! table count, depth is capped by `max_tables`, which is acceptable
//! for the tens of tables a single restaurant carries.

use shared::models::DiningTable;
use shared::{BookingError, BookingResult};

/// How many combinations are reported back
pub const COMBINATION_LIMIT: usize = 3;

/// Find up to [`COMBINATION_LIMIT`] table combinations covering
/// `party_size`, each using at most `max_tables` tables, sorted by
/// ascending table count.
///
/// `tables` is the already availability-filtered candidate set; the
/// per-table `capacity >= party_size` constraint deliberately does not
/// apply here.
pub fn find_table_combinations(
    tables: &[DiningTable],
    party_size: i32,
    max_tables: usize,
) -> BookingResult<Vec<Vec<DiningTable>>> {
    if party_size < 1 {
        return Err(BookingError::invalid_input(format!(
            "party size must be >= 1, got {}",
            party_size
        )));
    }
    if max_tables < 1 {
        return Err(BookingError::invalid_input("max_tables must be >= 1"));
    }

    let mut found = search(tables, 0, party_size, max_tables, &[]);
    found.sort_by_key(|combo| combo.len());
    found.truncate(COMBINATION_LIMIT);

    Ok(found
        .into_iter()
        .map(|combo| combo.iter().map(|&i| tables[i].clone()).collect())
        .collect())
}

/// Depth-first search over subsets with increasing indices.
///
/// `prefix` is the immutable partial solution: each branch extends a
/// copy, so no accumulator state is shared between branches. Excluding
/// indices below `start` rules out duplicate permutations of the same
/// subset.
fn search(
    tables: &[DiningTable],
    start: usize,
    remaining: i32,
    depth_left: usize,
    prefix: &[usize],
) -> Vec<Vec<usize>> {
    let mut found = Vec::new();
    for i in start..tables.len() {
        let capacity = tables[i].capacity;
        if capacity <= 0 {
            continue;
        }
        let extended: Vec<usize> = prefix.iter().copied().chain([i]).collect();
        if capacity >= remaining {
            // this table alone covers the remaining party: terminal
            found.push(extended);
        } else if depth_left > 1 {
            found.extend(search(tables, i + 1, remaining - capacity, depth_left - 1, &extended));
        }
    }
    found
}
