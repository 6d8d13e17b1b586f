//! Reservation Settings Model
//!
//! Restaurant-wide booking policy, read-only to the engine. The caller
//! loads it once per admission check and passes it in; the engine holds
//! no global state. [`ReservationSettings::default`] is the documented
//! fallback used when no settings record exists.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-weekday booking rule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekdayRule {
    /// Disabled days reject every request
    pub enabled: bool,
    /// Maximum reservations accepted for the day
    pub max_reservations: i32,
    /// Maximum summed party size accepted for the day
    pub max_guests_total: i32,
    /// When set, assignment only considers these tables
    pub tables_available: Option<Vec<i64>>,
}

impl Default for WeekdayRule {
    fn default() -> Self {
        Self {
            enabled: true,
            max_reservations: DEFAULT_MAX_RESERVATIONS,
            max_guests_total: DEFAULT_MAX_GUESTS_TOTAL,
            tables_available: None,
        }
    }
}

const DEFAULT_MAX_RESERVATIONS: i32 = 20;
const DEFAULT_MAX_GUESTS_TOTAL: i32 = 100;
const DEFAULT_MAX_ADVANCE_DAYS: i64 = 30;

/// Restaurant-wide reservation settings (singleton per restaurant)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservationSettings {
    /// How far ahead bookings are accepted, in days
    pub max_advance_days: i64,
    /// New reservations start `CONFIRMED` instead of `PENDING`
    #[serde(default)]
    pub auto_confirm: bool,
    /// Fallback location preference applied when a request has none
    pub default_preferred_location: Option<String>,
    /// Day-of-week rules, keyed 0=Sunday .. 6=Saturday
    #[serde(default)]
    pub day_rules: HashMap<u8, WeekdayRule>,
}

impl ReservationSettings {
    /// Rule for a weekday, if one is configured
    pub fn rule_for(&self, weekday: Weekday) -> Option<&WeekdayRule> {
        self.day_rules.get(&weekday_index(weekday))
    }
}

impl Default for ReservationSettings {
    /// Fallback policy when no settings record exists: every day open,
    /// 20 reservations / 100 guests per day, bookable 30 days ahead.
    fn default() -> Self {
        let day_rules = (0u8..7).map(|d| (d, WeekdayRule::default())).collect();
        Self {
            max_advance_days: DEFAULT_MAX_ADVANCE_DAYS,
            auto_confirm: false,
            default_preferred_location: None,
            day_rules,
        }
    }
}

/// Weekday index, 0=Sunday .. 6=Saturday
pub fn weekday_index(weekday: Weekday) -> u8 {
    match weekday {
        Weekday::Sun => 0,
        Weekday::Mon => 1,
        Weekday::Tue => 2,
        Weekday::Wed => 3,
        Weekday::Thu => 4,
        Weekday::Fri => 5,
        Weekday::Sat => 6,
    }
}
