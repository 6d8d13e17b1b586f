//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Table shape, matched against guest preferences
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableShape {
    Rectangle,
    Circle,
    Square,
}

/// Derived table status
///
/// Never stored independently - projected from reservations and
/// maintenance records at query time. `Maintenance` wins over any
/// reservation overlap; a `SEATED` reservation implies `Occupied`;
/// any other active reservation implies `Reserved`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    #[default]
    Available,
    Reserved,
    Occupied,
    Maintenance,
}

impl TableStatus {
    /// Whether a direct transition to `next` is legal
    pub fn can_transition_to(&self, next: TableStatus) -> bool {
        matches!(
            (self, next),
            (TableStatus::Available, TableStatus::Reserved)
                | (TableStatus::Available, TableStatus::Occupied)
                | (TableStatus::Available, TableStatus::Maintenance)
                | (TableStatus::Reserved, TableStatus::Occupied)
                | (TableStatus::Reserved, TableStatus::Available)
                | (TableStatus::Occupied, TableStatus::Available)
                | (TableStatus::Maintenance, TableStatus::Available)
        )
    }
}

impl std::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TableStatus::Available => "AVAILABLE",
            TableStatus::Reserved => "RESERVED",
            TableStatus::Occupied => "OCCUPIED",
            TableStatus::Maintenance => "MAINTENANCE",
        };
        write!(f, "{}", s)
    }
}

/// Dining table entity (桌台)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: i64,
    pub name: String,
    /// Zone reference
    pub zone_id: i64,
    /// Maximum guests
    pub capacity: i32,
    /// Smallest party this table may be assigned to
    #[serde(default = "default_min_capacity")]
    pub min_capacity: i32,
    pub shape: Option<TableShape>,
    #[serde(default)]
    pub is_accessible: bool,
    /// Inactive tables are retired, never hard-deleted while
    /// reservations reference them
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_min_capacity() -> i32 {
    1
}

fn default_true() -> bool {
    true
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub name: String,
    pub zone_id: i64,
    pub capacity: Option<i32>,
    pub min_capacity: Option<i32>,
    pub shape: Option<TableShape>,
    pub is_accessible: Option<bool>,
}

/// Update dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableUpdate {
    pub name: Option<String>,
    pub zone_id: Option<i64>,
    pub capacity: Option<i32>,
    pub min_capacity: Option<i32>,
    pub shape: Option<TableShape>,
    pub is_accessible: Option<bool>,
    pub is_active: Option<bool>,
}
