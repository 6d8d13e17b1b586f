//! Data models
//!
//! Shared between the booking engine and its callers (HTTP layer,
//! persistence write path). All IDs are `i64`; timestamps are epoch
//! milliseconds.

pub mod dining_table;
pub mod maintenance;
pub mod reservation;
pub mod settings;
pub mod zone;

// Re-exports
pub use dining_table::*;
pub use maintenance::*;
pub use reservation::*;
pub use settings::*;
pub use zone::*;
