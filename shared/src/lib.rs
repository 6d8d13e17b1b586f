//! Shared types for the reservation system
//!
//! Common types used across crates: data models, the unified error
//! type, and the result alias.

pub mod error;
pub mod models;

// Re-exports
pub use error::{BookingError, BookingResult};
pub use serde::{Deserialize, Serialize};
