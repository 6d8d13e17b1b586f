//! Unified error type for the booking engine
//!
//! Policy rejections ("restaurant closed that day") and empty
//! availability ("no table fits") are **not** errors - they are
//! structured results the caller presents to the end user. An error
//! here means caller misuse (malformed input, illegal status
//! transition), a missing entity, or a failing storage collaborator,
//! and must surface loudly instead of being swallowed.

use thiserror::Error;

/// Booking engine error
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookingError {
    /// Malformed input, rejected before any search runs
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Illegal lifecycle transition, names both states
    #[error("Invalid transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    /// Referenced entity does not exist
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Storage collaborator failed
    #[error("Store error: {message}")]
    Store { message: String },
}

impl BookingError {
    // ========== Convenient constructors ==========

    /// Create an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an InvalidTransition error
    pub fn invalid_transition(from: impl ToString, to: impl ToString) -> Self {
        Self::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a Store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}

/// Result type for booking operations
pub type BookingResult<T> = Result<T, BookingError>;
