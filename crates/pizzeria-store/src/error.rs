//! # Store Error Types
//!
//! Error types for storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / RecordError (one bad line)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds path, line number, entity, id         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Front end picks a message per variant                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fatal vs Reported
//! `Io` and `Malformed` abort the operation before anything is written.
//! The lookup and state variants (`NotFound`, `AlreadyRemoved`, ...) are
//! ordinary outcomes of a request; nothing has been modified when they are
//! returned.

use pizzeria_core::{CoreError, ValidationError};
use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Record Error
// =============================================================================

/// Why a single persisted line could not be decoded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected {expected} fields, found {found}")]
    WrongFieldCount { expected: usize, found: usize },

    #[error("invalid {field} '{value}': {reason}")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl RecordError {
    pub fn invalid(field: &'static str, value: &str, reason: impl ToString) -> Self {
        RecordError::InvalidField {
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

// =============================================================================
// Store Error
// =============================================================================

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a record file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of a record file could not be decoded. The whole load fails.
    #[error("Malformed record at {}:{line}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        #[source]
        source: RecordError,
    },

    /// No record with this id.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: u32 },

    /// Soft-deleting a record that is already soft-deleted.
    #[error("{entity} {id} is already removed")]
    AlreadyRemoved { entity: &'static str, id: u32 },

    /// Restoring a record that was never removed.
    #[error("{entity} {id} is not removed")]
    NotRemoved { entity: &'static str, id: u32 },

    /// An order referenced a sold-out or removed menu item.
    #[error("{entity} {id} is not available: {reason}")]
    Unavailable {
        entity: &'static str,
        id: u32,
        reason: &'static str,
    },

    /// Completing an order that is already complete.
    #[error("Order {id} is already complete")]
    OrderAlreadyComplete { id: u32 },

    /// An availability listing matched nothing.
    #[error("No {entity} available")]
    NoneAvailable { entity: &'static str },

    /// An email lookup matched no orders.
    #[error("No orders found for {email}")]
    NoOrdersForCustomer { email: String },

    /// Failed to load the store configuration.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save the store configuration.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    /// Configuration values are inconsistent.
    #[error("Invalid store configuration: {0}")]
    InvalidConfig(String),

    /// Domain error from pizzeria-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Caller-supplied value rejected before any change.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Creates a NotFound error.
    pub fn not_found(entity: &'static str, id: u32) -> Self {
        StoreError::NotFound { entity, id }
    }

    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for "no such record" outcomes (id or email unknown).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::NotFound { .. } | StoreError::NoOrdersForCustomer { .. }
        )
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(err: toml::de::Error) -> Self {
        StoreError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for StoreError {
    fn from(err: toml::ser::Error) -> Self {
        StoreError::ConfigSaveFailed(err.to_string())
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::not_found("Pizza", 4).to_string(),
            "Pizza not found: 4"
        );
        assert_eq!(
            StoreError::AlreadyRemoved {
                entity: "Drink",
                id: 2
            }
            .to_string(),
            "Drink 2 is already removed"
        );

        let err = StoreError::Malformed {
            path: PathBuf::from("pizzas.txt"),
            line: 3,
            source: RecordError::WrongFieldCount {
                expected: 7,
                found: 5,
            },
        };
        assert_eq!(
            err.to_string(),
            "Malformed record at pizzas.txt:3: expected 7 fields, found 5"
        );
    }

    #[test]
    fn test_not_found_classification() {
        assert!(StoreError::not_found("Order", 1).is_not_found());
        assert!(StoreError::NoOrdersForCustomer {
            email: "a@x.com".into()
        }
        .is_not_found());
        assert!(!StoreError::OrderAlreadyComplete { id: 1 }.is_not_found());
    }
}
