//! # Error Types
//!
//! Domain-specific error types for pizzeria-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pizzeria-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  pizzeria-store errors (separate crate)                                │
//! │  ├── RecordError      - One persisted line could not be decoded        │
//! │  └── StoreError       - Storage, lookup and state-transition failures  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → Front end            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Two records of the same kind share an id.
    ///
    /// ## When This Occurs
    /// - A hand-edited record file repeats an id
    /// - A caller pushes a record whose id is already taken
    #[error("Duplicate {entity} id: {id}")]
    DuplicateId { entity: &'static str, id: u32 },

    /// Every id up to `u32::MAX` is taken, so nothing more can be added.
    #[error("No {entity} ids left to assign")]
    IdSpaceExhausted { entity: &'static str },

    /// Text does not name one of a fixed set of categories
    /// (crust type, pizza size, drink size).
    #[error("Unknown {category}: '{value}'")]
    UnknownCategory {
        category: &'static str,
        value: String,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates an UnknownCategory error.
    pub fn unknown_category(category: &'static str, value: impl Into<String>) -> Self {
        CoreError::UnknownCategory {
            category,
            value: value.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller-supplied values don't meet requirements.
/// They are raised before any record is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. an unparsable price, a reserved character).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
