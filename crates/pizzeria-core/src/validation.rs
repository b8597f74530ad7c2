//! # Validation Module
//!
//! Input validation run before any record is created or changed.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end (menu / CLI)                                       │
//! │  ├── Parses text into numbers and category enums                       │
//! │  └── Re-prompts on bad input                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Managers (pizzeria-store)                                    │
//! │  └── THIS MODULE: rules on the already-typed values                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Record files                                                 │
//! │  └── `#`-delimited lines; a name containing `#` would corrupt them     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_TOPPINGS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Field delimiter of the record files. Free text may not contain it.
pub const RESERVED_DELIMITER: char = '#';

// =============================================================================
// String Validators
// =============================================================================

/// Rejects text that would break the one-record-per-line file format.
fn validate_storable(field: &str, value: &str) -> ValidationResult<()> {
    if value.contains(RESERVED_DELIMITER) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("must not contain '{}'", RESERVED_DELIMITER),
        });
    }

    if value.contains(['\n', '\r']) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a single line".to_string(),
        });
    }

    Ok(())
}

/// Validates a pizza or drink name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most [`MAX_NAME_LEN`] characters
/// - No `#`, no line breaks
///
/// ## Example
/// ```rust
/// use pizzeria_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Pepperoni").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// assert!(validate_item_name("Pepperoni #2").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    validate_storable("name", name)
}

/// Validates a customer email.
///
/// The format is not checked beyond being a storable,
/// non-empty single line.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if email.chars().count() > MAX_EMAIL_LEN {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: MAX_EMAIL_LEN,
        });
    }

    validate_storable("email", email)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a menu price. Zero is allowed (free items).
///
/// ## Example
/// ```rust
/// use pizzeria_core::money::Money;
/// use pizzeria_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a topping count: `0..=MAX_TOPPINGS`.
pub fn validate_topping_count(count: u32) -> ValidationResult<()> {
    if count > MAX_TOPPINGS {
        return Err(ValidationError::OutOfRange {
            field: "topping count".to_string(),
            min: 0,
            max: MAX_TOPPINGS as i64,
        });
    }

    Ok(())
}

/// Validates a report limit (top-N).
pub fn validate_limit(limit: usize) -> ValidationResult<()> {
    if limit == 0 {
        return Err(ValidationError::OutOfRange {
            field: "limit".to_string(),
            min: 1,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Hawaiian").is_ok());
        assert!(validate_item_name("  Hawaiian  ").is_ok());

        assert!(matches!(
            validate_item_name(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_item_name(&"x".repeat(MAX_NAME_LEN + 1)),
            Err(ValidationError::TooLong { .. })
        ));
        assert!(matches!(
            validate_item_name("Meat#Lovers"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(validate_item_name("two\nlines").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@x.com").is_ok());
        // Format is not checked
        assert!(validate_email("not-an-email").is_ok());

        assert!(validate_email(" ").is_err());
        assert!(validate_email("a#b@x.com").is_err());
        assert!(validate_email(&"e".repeat(MAX_EMAIL_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_numbers() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(-5)).is_err());

        assert!(validate_topping_count(0).is_ok());
        assert!(validate_topping_count(MAX_TOPPINGS).is_ok());
        assert!(validate_topping_count(MAX_TOPPINGS + 1).is_err());

        assert!(validate_limit(1).is_ok());
        assert!(validate_limit(0).is_err());
    }
}
