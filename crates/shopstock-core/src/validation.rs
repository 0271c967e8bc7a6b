//! # Validation Module
//!
//! Input validation rules for product payloads.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP handler (inventory-api)                                 │
//! │  ├── Field presence checks (Option fields on the DTO)                  │
//! │  └── THIS MODULE: value validation                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Database (SQLite)                                            │
//! │  └── NOT NULL constraints on name, price, quantity                     │
//! │                                                                         │
//! │  Defense in depth: each layer catches different mistakes               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Deliberately NOT validated
//! Negative price and negative quantity pass through unrejected. The store
//! accepts them and the behavior is documented, pending product-owner review.
//! Likewise an empty-string category is accepted and stored verbatim; only an
//! absent category means "no category".

use crate::error::{ValidationError, ValidationResult};
use crate::{MAX_CATEGORY_LEN, MAX_PRODUCT_NAME_LEN};

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most [`MAX_PRODUCT_NAME_LEN`] characters
///
/// ## Example
/// ```rust
/// use shopstock_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Kettle").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates an optional category label.
///
/// `None` is always valid. An empty string is valid too and stored verbatim.
pub fn validate_category(category: Option<&str>) -> ValidationResult<()> {
    if let Some(category) = category {
        if category.len() > MAX_CATEGORY_LEN {
            return Err(ValidationError::TooLong {
                field: "category".to_string(),
                max: MAX_CATEGORY_LEN,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
