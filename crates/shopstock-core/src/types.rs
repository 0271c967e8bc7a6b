//! # Domain Types
//!
//! Core domain types for the shop inventory.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                │
//! │  │      Product        │        │    ProductDraft     │                │
//! │  │  ─────────────────  │        │  ─────────────────  │                │
//! │  │  id (i64, rowid)    │  ◄───  │  name               │                │
//! │  │  name               │ insert │  price              │                │
//! │  │  price              │        │  quantity           │                │
//! │  │  quantity           │        │  category?          │                │
//! │  │  category?          │        └─────────────────────┘                │
//! │  └─────────────────────┘                                               │
//! │                                                                         │
//! │  Product    = a persisted row (id assigned by the store)               │
//! │  ProductDraft = the caller-supplied fields of a create/update          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is assigned by SQLite (`INTEGER PRIMARY KEY AUTOINCREMENT`) at insert
//! time, is unique, monotonically increasing, and immutable thereafter.
//! Callers never choose ids.

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A product persisted in the inventory.
///
/// Mirrors the `products` table one-to-one. `category` is genuinely optional:
/// an absent category is stored as SQL NULL, never as an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier, assigned by the store on insert.
    pub id: i64,

    /// Display name. Always present on a persisted row.
    pub name: String,

    /// Unit price. The store does not enforce a sign or range; business
    /// sanity checks belong to the API layer.
    pub price: f64,

    /// Units in stock. Negative values are accepted at the store level.
    pub quantity: i64,

    /// Optional category label.
    pub category: Option<String>,
}

// =============================================================================
// Product Draft
// =============================================================================

/// The mutable fields of a product, as supplied by a caller.
///
/// Used for both create and update: updates replace all four fields
/// atomically as one row update, so the caller always supplies the full new
/// values. Partial field updates are not supported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub category: Option<String>,
}

impl ProductDraft {
    /// Creates a draft from its parts.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        category: Option<String>,
    ) -> Self {
        ProductDraft {
            name: name.into(),
            price,
            quantity,
            category,
        }
    }

    /// Materializes the draft into a [`Product`] with the given id.
    ///
    /// ## Usage
    /// Called by the API layer after an insert to echo the created record
    /// back to the client without a second read.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            category: self.category,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_into_product_keeps_fields() {
        let draft = ProductDraft::new("Kettle", 12.99, 50, Some("Kitchen".to_string()));
        let product = draft.clone().into_product(7);

        assert_eq!(product.id, 7);
        assert_eq!(product.name, draft.name);
        assert_eq!(product.price, draft.price);
        assert_eq!(product.quantity, draft.quantity);
        assert_eq!(product.category, draft.category);
    }

    #[test]
    fn test_absent_category_serializes_as_null() {
        let product = ProductDraft::new("Mug", 4.5, 10, None).into_product(1);
        let json = serde_json::to_value(&product).unwrap();

        assert!(json["category"].is_null());
        assert_eq!(json["name"], "Mug");
    }
}
