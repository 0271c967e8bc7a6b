//! Request/response DTOs and mapping to/from domain types.

use serde::Deserialize;

use shopstock_core::{validation, ProductDraft, ValidationError};

// -------------------------
// Request DTOs
// -------------------------

/// Inbound body for `POST /products` and `PUT /products/{id}`.
///
/// Every field is an `Option` so presence is checked explicitly in
/// [`ProductPayload::into_draft`] rather than surfacing as a deserialization
/// failure: clients get a single 400 with a "Missing required fields"
/// message for any absent field.
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    pub category: Option<String>,
}

/// The message clients match on when required fields are absent.
pub const MISSING_FIELDS: &str = "Missing required fields: name, price, or quantity";

impl ProductPayload {
    /// Validates the payload and converts it into a store-ready draft.
    ///
    /// ## Rules
    /// - `name` present and non-empty (after trimming), `price` and
    ///   `quantity` present → otherwise `Err(None)`, the missing-fields case
    /// - value-level rules (length limits) → `Err(Some(ValidationError))`
    /// - `category` absent or null → stored as NULL; an empty string is
    ///   accepted and stored verbatim
    pub fn into_draft(self) -> Result<ProductDraft, Option<ValidationError>> {
        let (name, price, quantity) = match (self.name, self.price, self.quantity) {
            (Some(name), Some(price), Some(quantity)) if !name.trim().is_empty() => {
                (name, price, quantity)
            }
            _ => return Err(None),
        };

        validation::validate_product_name(&name).map_err(Some)?;
        validation::validate_category(self.category.as_deref()).map_err(Some)?;

        Ok(ProductDraft::new(name, price, quantity, self.category))
    }
}
