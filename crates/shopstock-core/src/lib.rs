//! # shopstock-core: Pure Domain Types for ShopStock
//!
//! This crate holds the domain types shared by the persistence layer and the
//! HTTP API, as pure data with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       ShopStock Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  inventory-api (Axum)                           │   │
//! │  │    GET /products ──► POST /products ──► PUT/DELETE /:id        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ shopstock-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐  ┌──────────────┐  ┌──────────────┐        │   │
//! │  │   │    types     │  │  validation  │  │    error     │        │   │
//! │  │   │   Product    │  │    rules     │  │ Validation-  │        │   │
//! │  │   │ ProductDraft │  │    checks    │  │    Error     │        │   │
//! │  │   └──────────────┘  └──────────────┘  └──────────────┘        │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  shopstock-db (Database Layer)                  │   │
//! │  │             SQLite queries, migrations, repositories            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductDraft)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::{Product, ProductDraft};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length accepted for a product name.
///
/// ## Why a constant?
/// Keeps oversized payloads out of the database without making the limit
/// configurable before anyone has asked for that.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Maximum length accepted for a category label.
pub const MAX_CATEGORY_LEN: usize = 100;
