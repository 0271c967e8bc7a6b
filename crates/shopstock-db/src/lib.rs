//! # shopstock-db: Database Layer for ShopStock
//!
//! This crate provides database access for the shop inventory service.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       ShopStock Data Flow                               │
//! │                                                                         │
//! │  HTTP handler (POST /products)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   shopstock-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (product.rs)  │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ ProductRepo   │    │ 001_products │  │   │
//! │  │   │ Management    │    │               │    │     .sql     │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │     ./shop.db (durable)   /   ./shop_test.db (ephemeral)       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Database Lifecycles
//!
//! - **Durable**: opened once at process start via [`Database::new`] with a
//!   caller-chosen path; schema creation is idempotent.
//! - **Ephemeral**: [`Database::ephemeral`] deletes any pre-existing database
//!   at the fixed test location and recreates it empty, so every test run
//!   starts from zero rows.
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shopstock_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./shop.db")).await?;
//! let id = db.products().insert(&draft).await?;
//! let all = db.products().list_all().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig, EPHEMERAL_DB_PATH};

pub use repository::product::ProductRepository;
