//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Change-Count Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              How Mutations Report Their Outcome                         │
//! │                                                                         │
//! │  update(id, draft) / delete(id)                                        │
//! │       │                                                                 │
//! │       ├── row matched  ──► Ok(1)   (caller maps to success)            │
//! │       │                                                                 │
//! │       ├── no row       ──► Ok(0)   (caller maps to "not found")        │
//! │       │                                                                 │
//! │       └── storage fail ──► Err(DbError)  (caller maps to server error) │
//! │                                                                         │
//! │  "Target doesn't exist" is a NORMAL outcome, not an error.             │
//! │  This distinction is the central contract the API layer depends on.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use shopstock_core::{Product, ProductDraft};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let id = repo.insert(&draft).await?;
/// let changes = repo.update(id, &new_draft).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product and returns its assigned id.
    ///
    /// Field presence is a caller precondition: the draft type already
    /// carries non-null `name`, `price`, `quantity`. The store does not
    /// second-guess values (negative price/quantity are accepted).
    ///
    /// ## Returns
    /// * `Ok(id)` - The rowid SQLite assigned to the new product
    /// * `Err(DbError)` - Constraint violation or I/O failure
    pub async fn insert(&self, draft: &ProductDraft) -> DbResult<i64> {
        debug!(name = %draft.name, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, price, quantity, category)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&draft.name)
        .bind(draft.price)
        .bind(draft.quantity)
        .bind(&draft.category)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Product inserted");
        Ok(id)
    }

    /// Returns every product currently in the table.
    ///
    /// Order is natural storage order and not guaranteed stable. An empty
    /// table yields an empty vec, not an error.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, quantity, category
            FROM products
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Replaces all mutable fields of the product matching `id`.
    ///
    /// Never partially updates a subset of fields: the draft carries the
    /// full new values and all four columns are written in one statement.
    ///
    /// ## Returns
    /// * `Ok(1)` - Exactly one row was updated
    /// * `Ok(0)` - No row matched `id` (normal outcome, not an error)
    /// * `Err(DbError)` - The operation itself failed
    pub async fn update(&self, id: i64, draft: &ProductDraft) -> DbResult<u64> {
        debug!(id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = ?2, price = ?3, quantity = ?4, category = ?5
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&draft.name)
        .bind(draft.price)
        .bind(draft.quantity)
        .bind(&draft.category)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Removes the product matching `id`.
    ///
    /// ## Returns
    /// * `Ok(1)` - One row was removed
    /// * `Ok(0)` - No row matched `id` (normal outcome, not an error)
    /// * `Err(DbError)` - The operation itself failed
    pub async fn delete(&self, id: i64) -> DbResult<u64> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Counts total products (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
