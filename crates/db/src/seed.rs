//! First-run seeding of default categories.

use notekeeper_core::catalog::DEFAULT_CATEGORIES;
use sqlx::PgConnection;

use crate::repositories::CategoryRepo;
use crate::{with_transaction, DbPool};

/// Insert [`DEFAULT_CATEGORIES`] if the `categories` table is empty.
///
/// Runs in one transaction, so either every default lands or none does.
/// Returns the number of categories inserted (zero when data already exists).
pub async fn seed_default_categories(pool: &DbPool) -> Result<usize, sqlx::Error> {
    with_transaction(pool, |conn| Box::pin(insert_defaults(conn))).await
}

async fn insert_defaults(conn: &mut PgConnection) -> Result<usize, sqlx::Error> {
    if CategoryRepo::count(conn).await? > 0 {
        return Ok(0);
    }
    for name in DEFAULT_CATEGORIES {
        CategoryRepo::create(conn, name).await?;
    }
    Ok(DEFAULT_CATEGORIES.len())
}
