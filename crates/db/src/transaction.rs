use futures::future::BoxFuture;
use sqlx::PgConnection;

use crate::DbPool;

/// Run `f` inside a single database transaction.
///
/// Acquires a pooled connection and begins a transaction, hands the
/// connection to `f`, then commits when `f` returns `Ok` and rolls back when
/// it returns `Err`. The connection goes back to the pool on every path; if
/// the future is dropped mid-flight (panic, cancelled request) the
/// `sqlx::Transaction` drop guard rolls back instead.
///
/// ```ignore
/// let category = with_transaction(&pool, move |conn| {
///     Box::pin(async move { CategoryRepo::create(conn, &name).await })
/// })
/// .await?;
/// ```
pub async fn with_transaction<T, E, F>(pool: &DbPool, f: F) -> Result<T, E>
where
    F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, Result<T, E>>,
    E: From<sqlx::Error>,
{
    let mut tx = pool.begin().await?;

    match f(&mut *tx).await {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, "Transaction rollback failed");
            } else {
                tracing::debug!("Transaction rolled back");
            }
            Err(err)
        }
    }
}
