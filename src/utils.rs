use diesel::SqliteConnection;

use crate::DbPool;
use crate::data::models::StoreError;

/// Runs blocking diesel work on a pooled connection off the async executor.
pub async fn run_blocking<T, F>(pool: &DbPool, work: F) -> Result<T, StoreError>
where
    F: FnOnce(&mut SqliteConnection) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut conn = pool.get()?;
        work(&mut conn)
    })
    .await?
}

/// Negative limits would mean "no limit" to SQLite.
pub fn clamp_limit(limit: i64) -> i64 {
    limit.max(0)
}
