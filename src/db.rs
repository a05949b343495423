// Store bootstrap: writable database file, connection pool and schema.

use std::fs;
use std::path::Path;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

use crate::DbPool;
use crate::data::models::StoreError;

/// Statements run on every open; all of them are idempotent.
const SCHEMA: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS entries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        word TEXT NOT NULL DEFAULT '',
        definition TEXT NOT NULL DEFAULT '',
        is_favorite INTEGER NOT NULL DEFAULT 0
    )"#,
    r#"CREATE INDEX IF NOT EXISTS idx_entries_word ON entries(word COLLATE NOCASE)"#,
    r#"CREATE INDEX IF NOT EXISTS idx_entries_favorite ON entries(is_favorite)"#,
];

const PRAGMAS: &str = "PRAGMA busy_timeout = 5000; PRAGMA journal_mode = WAL; PRAGMA foreign_keys = ON;";

#[derive(Debug)]
struct SqlitePragmas;

impl r2d2::CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(PRAGMAS)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

#[derive(QueryableByName)]
struct TableCount {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    count: i64,
}

/// Makes sure a writable database exists at `db_path`.
///
/// When the file is missing and a bundled template is available, the template
/// is copied over and `true` is returned. Otherwise an empty database is
/// created on first connect.
pub fn prepare_database_file(db_path: &Path, template: Option<&Path>) -> Result<bool, StoreError> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    if db_path.exists() {
        return Ok(false);
    }

    match template {
        Some(template) if template.exists() => {
            fs::copy(template, db_path)?;
            log::info!(
                "Copied bundled database {} to {}",
                template.display(),
                db_path.display()
            );
            return Ok(true);
        }
        Some(template) => {
            log::warn!(
                "Bundled database {} not found, starting with an empty store",
                template.display()
            );
        }
        None => log::debug!("No bundled database configured, creating {}", db_path.display()),
    }

    Ok(false)
}

/// Whether the dictionary table is already present.
pub fn has_entries_table(conn: &mut SqliteConnection) -> Result<bool, StoreError> {
    let found = diesel::sql_query(
        "SELECT COUNT(*) AS count FROM sqlite_master WHERE type = 'table' AND name = 'entries'",
    )
    .get_result::<TableCount>(conn)?;
    Ok(found.count > 0)
}

/// Creates the dictionary table and its indexes if they are missing.
pub fn ensure_schema(conn: &mut SqliteConnection) -> Result<(), StoreError> {
    for statement in SCHEMA {
        diesel::sql_query(*statement).execute(conn)?;
    }
    Ok(())
}

pub fn build_pool(db_path: &Path, max_size: u32) -> Result<DbPool, StoreError> {
    let manager = ConnectionManager::<SqliteConnection>::new(db_path.to_string_lossy());
    let pool = Pool::builder()
        .max_size(max_size.max(1))
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)?;
    Ok(pool)
}

/// Opens the store: writable copy, pool, schema. Any failure here is fatal for the app.
pub fn open_store(
    db_path: &Path,
    template: Option<&Path>,
    pool_size: u32,
) -> Result<DbPool, StoreError> {
    let copied = prepare_database_file(db_path, template)?;
    let pool = build_pool(db_path, pool_size)?;

    let mut conn = pool.get()?;
    if copied && !has_entries_table(&mut conn)? {
        log::warn!(
            "Bundled database copied to {} has no entries table, its rows will not be used",
            db_path.display()
        );
    }
    ensure_schema(&mut conn)?;

    log::info!("Dictionary store opened at {}", db_path.display());
    Ok(pool)
}
