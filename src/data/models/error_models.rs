use std::path::PathBuf;

use diesel::result::Error as DieselError;
use thiserror::Error;

// Store access errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] DieselError),
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

// Errors for a single seed file; the importer skips the file and moves on
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
