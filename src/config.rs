use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use crate::features::import::DEFAULT_BATCH_SIZE;

/// Runtime settings, read from the environment (and `.env` via dotenv in `main`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub template_db_path: Option<PathBuf>,
    pub seed_dir: PathBuf,
    pub seed_prefix: String,
    pub import_batch_size: usize,
    pub pool_size: u32,
    pub bind_addr: String,
    pub search_limit: i64,
    pub list_limit: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            database_path: lookup("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/mondict.db")),
            template_db_path: lookup("TEMPLATE_DB_PATH")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            seed_dir: lookup("SEED_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/seed")),
            seed_prefix: lookup("SEED_PREFIX").unwrap_or_else(|| "mondict".into()),
            import_batch_size: parse_or(&lookup, "IMPORT_BATCH_SIZE", DEFAULT_BATCH_SIZE),
            pool_size: parse_or(&lookup, "DB_POOL_SIZE", 4),
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "127.0.0.1:5000".into()),
            search_limit: parse_or(&lookup, "SEARCH_LIMIT", 100),
            list_limit: parse_or(&lookup, "LIST_LIMIT", 500),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Invalid value {:?} for {}, using {}", raw, key, default);
            default
        }),
        None => default,
    }
}
