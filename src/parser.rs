use std::fs;
use std::path::{Path, PathBuf};

use crate::data::models::{ImportError, SeedEntry, SeedFile};

pub const SEED_EXTENSION: &str = "json";

/// Lists seed files in `dir` named `<prefix>*.json`, sorted by file name.
///
/// An unreadable directory yields an empty list; the importer then has nothing to do.
pub fn discover_seed_files(dir: &Path, prefix: &str) -> Vec<PathBuf> {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            log::error!("Error retrieving seed files from {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = read_dir
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|ext| ext == SEED_EXTENSION))
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(prefix))
        })
        .collect();

    files.sort();
    files
}

pub fn parse_seed_file(path: &Path) -> Result<Vec<SeedEntry>, ImportError> {
    let content = fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_seed_str(&content).map_err(|source| ImportError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_seed_str(content: &str) -> Result<Vec<SeedEntry>, serde_json::Error> {
    let file: SeedFile = serde_json::from_str(content)?;
    Ok(file.into_entries())
}
