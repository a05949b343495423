use serde::{Deserialize, Serialize};

/// A single pair as it appears in a bundled seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedEntry {
    #[serde(default)]
    pub word: String,
    #[serde(default, alias = "definition")]
    pub def: String,
}

/// Seed files are either `{"data": [...]}` or a bare array of pairs.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SeedFile {
    Wrapped { data: Vec<SeedEntry> },
    Bare(Vec<SeedEntry>),
}

impl SeedFile {
    pub fn into_entries(self) -> Vec<SeedEntry> {
        match self {
            SeedFile::Wrapped { data } => data,
            SeedFile::Bare(data) => data,
        }
    }
}

/// Outcome of one run of the seed importer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub already_populated: bool,
    pub files_found: usize,
    pub files_skipped: usize,
    pub rows_inserted: usize,
    pub batches_failed: usize,
}
