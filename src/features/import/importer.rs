use std::path::{Path, PathBuf};

use diesel::SqliteConnection;
use tokio::task::JoinHandle;

use crate::data::models::{ImportReport, NewEntry, SeedEntry, StoreError};
use crate::data::repositories::EntryRepository;
use crate::features::dictionary::Dictionary;
use crate::parser;
use crate::utils::run_blocking;

pub const DEFAULT_BATCH_SIZE: usize = 500;

/// One-time loader of bundled seed files into an empty store.
#[derive(Debug, Clone)]
pub struct SeedImporter {
    seed_dir: PathBuf,
    prefix: String,
    batch_size: usize,
}

impl SeedImporter {
    pub fn new(seed_dir: impl Into<PathBuf>, prefix: impl Into<String>, batch_size: usize) -> Self {
        Self {
            seed_dir: seed_dir.into(),
            prefix: prefix.into(),
            batch_size: batch_size.max(1),
        }
    }

    /// Imports every seed file if the store is empty, otherwise does nothing.
    ///
    /// Only a failure to count rows is returned as an error; broken files and
    /// failed batches are logged and tallied in the report.
    pub async fn import_if_empty(&self, dictionary: &Dictionary) -> Result<ImportReport, StoreError> {
        let importer = self.clone();

        dictionary.set_importing(true);
        let result = run_blocking(dictionary.pool(), move |conn| importer.run(conn)).await;
        dictionary.set_importing(false);

        if let Ok(report) = &result {
            if !report.already_populated {
                dictionary.notify_changed();
            }
        }
        result
    }

    /// Starts the import in the background; the handle resolves when it is done.
    pub fn spawn(self, dictionary: Dictionary) -> JoinHandle<Result<ImportReport, StoreError>> {
        tokio::spawn(async move { self.import_if_empty(&dictionary).await })
    }

    fn run(&self, conn: &mut SqliteConnection) -> Result<ImportReport, StoreError> {
        let mut report = ImportReport::default();

        if EntryRepository::count(conn)? > 0 {
            log::info!("Dictionary store already has data, skipping seed import");
            report.already_populated = true;
            return Ok(report);
        }

        let files = parser::discover_seed_files(&self.seed_dir, &self.prefix);
        report.files_found = files.len();
        log::info!(
            "Importing {} seed file(s) from {}",
            files.len(),
            self.seed_dir.display()
        );

        for file in &files {
            match parser::parse_seed_file(file) {
                Ok(entries) => self.save_entries(conn, file, &entries, &mut report),
                Err(e) => {
                    log::warn!("Skipping seed file: {}", e);
                    report.files_skipped += 1;
                }
            }
        }

        log::info!(
            "Seed import finished: {} rows inserted, {} file(s) skipped, {} batch(es) failed",
            report.rows_inserted,
            report.files_skipped,
            report.batches_failed
        );
        Ok(report)
    }

    fn save_entries(
        &self,
        conn: &mut SqliteConnection,
        file: &Path,
        entries: &[SeedEntry],
        report: &mut ImportReport,
    ) {
        if entries.is_empty() {
            log::warn!("No entries found in {}", file.display());
            return;
        }

        for (index, batch) in entries.chunks(self.batch_size).enumerate() {
            let rows: Vec<NewEntry<'_>> = batch
                .iter()
                .map(|entry| NewEntry {
                    word: &entry.word,
                    definition: &entry.def,
                    is_favorite: false,
                })
                .collect();

            match EntryRepository::insert_batch(conn, &rows) {
                Ok(inserted) => report.rows_inserted += inserted,
                Err(e) => {
                    log::error!(
                        "Failed to save batch starting at {} of {}: {}",
                        index * self.batch_size,
                        file.display(),
                        e
                    );
                    report.batches_failed += 1;
                }
            }
        }

        log::debug!("Saved {} entries from {}", entries.len(), file.display());
    }
}
