// Async client over the dictionary store.
//
// Reads degrade to empty results and writes leave state unchanged on failure;
// every failure is logged here so callers never see a store error.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rand::seq::SliceRandom;
use tokio::sync::watch;

use crate::DbPool;
use crate::data::models::{Entry, NewEntry, SearchHit, SortOrder};
use crate::data::repositories::EntryRepository;
use crate::features::search::SearchEngine;
use crate::utils::{clamp_limit, run_blocking};

#[derive(Clone)]
pub struct Dictionary {
    pool: DbPool,
    version: Arc<watch::Sender<u64>>,
    importing: Arc<AtomicBool>,
}

impl Dictionary {
    pub fn new(pool: DbPool) -> Self {
        let (version, _) = watch::channel(0);
        Self {
            pool,
            version: Arc::new(version),
            importing: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Receives the store version, bumped after every import and successful mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }

    pub fn version(&self) -> u64 {
        *self.version.borrow()
    }

    pub(crate) fn notify_changed(&self) {
        self.version.send_modify(|v| *v += 1);
    }

    pub fn is_importing(&self) -> bool {
        self.importing.load(Ordering::SeqCst)
    }

    pub(crate) fn set_importing(&self, importing: bool) {
        self.importing.store(importing, Ordering::SeqCst);
    }

    pub async fn count(&self) -> i64 {
        run_blocking(&self.pool, |conn| Ok(EntryRepository::count(conn)?))
            .await
            .unwrap_or_else(|e| {
                log::error!("Count entries failed: {}", e);
                0
            })
    }

    pub async fn get(&self, entry_id: i64) -> Option<Entry> {
        run_blocking(&self.pool, move |conn| Ok(EntryRepository::find(conn, entry_id)?))
            .await
            .unwrap_or_else(|e| {
                log::error!("Fetch entry {} failed: {}", entry_id, e);
                None
            })
    }

    /// Lists up to `limit` entries. `Random` shuffles the ascending window.
    pub async fn list_all(&self, order: SortOrder, limit: i64) -> Vec<Entry> {
        let limit = clamp_limit(limit);
        let descending = order == SortOrder::Desc;

        let mut entries = run_blocking(&self.pool, move |conn| {
            Ok(EntryRepository::list(conn, descending, limit)?)
        })
        .await
        .unwrap_or_else(|e| {
            log::error!("Fetch all failed: {}", e);
            Vec::new()
        });

        if order == SortOrder::Random {
            entries.shuffle(&mut rand::thread_rng());
        }
        entries
    }

    /// Ranked search. An empty term is the ascending listing.
    pub async fn search_ranked(&self, term: &str, limit: i64) -> Vec<SearchHit> {
        if term.is_empty() {
            return self
                .list_all(SortOrder::Asc, limit)
                .await
                .into_iter()
                .map(|entry| SearchHit {
                    entry,
                    match_rank: 0,
                })
                .collect();
        }

        let limit = clamp_limit(limit);
        let term = term.to_string();
        run_blocking(&self.pool, move |conn| {
            Ok(SearchEngine::search_entries(conn, &term, limit)?)
        })
        .await
        .unwrap_or_else(|e| {
            log::error!("Search query failed: {}", e);
            Vec::new()
        })
    }

    pub async fn search(&self, term: &str, limit: i64) -> Vec<Entry> {
        self.search_ranked(term, limit)
            .await
            .into_iter()
            .map(|hit| hit.entry)
            .collect()
    }

    pub async fn list_favorites(&self) -> Vec<Entry> {
        run_blocking(&self.pool, |conn| Ok(EntryRepository::favorites(conn)?))
            .await
            .unwrap_or_else(|e| {
                log::error!("Fetch favorites failed: {}", e);
                Vec::new()
            })
    }

    /// Sets the favorite flag. Returns whether a row was updated; unknown ids are a no-op.
    pub async fn set_favorite(&self, entry_id: i64, value: bool) -> bool {
        let result = run_blocking(&self.pool, move |conn| {
            Ok(EntryRepository::set_favorite(conn, entry_id, value)?)
        })
        .await;

        match result {
            Ok(0) => {
                log::debug!("Set favorite skipped, entry {} does not exist", entry_id);
                false
            }
            Ok(_) => {
                self.notify_changed();
                true
            }
            Err(e) => {
                log::error!("Set favorite failed: {}", e);
                false
            }
        }
    }

    /// Flips a favorite flag the caller already knows. Returns the new value,
    /// or `current` when the write failed.
    pub async fn toggle_favorite(&self, entry_id: i64, current: bool) -> bool {
        let new_value = !current;
        let result = run_blocking(&self.pool, move |conn| {
            Ok(EntryRepository::set_favorite(conn, entry_id, new_value)?)
        })
        .await;

        match result {
            Ok(updated) => {
                if updated > 0 {
                    self.notify_changed();
                }
                new_value
            }
            Err(e) => {
                log::error!("Toggle favorite failed: {}", e);
                current
            }
        }
    }

    /// Inserts a user word, always favorited. Emptiness is the caller's concern.
    pub async fn add_word(&self, word: &str, definition: &str) -> Option<Entry> {
        let word = word.to_string();
        let definition = definition.to_string();

        let result = run_blocking(&self.pool, move |conn| {
            let new_entry = NewEntry {
                word: &word,
                definition: &definition,
                is_favorite: true,
            };
            Ok(EntryRepository::insert(conn, &new_entry)?)
        })
        .await;

        match result {
            Ok(entry) => {
                log::info!("Added word {:?} as entry {}", entry.word, entry.id);
                self.notify_changed();
                Some(entry)
            }
            Err(e) => {
                log::error!("Add word failed: {}", e);
                None
            }
        }
    }
}
