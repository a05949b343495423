use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::data::models::Entry;
use crate::features::dictionary::Dictionary;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Results of a search that survived debouncing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchUpdate {
    pub term: String,
    pub generation: u64,
    pub entries: Vec<Entry>,
}

/// Search-as-you-type scheduler: only the last input within the idle window
/// runs, and a result is dropped if newer input arrived while it was running.
pub struct SearchDebouncer {
    dictionary: Dictionary,
    window: Duration,
    limit: i64,
    generation: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
    updates: mpsc::UnboundedSender<SearchUpdate>,
}

impl SearchDebouncer {
    pub fn new(
        dictionary: Dictionary,
        window: Duration,
        limit: i64,
    ) -> (Self, mpsc::UnboundedReceiver<SearchUpdate>) {
        let (updates, receiver) = mpsc::unbounded_channel();
        let debouncer = Self {
            dictionary,
            window,
            limit,
            generation: Arc::new(AtomicU64::new(0)),
            pending: None,
            updates,
        };
        (debouncer, receiver)
    }

    /// Schedules a search for `term`, cancelling the one still waiting.
    pub fn input_changed(&mut self, term: impl Into<String>) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.generation);
        let dictionary = self.dictionary.clone();
        let updates = self.updates.clone();
        let window = self.window;
        let limit = self.limit;
        let term = term.into();

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;

            let entries = dictionary.search(&term, limit).await;
            deliver_if_current(
                &latest,
                SearchUpdate {
                    term,
                    generation,
                    entries,
                },
                &updates,
            );
        }));
    }

    /// Drops whatever is scheduled; results still in flight are discarded.
    pub fn cancel(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

/// Sends `update` unless newer input was scheduled while its query ran.
fn deliver_if_current(
    latest: &AtomicU64,
    update: SearchUpdate,
    updates: &mpsc::UnboundedSender<SearchUpdate>,
) -> bool {
    if latest.load(Ordering::SeqCst) != update.generation {
        log::debug!("Discarding superseded search for {:?}", update.term);
        return false;
    }
    updates.send(update).is_ok()
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seed_words, temp_dictionary};
    use tokio::time::timeout;

    const WINDOW: Duration = Duration::from_millis(40);

    #[tokio::test]
    async fn rapid_input_runs_only_the_last_term() {
        let (_dir, dict) = temp_dictionary();
        seed_words(&dict, &[("apple", "a fruit"), ("apricot", "another fruit")]);
        let (mut debouncer, mut updates) = SearchDebouncer::new(dict, WINDOW, 10);

        debouncer.input_changed("a");
        debouncer.input_changed("ap");
        debouncer.input_changed("apple");

        let update = timeout(Duration::from_secs(5), updates.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(update.term, "apple");
        assert_eq!(update.generation, 3);
        assert_eq!(update.entries[0].word, "apple");

        let extra = timeout(WINDOW * 5, updates.recv()).await;
        assert!(extra.is_err(), "superseded searches must not be delivered");
    }

    #[tokio::test]
    async fn separated_inputs_each_deliver() {
        let (_dir, dict) = temp_dictionary();
        seed_words(&dict, &[("cat", ""), ("dog", "")]);
        let (mut debouncer, mut updates) = SearchDebouncer::new(dict, WINDOW, 10);

        debouncer.input_changed("cat");
        let first = timeout(Duration::from_secs(5), updates.recv()).await.unwrap().unwrap();
        debouncer.input_changed("dog");
        let second = timeout(Duration::from_secs(5), updates.recv()).await.unwrap().unwrap();

        assert_eq!(first.entries.len(), 1);
        assert_eq!(first.entries[0].word, "cat");
        assert_eq!(second.entries[0].word, "dog");
        assert!(second.generation > first.generation);
    }

    #[tokio::test]
    async fn result_of_a_query_overtaken_by_newer_input_is_dropped() {
        let (_dir, dict) = temp_dictionary();
        seed_words(&dict, &[("apple", "a fruit")]);
        let latest = AtomicU64::new(0);
        let (sender, mut receiver) = mpsc::unbounded_channel();

        let generation = latest.fetch_add(1, Ordering::SeqCst) + 1;
        let entries = dict.search("apple", 10).await;
        // newer input lands after the query started
        latest.fetch_add(1, Ordering::SeqCst);

        let stale = SearchUpdate {
            term: "apple".to_string(),
            generation,
            entries,
        };
        assert!(!deliver_if_current(&latest, stale, &sender));
        assert!(receiver.try_recv().is_err());

        let current = SearchUpdate {
            term: "apple".to_string(),
            generation: latest.load(Ordering::SeqCst),
            entries: dict.search("apple", 10).await,
        };
        assert!(deliver_if_current(&latest, current, &sender));
        let delivered = receiver.try_recv().unwrap();
        assert_eq!(delivered.generation, 2);
        assert_eq!(delivered.entries[0].word, "apple");
    }

    #[tokio::test]
    async fn cancel_suppresses_pending_search() {
        let (_dir, dict) = temp_dictionary();
        seed_words(&dict, &[("cat", "")]);
        let (mut debouncer, mut updates) = SearchDebouncer::new(dict, WINDOW, 10);

        debouncer.input_changed("cat");
        debouncer.cancel();

        assert!(timeout(WINDOW * 5, updates.recv()).await.is_err());
    }
}
