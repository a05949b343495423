use std::path::Path;

use tempfile::{TempDir, tempdir};

use crate::DbPool;
use crate::data::models::NewEntry;
use crate::data::repositories::EntryRepository;
use crate::db;
use crate::features::dictionary::Dictionary;

pub fn temp_pool() -> (TempDir, DbPool) {
    let dir = tempdir().expect("temp dir");
    let pool = db::open_store(&dir.path().join("test.db"), None, 2).expect("open store");
    (dir, pool)
}

pub fn temp_dictionary() -> (TempDir, Dictionary) {
    let (dir, pool) = temp_pool();
    (dir, Dictionary::new(pool))
}

/// Inserts non-favorite rows in the given order, ids start at 1.
pub fn seed_words(dictionary: &Dictionary, words: &[(&str, &str)]) {
    let mut conn = dictionary.pool().get().expect("connection");
    let rows: Vec<NewEntry<'_>> = words
        .iter()
        .map(|&(word, definition)| NewEntry {
            word,
            definition,
            is_favorite: false,
        })
        .collect();
    EntryRepository::insert_batch(&mut conn, &rows).expect("seed rows");
}

pub fn write_seed_file(dir: &Path, name: &str, body: &str) {
    std::fs::write(dir.join(name), body).expect("write seed file");
}
