use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Text};

use crate::data::models::{Entry, NewEntry};
use crate::schema::entries;

/// Case-insensitive word order, id breaks ties so listings are stable.
const WORD_ASC: &str = "word COLLATE NOCASE ASC, id ASC";
const WORD_DESC: &str = "word COLLATE NOCASE DESC, id DESC";

pub struct EntryRepository;

impl EntryRepository {
    pub fn count(conn: &mut SqliteConnection) -> QueryResult<i64> {
        entries::table.count().get_result(conn)
    }

    pub fn find(conn: &mut SqliteConnection, entry_id: i64) -> QueryResult<Option<Entry>> {
        entries::table
            .find(entry_id)
            .select(Entry::as_select())
            .first(conn)
            .optional()
    }

    pub fn list(
        conn: &mut SqliteConnection,
        descending: bool,
        limit: i64,
    ) -> QueryResult<Vec<Entry>> {
        let order = if descending { WORD_DESC } else { WORD_ASC };

        entries::table
            .select(Entry::as_select())
            .order(sql::<Text>(order))
            .limit(limit)
            .load(conn)
    }

    pub fn favorites(conn: &mut SqliteConnection) -> QueryResult<Vec<Entry>> {
        entries::table
            .filter(entries::is_favorite.eq(true))
            .select(Entry::as_select())
            .order(sql::<Text>(WORD_ASC))
            .load(conn)
    }

    /// Returns the number of rows touched, 0 when the id is unknown.
    pub fn set_favorite(
        conn: &mut SqliteConnection,
        entry_id: i64,
        value: bool,
    ) -> QueryResult<usize> {
        diesel::update(entries::table.find(entry_id))
            .set(entries::is_favorite.eq(value))
            .execute(conn)
    }

    pub fn insert(conn: &mut SqliteConnection, new_entry: &NewEntry<'_>) -> QueryResult<Entry> {
        conn.transaction(|conn| {
            diesel::insert_into(entries::table)
                .values(new_entry)
                .execute(conn)?;

            let id = diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result::<i64>(conn)?;

            Ok(Entry {
                id,
                word: new_entry.word.to_string(),
                definition: new_entry.definition.to_string(),
                is_favorite: new_entry.is_favorite,
            })
        })
    }

    /// Inserts one import batch inside its own transaction.
    pub fn insert_batch(conn: &mut SqliteConnection, rows: &[NewEntry<'_>]) -> QueryResult<usize> {
        conn.transaction(|conn| diesel::insert_into(entries::table).values(rows).execute(conn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::temp_pool;

    #[test]
    fn insert_assigns_increasing_ids() {
        let (_dir, pool) = temp_pool();
        let mut conn = pool.get().unwrap();

        let first = EntryRepository::insert(
            &mut conn,
            &NewEntry { word: "apple", definition: "a fruit", is_favorite: false },
        )
        .unwrap();
        let second = EntryRepository::insert(
            &mut conn,
            &NewEntry { word: "", definition: "", is_favorite: true },
        )
        .unwrap();

        assert!(second.id > first.id);
        assert_eq!(EntryRepository::find(&mut conn, second.id).unwrap(), Some(second));
        assert_eq!(EntryRepository::count(&mut conn).unwrap(), 2);
    }

    #[test]
    fn list_orders_words_ignoring_case() {
        let (_dir, pool) = temp_pool();
        let mut conn = pool.get().unwrap();
        let rows = [
            NewEntry { word: "banana", definition: "", is_favorite: false },
            NewEntry { word: "Apple", definition: "", is_favorite: false },
            NewEntry { word: "cherry", definition: "", is_favorite: false },
        ];
        assert_eq!(EntryRepository::insert_batch(&mut conn, &rows).unwrap(), 3);

        let asc: Vec<String> = EntryRepository::list(&mut conn, false, 10)
            .unwrap()
            .into_iter()
            .map(|e| e.word)
            .collect();
        assert_eq!(asc, vec!["Apple", "banana", "cherry"]);

        let desc: Vec<String> = EntryRepository::list(&mut conn, true, 2)
            .unwrap()
            .into_iter()
            .map(|e| e.word)
            .collect();
        assert_eq!(desc, vec!["cherry", "banana"]);
    }

    #[test]
    fn set_favorite_on_missing_id_touches_nothing() {
        let (_dir, pool) = temp_pool();
        let mut conn = pool.get().unwrap();

        assert_eq!(EntryRepository::set_favorite(&mut conn, 42, true).unwrap(), 0);
        assert!(EntryRepository::favorites(&mut conn).unwrap().is_empty());
    }
}
