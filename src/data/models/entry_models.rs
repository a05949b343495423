use diesel::prelude::*;
use diesel::sql_types::Integer;
use serde::{Deserialize, Serialize};

use crate::schema::entries;

/// One word/definition pair as stored in the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Queryable, Selectable, QueryableByName)]
#[diesel(table_name = entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Entry {
    pub id: i64,
    pub word: String,
    pub definition: String,
    pub is_favorite: bool,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = entries)]
pub struct NewEntry<'a> {
    pub word: &'a str,
    pub definition: &'a str,
    pub is_favorite: bool,
}

/// A search result together with the rank it matched at (1 = exact word).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, QueryableByName)]
pub struct SearchHit {
    #[diesel(embed)]
    #[serde(flatten)]
    pub entry: Entry,
    #[diesel(sql_type = Integer)]
    pub match_rank: i32,
}

/// Ordering for the full word listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
    Random,
}
