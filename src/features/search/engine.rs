use diesel::prelude::*;
use diesel::sql_types::{BigInt, Text};

use crate::data::models::SearchHit;

pub const RANK_EXACT: i32 = 1;
pub const RANK_PREFIX: i32 = 2;
pub const RANK_WORD_CONTAINS: i32 = 3;
pub const RANK_DEFINITION_CONTAINS: i32 = 4;

// One CASE assigns each row its best rank; rank 5 means "no predicate matched".
// Binds: exact term, prefix pattern, contains pattern, contains pattern, limit.
const RANKED_SEARCH: &str = r#"
    SELECT id, word, definition, is_favorite, match_rank
    FROM (
        SELECT id, word, definition, is_favorite,
            CASE
                WHEN word = ? COLLATE NOCASE THEN 1
                WHEN word LIKE ? ESCAPE '\' THEN 2
                WHEN word LIKE ? ESCAPE '\' THEN 3
                WHEN definition LIKE ? ESCAPE '\' THEN 4
                ELSE 5
            END AS match_rank
        FROM entries
    )
    WHERE match_rank < 5
    ORDER BY match_rank, word COLLATE NOCASE, id
    LIMIT ?
"#;

pub struct SearchEngine;

impl SearchEngine {
    /// Ranked search over words and definitions.
    ///
    /// Callers handle the empty term; an empty pattern would match every row at rank 2.
    pub fn search_entries(
        conn: &mut SqliteConnection,
        term: &str,
        limit: i64,
    ) -> QueryResult<Vec<SearchHit>> {
        let escaped = SearchEngine::escape_like(term);
        let prefix = format!("{}%", escaped);
        let contains = format!("%{}%", escaped);

        diesel::sql_query(RANKED_SEARCH)
            .bind::<Text, _>(term.to_string())
            .bind::<Text, _>(prefix)
            .bind::<Text, _>(contains.clone())
            .bind::<Text, _>(contains)
            .bind::<BigInt, _>(limit)
            .load::<SearchHit>(conn)
    }

    /// Escapes LIKE wildcards so the term matches literally.
    pub fn escape_like(term: &str) -> String {
        let mut escaped = String::with_capacity(term.len());
        for c in term.chars() {
            if matches!(c, '\\' | '%' | '_') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seed_words, temp_dictionary};

    fn words(hits: &[SearchHit]) -> Vec<&str> {
        hits.iter().map(|h| h.entry.word.as_str()).collect()
    }

    fn lower_matches(term: &str, hit: &SearchHit) -> bool {
        let term = term.to_lowercase();
        let word = hit.entry.word.to_lowercase();
        word == term
            || word.starts_with(&term)
            || word.contains(&term)
            || hit.entry.definition.to_lowercase().contains(&term)
    }

    #[test]
    fn escape_like_handles_wildcards() {
        assert_eq!(SearchEngine::escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(SearchEngine::escape_like("ဗၠး"), "ဗၠး");
    }

    #[test]
    fn ranks_exact_then_prefix_then_contains_then_definition() {
        let (_dir, dict) = temp_dictionary();
        seed_words(
            &dict,
            &[
                ("bobcat", "a wild cat"),
                ("dog", "not a cat"),
                ("catalog", "a list"),
                ("Cat", "a pet"),
                ("Catapult", "a siege engine"),
                ("horse", "an animal"),
            ],
        );
        let mut conn = dict.pool().get().unwrap();

        let hits = SearchEngine::search_entries(&mut conn, "cat", 10).unwrap();

        assert_eq!(words(&hits), vec!["Cat", "catalog", "Catapult", "bobcat", "dog"]);
        let ranks: Vec<i32> = hits.iter().map(|h| h.match_rank).collect();
        assert_eq!(
            ranks,
            vec![
                RANK_EXACT,
                RANK_PREFIX,
                RANK_PREFIX,
                RANK_WORD_CONTAINS,
                RANK_DEFINITION_CONTAINS
            ]
        );
        assert!(hits.iter().all(|h| lower_matches("cat", h)));
    }

    #[test]
    fn entry_matching_several_predicates_keeps_best_rank() {
        let (_dir, dict) = temp_dictionary();
        seed_words(&dict, &[("apple", "apple pie filling")]);
        let mut conn = dict.pool().get().unwrap();

        let hits = SearchEngine::search_entries(&mut conn, "APPLE", 10).unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].match_rank, RANK_EXACT);
    }

    #[test]
    fn limit_applies_after_ranking() {
        let (_dir, dict) = temp_dictionary();
        seed_words(
            &dict,
            &[("zebra fish", ""), ("fish", ""), ("fishing", ""), ("a", "fish food")],
        );
        let mut conn = dict.pool().get().unwrap();

        let hits = SearchEngine::search_entries(&mut conn, "fish", 2).unwrap();

        assert_eq!(words(&hits), vec!["fish", "fishing"]);
    }

    #[test]
    fn wildcards_in_term_match_literally() {
        let (_dir, dict) = temp_dictionary();
        seed_words(&dict, &[("100%", "percent"), ("1000", "thousand"), ("a_b", ""), ("axb", "")]);
        let mut conn = dict.pool().get().unwrap();

        assert_eq!(words(&SearchEngine::search_entries(&mut conn, "100%", 10).unwrap()), vec!["100%"]);
        assert_eq!(words(&SearchEngine::search_entries(&mut conn, "a_", 10).unwrap()), vec!["a_b"]);
    }

    #[test]
    fn mon_script_terms_match_by_substring() {
        let (_dir, dict) = temp_dictionary();
        seed_words(&dict, &[("ကၠာ", "tiger"), ("ဗၠး", "hand"), ("tiger", "ကၠာ")]);
        let mut conn = dict.pool().get().unwrap();

        let hits = SearchEngine::search_entries(&mut conn, "ကၠာ", 10).unwrap();

        assert_eq!(words(&hits), vec!["ကၠာ", "tiger"]);
        assert_eq!(hits[1].match_rank, RANK_DEFINITION_CONTAINS);
    }
}
