diesel::table! {
    entries (id) {
        id -> BigInt,
        word -> Text,
        definition -> Text,
        is_favorite -> Bool,
    }
}
