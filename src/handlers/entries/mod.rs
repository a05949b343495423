pub mod entries;
pub mod favorites;

pub use entries::{add_entry, get_entry, list_entries};
pub use favorites::{list_favorites, set_favorite, toggle_favorite};
