pub mod search;

pub use search::search_api;
