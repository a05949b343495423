pub mod dictionary;
pub mod import;
pub mod search;
