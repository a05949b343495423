pub mod debounce;
pub mod engine;

pub use debounce::{SearchDebouncer, SearchUpdate};
pub use engine::SearchEngine;
