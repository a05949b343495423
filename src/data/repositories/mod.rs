pub mod entry;

pub use entry::EntryRepository;
