pub mod importer;

pub use importer::{DEFAULT_BATCH_SIZE, SeedImporter};
