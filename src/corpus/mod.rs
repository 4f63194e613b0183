pub mod loader;
pub mod record;

pub use loader::{load_corpus, load_record};
pub use record::{ApplicationRecord, CorpusError, FieldValue};
