pub mod json_backend;

use crate::domain::RecordStore;
use crate::errors::BooksError;

pub type Result<T> = std::result::Result<T, BooksError>;

/// Abstraction over persistence backends capable of storing the whole
/// record store.
pub trait StorageBackend: Send + Sync {
    /// Returns the persisted store, or an empty one when no prior state
    /// exists.
    fn load(&self) -> Result<RecordStore>;
    /// Persists the whole store atomically: a failed save must leave the
    /// previous on-disk state intact.
    fn save(&self, store: &RecordStore) -> Result<()>;
}

pub use json_backend::JsonStorage;
