use crate::core::{ConsistencyResolver, ProfitabilityReport, TransactionRecorder};
use crate::domain::{Catalog, JournalEntry, PaymentMethod, RecordStore, TransactionRecord};
use crate::errors::BooksError;
use crate::storage::StorageBackend;

/// Facade that coordinates the record store, the catalog, and persistence.
///
/// Every mutating operation stages its change on a copy of the store,
/// persists the copy, and only then commits it in memory. A persistence
/// failure therefore leaves both the prior on-disk state and the prior
/// in-memory state intact.
pub struct Bookkeeper {
    store: RecordStore,
    catalog: Catalog,
    storage: Box<dyn StorageBackend>,
}

impl Bookkeeper {
    /// Loads prior state from the backend (an empty store when none
    /// exists) and wires up the catalog.
    pub fn open(storage: Box<dyn StorageBackend>, catalog: Catalog) -> Result<Self, BooksError> {
        let store = storage.load()?;
        Ok(Self {
            store,
            catalog,
            storage,
        })
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Records a purchase or purchase return and flushes the store.
    pub fn record_inventory_event(
        &mut self,
        date: &str,
        product: &str,
        quantity: u32,
        method: PaymentMethod,
    ) -> Result<(), BooksError> {
        let mut staged = self.store.clone();
        TransactionRecorder::record_inventory_event(
            &mut staged,
            &self.catalog,
            date,
            product,
            quantity,
            method,
        )?;
        self.commit(staged)
    }

    /// Records a sale or sale return and flushes the store.
    pub fn record_sale_event(
        &mut self,
        date: &str,
        product: &str,
        quantity: u32,
        method: PaymentMethod,
    ) -> Result<(), BooksError> {
        let mut staged = self.store.clone();
        TransactionRecorder::record_sale_event(
            &mut staged,
            &self.catalog,
            date,
            product,
            quantity,
            method,
        )?;
        self.commit(staged)
    }

    /// Deletes the transaction at `index` and cascades to its siblings,
    /// returning the removed transaction.
    pub fn delete_transaction(&mut self, index: usize) -> Result<TransactionRecord, BooksError> {
        let mut staged = self.store.clone();
        let removed = ConsistencyResolver::delete_transaction(&mut staged, index)?;
        self.commit(staged)?;
        Ok(removed)
    }

    /// Deletes one journal entry by position, without cascade.
    pub fn delete_journal_entry(&mut self, index: usize) -> Result<JournalEntry, BooksError> {
        let mut staged = self.store.clone();
        let removed = ConsistencyResolver::delete_journal_entry(&mut staged, index)?;
        self.commit(staged)?;
        Ok(removed)
    }

    pub fn profitability(&self) -> ProfitabilityReport {
        ProfitabilityReport::compute(&self.store)
    }

    fn commit(&mut self, staged: RecordStore) -> Result<(), BooksError> {
        self.storage.save(&staged)?;
        self.store = staged;
        Ok(())
    }
}
