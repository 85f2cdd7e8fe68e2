use serde::{Deserialize, Serialize};

use super::{InventoryMovement, JournalEntry, SaleRecord, TransactionRecord};

/// The four ordered record collections, persisted as a single JSON
/// document. Field names match the original data file so existing stores
/// load unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordStore {
    #[serde(default)]
    pub inventory: Vec<InventoryMovement>,
    #[serde(default)]
    pub sales: Vec<SaleRecord>,
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
    #[serde(default)]
    pub journal_entries: Vec<JournalEntry>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty()
            && self.sales.is_empty()
            && self.transactions.is_empty()
            && self.journal_entries.is_empty()
    }
}
