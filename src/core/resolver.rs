//! Cascading deletion over the four record collections.
//!
//! The legacy data model stores no identifier linking a transaction record
//! to the inventory movement, sale record, and journal entries it was
//! created with. Deletion therefore matches siblings by value: movements
//! and sales on `(total, product)`, journal rows on date plus a product
//! substring in the description. Two events sharing date, product, and
//! total are indistinguishable and are all removed together; that behavior
//! is preserved deliberately for compatibility with existing stores.

use crate::domain::{JournalEntry, RecordStore, TransactionRecord};
use crate::errors::BooksError;

/// Stateless resolver for deletion requests.
pub struct ConsistencyResolver;

impl ConsistencyResolver {
    /// Removes the transaction at `index` along with every record it
    /// produced, returning the removed transaction. All removals happen on
    /// the in-memory store in one pass; callers stage and persist the
    /// result before committing it.
    pub fn delete_transaction(
        store: &mut RecordStore,
        index: usize,
    ) -> Result<TransactionRecord, BooksError> {
        let len = store.transactions.len();
        if index >= len {
            return Err(BooksError::IndexOutOfRange {
                collection: "transactions",
                index,
                len,
            });
        }
        let txn = store.transactions.remove(index);

        store
            .inventory
            .retain(|m| !(m.total == txn.amount && m.product == txn.product));
        store
            .sales
            .retain(|s| !(s.total == txn.amount && s.product == txn.product));
        store
            .journal_entries
            .retain(|e| e.date != txn.date || !e.description.contains(&txn.product));

        tracing::info!(date = %txn.date, product = %txn.product, amount = txn.amount, "cascaded transaction deletion");
        Ok(txn)
    }

    /// Removes one journal entry by position. No cascade back to the
    /// transaction that produced it.
    pub fn delete_journal_entry(
        store: &mut RecordStore,
        index: usize,
    ) -> Result<JournalEntry, BooksError> {
        let len = store.journal_entries.len();
        if index >= len {
            return Err(BooksError::IndexOutOfRange {
                collection: "journal entries",
                index,
                len,
            });
        }
        Ok(store.journal_entries.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TransactionRecorder;
    use crate::domain::{Catalog, PaymentMethod};

    fn store_with(events: &[(&str, &str, u32, PaymentMethod, bool)]) -> RecordStore {
        let mut store = RecordStore::new();
        let catalog = Catalog::kitchenware();
        for &(date, product, quantity, method, is_sale) in events {
            let result = if is_sale {
                TransactionRecorder::record_sale_event(
                    &mut store, &catalog, date, product, quantity, method,
                )
            } else {
                TransactionRecorder::record_inventory_event(
                    &mut store, &catalog, date, product, quantity, method,
                )
            };
            result.expect("event must record");
        }
        store
    }

    #[test]
    fn deleting_the_only_transaction_empties_the_store() {
        let mut store = store_with(&[("2024-01-10", "Sendok A", 10, PaymentMethod::Cash, false)]);

        let removed =
            ConsistencyResolver::delete_transaction(&mut store, 0).expect("delete must succeed");
        assert_eq!(removed.product, "Sendok A");
        assert_eq!(removed.amount, 150_000);
        assert!(store.is_empty(), "cascade must remove all sibling records");
    }

    #[test]
    fn cascade_leaves_unrelated_records_alone() {
        let mut store = store_with(&[
            ("2024-01-10", "Sendok A", 10, PaymentMethod::Cash, false),
            ("2024-01-11", "Pisau A", 2, PaymentMethod::Credit, true),
        ]);

        ConsistencyResolver::delete_transaction(&mut store, 0).expect("delete must succeed");

        assert!(store.inventory.is_empty());
        assert_eq!(store.sales.len(), 1);
        assert_eq!(store.transactions.len(), 1);
        assert_eq!(store.transactions[0].product, "Pisau A");
        assert_eq!(store.journal_entries.len(), 2);
        assert!(store
            .journal_entries
            .iter()
            .all(|e| e.description.contains("Pisau A")));
    }

    #[test]
    fn twin_events_are_all_removed_by_the_value_match() {
        // Known limitation of the identifier-free model: two events with
        // the same date, product, and total cascade together.
        let mut store = store_with(&[
            ("2024-01-10", "Sendok A", 10, PaymentMethod::Cash, false),
            ("2024-01-10", "Sendok A", 10, PaymentMethod::Cash, false),
        ]);

        ConsistencyResolver::delete_transaction(&mut store, 0).expect("delete must succeed");

        assert!(store.inventory.is_empty(), "both movements match the heuristic");
        assert!(store.journal_entries.is_empty());
        assert_eq!(store.transactions.len(), 1, "only the selected summary row is popped");
    }

    #[test]
    fn out_of_range_index_is_rejected_without_effect() {
        let mut store = store_with(&[("2024-01-10", "Sendok A", 10, PaymentMethod::Cash, false)]);
        let before = store.clone();

        let err = ConsistencyResolver::delete_transaction(&mut store, 5)
            .expect_err("index past the end must fail");
        assert!(matches!(
            err,
            BooksError::IndexOutOfRange { index: 5, len: 1, .. }
        ));
        assert_eq!(store, before, "failed delete must not mutate the store");

        let err = ConsistencyResolver::delete_transaction(&mut RecordStore::new(), 0)
            .expect_err("empty list has no index 0");
        assert!(matches!(err, BooksError::IndexOutOfRange { len: 0, .. }));
    }

    #[test]
    fn journal_entries_can_be_removed_directly_without_cascade() {
        let mut store = store_with(&[("2024-01-10", "Sendok A", 10, PaymentMethod::Cash, false)]);

        let removed = ConsistencyResolver::delete_journal_entry(&mut store, 1)
            .expect("direct delete must succeed");
        assert_eq!(removed.credit, 150_000);
        assert_eq!(store.journal_entries.len(), 1);
        assert_eq!(store.transactions.len(), 1, "no cascade back to transactions");
        assert_eq!(store.inventory.len(), 1);

        let err = ConsistencyResolver::delete_journal_entry(&mut store, 9)
            .expect_err("bad index must fail");
        assert!(matches!(err, BooksError::IndexOutOfRange { .. }));
    }
}
