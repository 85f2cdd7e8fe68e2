//! Derives the record group implied by a single purchase or sale
//! submission: one inventory-or-sale record, one transaction record, and
//! the journal postings, appended as one unit.

use chrono::NaiveDate;

use crate::domain::{
    Account, Catalog, InventoryMovement, JournalEntry, PaymentMethod, RecordStore, SaleRecord,
    TransactionRecord,
};
use crate::errors::BooksError;

/// Stateless recorder for purchase and sale events.
///
/// Validation runs in full before the first append, so a returned error
/// guarantees the store is untouched. Once validation passes, every append
/// is infallible and the group lands atomically.
pub struct TransactionRecorder;

impl TransactionRecorder {
    /// Records a purchase or purchase return against the inventory.
    pub fn record_inventory_event(
        store: &mut RecordStore,
        catalog: &Catalog,
        date: &str,
        product: &str,
        quantity: u32,
        method: PaymentMethod,
    ) -> Result<(), BooksError> {
        let date = parse_date(date)?;
        let unit_price = validated_unit_price(catalog, product, quantity)?;
        if method == PaymentMethod::SaleReturn {
            return Err(BooksError::validation(format!(
                "payment method `{method}` is not valid for an inventory event"
            )));
        }

        let total = signed_total(quantity, unit_price, method);
        let description = if method == PaymentMethod::PurchaseReturn {
            "Purchase Return"
        } else {
            "Purchase"
        };

        store.inventory.push(InventoryMovement {
            date,
            product: product.to_string(),
            quantity,
            unit_price,
            total,
        });
        store.transactions.push(TransactionRecord {
            date,
            product: product.to_string(),
            description: description.to_string(),
            amount: total,
            payment_method: method,
        });

        match method {
            PaymentMethod::PurchaseReturn => {
                store.journal_entries.push(JournalEntry::debit(
                    date,
                    format!("Purchase return of {product}"),
                    Account::AccountsPayable,
                    total.abs(),
                ));
                store.journal_entries.push(JournalEntry::credit(
                    date,
                    format!("Inventory reduction for returned {product}"),
                    Account::Inventory,
                    total.abs(),
                ));
            }
            PaymentMethod::Cash => {
                store.journal_entries.push(JournalEntry::debit(
                    date,
                    format!("Purchase of {product}"),
                    Account::Inventory,
                    total,
                ));
                store.journal_entries.push(JournalEntry::credit(
                    date,
                    format!("Cash payment for {product}"),
                    Account::Cash,
                    total,
                ));
            }
            PaymentMethod::Credit => {
                // Legacy behavior: a credit purchase posts only the
                // inventory debit. The matching Accounts Payable credit is
                // never written, leaving this one pairing unbalanced.
                store.journal_entries.push(JournalEntry::debit(
                    date,
                    format!("Purchase of {product}"),
                    Account::Inventory,
                    total,
                ));
            }
            PaymentMethod::SaleReturn => unreachable!("rejected above"),
        }

        tracing::info!(%date, product, quantity, total, method = %method, "recorded inventory event");
        Ok(())
    }

    /// Records a sale or sale return.
    pub fn record_sale_event(
        store: &mut RecordStore,
        catalog: &Catalog,
        date: &str,
        product: &str,
        quantity: u32,
        method: PaymentMethod,
    ) -> Result<(), BooksError> {
        let date = parse_date(date)?;
        let unit_price = validated_unit_price(catalog, product, quantity)?;
        if method == PaymentMethod::PurchaseReturn {
            return Err(BooksError::validation(format!(
                "payment method `{method}` is not valid for a sale event"
            )));
        }

        let total = signed_total(quantity, unit_price, method);
        let description = if method == PaymentMethod::SaleReturn {
            "Sale Return"
        } else {
            "Sale"
        };

        store.sales.push(SaleRecord {
            date,
            product: product.to_string(),
            unit_price,
            quantity,
            total,
            payment_method: method,
        });
        store.transactions.push(TransactionRecord {
            date,
            product: product.to_string(),
            description: description.to_string(),
            amount: total,
            payment_method: method,
        });

        match method {
            PaymentMethod::SaleReturn => {
                // Restock, and refund through Cash regardless of how the
                // original sale was settled.
                store.journal_entries.push(JournalEntry::debit(
                    date,
                    format!("Sale return of {product}"),
                    Account::Inventory,
                    total.abs(),
                ));
                store.journal_entries.push(JournalEntry::credit(
                    date,
                    format!("Cash refund for returned {product}"),
                    Account::Cash,
                    total.abs(),
                ));
            }
            PaymentMethod::Cash | PaymentMethod::Credit => {
                let receiving = if method == PaymentMethod::Cash {
                    Account::Cash
                } else {
                    Account::AccountsReceivable
                };
                store.journal_entries.push(JournalEntry::debit(
                    date,
                    format!("Sale of {product}"),
                    receiving,
                    total,
                ));
                store.journal_entries.push(JournalEntry::credit(
                    date,
                    format!("Inventory reduction for sale of {product}"),
                    Account::Inventory,
                    total,
                ));
            }
            PaymentMethod::PurchaseReturn => unreachable!("rejected above"),
        }

        tracing::info!(%date, product, quantity, total, method = %method, "recorded sale event");
        Ok(())
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, BooksError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| BooksError::validation(format!("date `{raw}` is not a valid YYYY-MM-DD date")))
}

fn validated_unit_price(
    catalog: &Catalog,
    product: &str,
    quantity: u32,
) -> Result<i64, BooksError> {
    if quantity == 0 {
        return Err(BooksError::validation("quantity must be greater than zero"));
    }
    catalog.unit_price(product).ok_or_else(|| {
        BooksError::validation(format!("product `{product}` is not in the catalog"))
    })
}

fn signed_total(quantity: u32, unit_price: i64, method: PaymentMethod) -> i64 {
    let sign = if method.is_return() { -1 } else { 1 };
    sign * i64::from(quantity) * unit_price
}
