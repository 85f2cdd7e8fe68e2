//! Record-store domain models and the fixed product catalog.

pub mod catalog;
pub mod inventory;
pub mod journal;
pub mod sale;
pub mod store;
pub mod transaction;

pub use catalog::{Catalog, CatalogEntry};
pub use inventory::InventoryMovement;
pub use journal::{Account, JournalEntry};
pub use sale::SaleRecord;
pub use store::RecordStore;
pub use transaction::{PaymentMethod, TransactionRecord};
