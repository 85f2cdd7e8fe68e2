use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One stock movement: a purchase, or a purchase return with a negative
/// total. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryMovement {
    pub date: NaiveDate,
    pub product: String,
    pub quantity: u32,
    #[serde(rename = "price")]
    pub unit_price: i64,
    /// `quantity * unit_price`, negated for a purchase return.
    pub total: i64,
}
