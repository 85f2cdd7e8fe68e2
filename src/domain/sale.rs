use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::transaction::PaymentMethod;

/// One revenue event: a sale, or a sale return with a negative total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaleRecord {
    pub date: NaiveDate,
    pub product: String,
    #[serde(rename = "price")]
    pub unit_price: i64,
    pub quantity: u32,
    /// `quantity * unit_price`, negated for a sale return.
    pub total: i64,
    pub payment_method: PaymentMethod,
}
