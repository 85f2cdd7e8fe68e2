use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a purchase or sale was settled, or which kind of reversal it is.
///
/// The aliases accept the Indonesian labels the original system wrote to
/// its data file; saves use the English variant names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentMethod {
    #[serde(alias = "Tunai")]
    Cash,
    #[serde(alias = "Kredit")]
    Credit,
    #[serde(alias = "Retur Pembelian")]
    PurchaseReturn,
    #[serde(alias = "Retur Penjualan")]
    SaleReturn,
}

impl PaymentMethod {
    /// Returns reverse an earlier event and flip the sign of its total.
    pub fn is_return(self) -> bool {
        matches!(self, Self::PurchaseReturn | Self::SaleReturn)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Credit => "Credit",
            Self::PurchaseReturn => "Purchase Return",
            Self::SaleReturn => "Sale Return",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Summary row written alongside every inventory movement or sale record.
///
/// There is no identifier linking this row to its sibling record; the only
/// link is equality of `(amount, product)`, which the consistency resolver
/// exploits when cascading a deletion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    /// Product name, serialized as `type` for compatibility with the
    /// original data file.
    #[serde(rename = "type")]
    pub product: String,
    pub description: String,
    pub amount: i64,
    pub payment_method: PaymentMethod,
}
