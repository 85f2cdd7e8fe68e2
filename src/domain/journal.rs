use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The closed set of ledger accounts this system posts to.
///
/// The aliases accept the Indonesian account names found in data files
/// written by the original system; saves use the English variant names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Account {
    #[serde(alias = "Kas")]
    Cash,
    #[serde(alias = "Persediaan")]
    Inventory,
    #[serde(alias = "Piutang Usaha")]
    AccountsReceivable,
    #[serde(alias = "Utang Usaha")]
    AccountsPayable,
}

impl Account {
    pub fn label(self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Inventory => "Inventory",
            Self::AccountsReceivable => "Accounts Receivable",
            Self::AccountsPayable => "Accounts Payable",
        }
    }
}

impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One posting to a ledger account. By convention exactly one of
/// `debit`/`credit` is non-zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JournalEntry {
    pub date: NaiveDate,
    pub description: String,
    pub account: Account,
    pub debit: i64,
    pub credit: i64,
}

impl JournalEntry {
    pub fn debit(date: NaiveDate, description: impl Into<String>, account: Account, amount: i64) -> Self {
        Self {
            date,
            description: description.into(),
            account,
            debit: amount,
            credit: 0,
        }
    }

    pub fn credit(date: NaiveDate, description: impl Into<String>, account: Account, amount: i64) -> Self {
        Self {
            date,
            description: description.into(),
            account,
            debit: 0,
            credit: amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_post_to_one_side_only() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let debit = JournalEntry::debit(date, "Purchase of Sendok A", Account::Inventory, 150_000);
        assert_eq!((debit.debit, debit.credit), (150_000, 0));

        let credit = JournalEntry::credit(date, "Cash payment for Sendok A", Account::Cash, 150_000);
        assert_eq!((credit.debit, credit.credit), (0, 150_000));
    }
}
