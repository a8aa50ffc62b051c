use crate::common::money::Money;

/// One ledger line. Entries recorded on the same date share a chain in which
/// each category appears at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainEntry {
    pub name: String,
    pub date: String,
    pub amount: Money,
    pub category: String,
}

impl ChainEntry {
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            amount,
            category: category.into(),
        }
    }
}
