use crate::{
    common::{error::LedgerError, money::Money},
    domain::{
        entry::ChainEntry,
        ledger::{Insertion, Ledger},
    },
};

/// Category under which every income entry is filed. Income on the same date
/// therefore accumulates into a single entry.
pub const INCOME_CATEGORY: &str = "";

/// The income and expense ledgers of one run.
#[derive(Debug, Default)]
pub struct Book {
    pub income: Ledger,
    pub expense: Ledger,
}

impl Book {
    pub fn new() -> Self {
        Self {
            income: Ledger::new(),
            expense: Ledger::new(),
        }
    }

    pub fn record_income(
        &mut self,
        name: String,
        date: String,
        amount: Money,
    ) -> Result<Insertion, LedgerError> {
        self.income
            .insert_or_accumulate(ChainEntry::new(name, date, amount, INCOME_CATEGORY))
    }

    pub fn record_expense(
        &mut self,
        name: String,
        date: String,
        amount: Money,
        category: String,
    ) -> Result<Insertion, LedgerError> {
        self.expense
            .insert_or_accumulate(ChainEntry::new(name, date, amount, category))
    }

    pub fn delete_expense(&mut self, date: &str, category: &str) -> Option<ChainEntry> {
        self.expense.delete(date, category)
    }

    /// Total income minus total expense.
    pub fn net_balance(&self) -> Result<Money, LedgerError> {
        self.income
            .aggregate()?
            .checked_sub(self.expense.aggregate()?)
            .ok_or(LedgerError::TotalOverflow)
    }

    /// Releases both ledgers, returning the number of entries dropped.
    pub fn release(&mut self) -> usize {
        self.income.release() + self.expense.release()
    }
}
