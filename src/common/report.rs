use crate::{common::money::Money, domain::entry::ChainEntry};

/// Which query produced a report row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Income,
    ExpenseOnDate,
    ExpensesUpTo,
    NetBalance,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Income => "income",
            Section::ExpenseOnDate => "expense_on_date",
            Section::ExpensesUpTo => "expenses_up_to",
            Section::NetBalance => "net_balance",
        }
    }
}

/// One line of query output. `kind` is the label the caller files the entry
/// under (`Income`, `Expense`, or `Net` for the balance line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub section: Section,
    pub name: String,
    pub date: String,
    pub category: String,
    pub kind: &'static str,
    pub amount: Money,
}

impl ReportRow {
    pub fn from_entry(section: Section, kind: &'static str, entry: &ChainEntry) -> Self {
        Self {
            section,
            name: entry.name.clone(),
            date: entry.date.clone(),
            category: entry.category.clone(),
            kind,
            amount: entry.amount,
        }
    }

    pub fn balance(amount: Money) -> Self {
        Self {
            section: Section::NetBalance,
            name: String::new(),
            date: String::new(),
            category: String::new(),
            kind: "Net",
            amount,
        }
    }
}
