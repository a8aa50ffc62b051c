use crate::{
    common::report::{ReportRow, Section},
    domain::book::Book,
};

pub const INCOME_LABEL: &str = "Income";
pub const EXPENSE_LABEL: &str = "Expense";

/// Every income entry, oldest date first.
pub fn income(book: &Book) -> Vec<ReportRow> {
    book.income
        .iter()
        .map(|entry| ReportRow::from_entry(Section::Income, INCOME_LABEL, entry))
        .collect()
}

/// The expense entries recorded on exactly `date`.
pub fn expenses_on(book: &Book, date: &str) -> Vec<ReportRow> {
    match book.expense.find_exact(date) {
        Some(chain) => chain
            .map(|entry| ReportRow::from_entry(Section::ExpenseOnDate, EXPENSE_LABEL, entry))
            .collect(),
        None => {
            tracing::warn!(date, "no expense record found for date");
            Vec::new()
        }
    }
}

/// Every expense entry dated on or before `date`.
pub fn expenses_up_to(book: &Book, date: &str) -> Vec<ReportRow> {
    let rows: Vec<ReportRow> = book
        .expense
        .up_to(date)
        .map(|entry| ReportRow::from_entry(Section::ExpensesUpTo, EXPENSE_LABEL, entry))
        .collect();
    if rows.is_empty() {
        tracing::warn!(date, "no expense records up to date");
    }
    rows
}
