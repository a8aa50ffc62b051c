use crate::common::money::Money;

/// A command read from the input script, sent from the reader to the worker for processing.
#[derive(Debug)]
pub enum LedgerEvent {
    Income {
        name: String,
        date: String,
        amount: Money,
    },
    Expense {
        name: String,
        date: String,
        amount: Money,
        category: String,
    },
    DeleteExpense { date: String, category: String },
    ViewIncome,
    ViewExpenses { date: String },
    ExpensesUpTo { date: String },
    NetBalance,
}
