use crate::{
    common::{error::AppError, event::LedgerEvent, report::ReportRow},
    domain::book::Book,
    worker::handlers::{balance, delete, expense, income, view},
};

#[derive(Debug, Default)]
pub struct Processor {
    processed: usize,
}
impl Processor {
    pub fn new() -> Self {
        Self { processed: 0 }
    }

    /// Number of events applied so far.
    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Applies one event to the book. Mutating commands return no rows;
    /// queries return the rows to report, possibly none.
    pub fn process(
        &mut self,
        book: &mut Book,
        event: LedgerEvent,
    ) -> Result<Vec<ReportRow>, AppError> {
        let rows = match event {
            LedgerEvent::Income { name, date, amount } => {
                income::handle(book, name, date, amount)?;
                Vec::new()
            }
            LedgerEvent::Expense {
                name,
                date,
                amount,
                category,
            } => {
                expense::handle(book, name, date, amount, category)?;
                Vec::new()
            }
            LedgerEvent::DeleteExpense { date, category } => {
                delete::handle(book, &date, &category)?;
                Vec::new()
            }
            LedgerEvent::ViewIncome => view::income(book),
            LedgerEvent::ViewExpenses { date } => view::expenses_on(book, &date),
            LedgerEvent::ExpensesUpTo { date } => view::expenses_up_to(book, &date),
            LedgerEvent::NetBalance => vec![balance::handle(book)?],
        };
        self.processed += 1;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::common::{error::LedgerError, money::Money, report::Section};

    fn expense(date: &str, amount: &str, category: &str) -> LedgerEvent {
        LedgerEvent::Expense {
            name: "n".into(),
            date: date.into(),
            amount: Money::from_str(amount).unwrap(),
            category: category.into(),
        }
    }

    #[test]
    fn mutations_report_nothing_and_queries_report_rows() {
        let mut book = Book::new();
        let mut processor = Processor::new();

        let rows = processor
            .process(&mut book, expense("2024-01-01", "50", "food"))
            .unwrap();
        assert!(rows.is_empty());

        let rows = processor
            .process(
                &mut book,
                LedgerEvent::ViewExpenses {
                    date: "2024-01-01".into(),
                },
            )
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].section, Section::ExpenseOnDate);
        assert_eq!(processor.processed(), 2);
    }

    #[test]
    fn delete_then_balance() {
        let mut book = Book::new();
        let mut processor = Processor::new();

        processor
            .process(
                &mut book,
                LedgerEvent::Income {
                    name: "n".into(),
                    date: "2024-01-01".into(),
                    amount: Money::from_str("100").unwrap(),
                },
            )
            .unwrap();
        processor
            .process(&mut book, expense("2024-01-02", "40", "food"))
            .unwrap();
        processor
            .process(
                &mut book,
                LedgerEvent::DeleteExpense {
                    date: "2024-01-02".into(),
                    category: "food".into(),
                },
            )
            .unwrap();

        let rows = processor.process(&mut book, LedgerEvent::NetBalance).unwrap();
        assert_eq!(rows, vec![ReportRow::balance(Money::from_str("100").unwrap())]);
    }

    #[test]
    fn balance_overflow_is_returned_not_reported() {
        let mut book = Book::new();
        let mut processor = Processor::new();
        for date in ["2024-01-01", "2024-01-02"] {
            processor
                .process(
                    &mut book,
                    LedgerEvent::Income {
                        name: "n".into(),
                        date: date.into(),
                        amount: Money::from_str("900000000000000").unwrap(),
                    },
                )
                .unwrap();
        }

        let err = processor.process(&mut book, LedgerEvent::NetBalance).unwrap_err();
        assert!(matches!(err, AppError::Ledger(LedgerError::TotalOverflow)));
        assert_eq!(processor.processed(), 2);
    }
}
