use crate::{
    common::{error::AppError, money::Money},
    domain::book::Book,
};

pub fn handle(book: &mut Book, name: String, date: String, amount: Money) -> Result<(), AppError> {
    let outcome = book.record_income(name, date, amount)?;
    tracing::debug!(?outcome, %amount, "income recorded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::handle;
    use crate::{common::money::Money, domain::book::Book};

    #[test]
    fn income_lands_in_income_ledger_only() {
        let mut book = Book::new();

        for amount in ["10", "5"] {
            let amount = Money::from_str(amount).unwrap();
            handle(&mut book, "ana".into(), "2024-01-01".into(), amount).unwrap();
        }

        assert_eq!(book.income.len(), 1);
        assert_eq!(book.income.aggregate().unwrap(), Money::from_str("15").unwrap());
        assert!(book.expense.is_empty());
    }
}
