use crate::{
    common::{error::AppError, money::Money},
    domain::book::Book,
};

pub fn handle(
    book: &mut Book,
    name: String,
    date: String,
    amount: Money,
    category: String,
) -> Result<(), AppError> {
    let outcome = book.record_expense(name, date, amount, category)?;
    tracing::debug!(?outcome, %amount, "expense recorded");
    Ok(())
}
