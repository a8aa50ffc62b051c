use crate::{common::error::AppError, domain::book::Book};

/// Deletes one expense entry. A missing (date, category) pair is not an error.
pub fn handle(book: &mut Book, date: &str, category: &str) -> Result<(), AppError> {
    match book.delete_expense(date, category) {
        Some(removed) => {
            tracing::debug!(date, category, amount = %removed.amount, "expense deleted")
        }
        None => tracing::warn!(date, category, "no expense to delete"),
    }
    Ok(())
}
