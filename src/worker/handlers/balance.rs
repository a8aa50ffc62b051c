use crate::{
    common::{error::AppError, report::ReportRow},
    domain::book::Book,
};

pub fn handle(book: &Book) -> Result<ReportRow, AppError> {
    let net = book.net_balance()?;
    tracing::debug!(%net, "net balance computed");
    Ok(ReportRow::balance(net))
}
