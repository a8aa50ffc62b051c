use std::collections::TryReserveError;

#[derive(thiserror::Error, Debug)]
pub enum LedgerError {
    #[error("could not reserve ledger storage: {0}")]
    Allocation(#[from] TryReserveError),
    #[error("amount overflow accumulating {category:?} on {date}")]
    AmountOverflow { date: String, category: String },
    #[error("ledger total exceeds the representable amount range")]
    TotalOverflow,
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("missing input csv path. usage: cargo run -- <commands.csv> [--skip-invalid]")]
    MissingArg,
    #[error("unknown argument: {0}")]
    UnknownArg(String),
    #[error("failed to open input file: {0}")]
    OpenInput(std::io::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}
