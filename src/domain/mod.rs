pub mod book;
pub mod entry;
pub mod ledger;
pub mod traverse;
