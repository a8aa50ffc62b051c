//! Income and expense ledgers indexed by date.
//!
//! Each ledger is a binary search tree keyed by date where every node owns the
//! chain of entries recorded on that date, one entry per category. The command
//! pipeline (`io` -> `worker` -> `io`) drives a pair of ledgers from a CSV
//! script and writes query results back out as CSV.

pub mod app;
pub mod common;
pub mod domain;
pub mod io;
pub mod worker;
