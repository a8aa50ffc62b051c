pub mod balance;
pub mod delete;
pub mod expense;
pub mod income;
pub mod view;
