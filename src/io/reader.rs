use crate::common::{event::LedgerEvent, money::Money};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the script headers. Only the
/// columns a command needs have to be filled in.
struct CsvRow {
    op: String,
    name: Option<String>,
    date: Option<String>,
    amount: Option<String>,
    category: Option<String>,
}

impl CsvRow {
    fn required(field: Option<String>, op: &str, column: &str) -> Result<String, String> {
        field
            .filter(|value| !value.is_empty())
            .ok_or_else(|| format!("{op} missing {column}"))
    }

    fn amount(&mut self, op: &str) -> Result<Money, String> {
        let raw = Self::required(self.amount.take(), op, "amount")?;
        Money::from_str(&raw).map_err(|e| format!("{op} amount {raw:?}: {e}"))
    }
}

/// Reads and validates command rows from a CSV reader.
///
/// Supported headers: `op,name,date,amount,category`.
/// The `op` field is matched case-insensitively; each op checks that the
/// columns it needs are present and errors name the op and the missing column.
///
/// # Examples
///
/// ```
/// use date_ledger::io::reader::read_commands;
/// use date_ledger::common::event::LedgerEvent;
/// use csv::ReaderBuilder;
///
/// let data = "op,name,date,amount,category\n\
/// expense,ana,2024-01-01,12.50,food\n\
/// balance,,,,\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let events: Vec<_> = read_commands(&mut rdr).collect();
///
/// assert!(matches!(events[0], Ok(LedgerEvent::Expense { .. })));
/// assert!(matches!(events[1], Ok(LedgerEvent::NetBalance)));
/// ```
pub fn read_commands<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<LedgerEvent, String>> + '_ {
    rdr.deserialize::<CsvRow>().map(|res| {
        let mut row = res.map_err(|e| e.to_string())?;
        let op = row.op.trim().to_ascii_lowercase();

        match op.as_str() {
            "income" => Ok(LedgerEvent::Income {
                amount: row.amount(&op)?,
                name: CsvRow::required(row.name, &op, "name")?,
                date: CsvRow::required(row.date, &op, "date")?,
            }),
            "expense" => Ok(LedgerEvent::Expense {
                amount: row.amount(&op)?,
                name: CsvRow::required(row.name, &op, "name")?,
                date: CsvRow::required(row.date, &op, "date")?,
                category: CsvRow::required(row.category, &op, "category")?,
            }),
            "delete" => Ok(LedgerEvent::DeleteExpense {
                date: CsvRow::required(row.date, &op, "date")?,
                category: CsvRow::required(row.category, &op, "category")?,
            }),
            "view_income" => Ok(LedgerEvent::ViewIncome),
            "view_expense" => Ok(LedgerEvent::ViewExpenses {
                date: CsvRow::required(row.date, &op, "date")?,
            }),
            "expenses_up_to" => Ok(LedgerEvent::ExpensesUpTo {
                date: CsvRow::required(row.date, &op, "date")?,
            }),
            "balance" => Ok(LedgerEvent::NetBalance),
            other => Err(format!("unknown command: {other}")),
        }
    })
}
