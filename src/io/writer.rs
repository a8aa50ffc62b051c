use std::io::Write;

use crate::common::report::ReportRow;

#[derive(serde::Serialize)]
/// Internal CSV output row representation.
///
/// Headers written (in this order): `section,name,date,category,kind,amount`.
/// Amounts are formatted to 2 decimal places as strings.
struct OutputRow<'a> {
    section: &'static str,
    name: &'a str,
    date: &'a str,
    category: &'a str,
    kind: &'static str,
    amount: String,
}

impl<'a> From<&'a ReportRow> for OutputRow<'a> {
    fn from(row: &'a ReportRow) -> Self {
        Self {
            section: row.section.as_str(),
            name: &row.name,
            date: &row.date,
            category: &row.category,
            kind: row.kind,
            amount: row.amount.to_string_2dp(),
        }
    }
}

/// Builds the CSV writer used for report output. The header row is written
/// together with the first report row.
pub fn report_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer)
}

/// Writes report rows in the order given.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use date_ledger::common::{money::Money, report::ReportRow};
/// use date_ledger::io::writer::{report_writer, write_rows};
///
/// let mut wtr = report_writer(Vec::new());
/// write_rows(&mut wtr, &[ReportRow::balance(Money::new(12_500))]).unwrap();
///
/// let s = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
/// assert_eq!(s, "section,name,date,category,kind,amount\nnet_balance,,,,Net,1.25\n");
/// ```
pub fn write_rows<W: Write>(
    wtr: &mut csv::Writer<W>,
    rows: &[ReportRow],
) -> Result<(), csv::Error> {
    for row in rows {
        wtr.serialize(OutputRow::from(row))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::{
        common::{money::Money, report::Section},
        domain::entry::ChainEntry,
    };

    // Helper: writes rows to a Vec<u8> and returns UTF-8 string.
    fn write_to_string(rows: &[ReportRow]) -> String {
        let mut wtr = report_writer(Vec::new());
        write_rows(&mut wtr, rows).unwrap();
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn writes_header_once_and_rows_in_order() {
        let food = ChainEntry::new("ana", "2024-01-01", Money::from_str("80").unwrap(), "food");
        let rent = ChainEntry::new("bo", "2024-01-05", Money::from_str("700.5").unwrap(), "rent");
        let rows = vec![
            ReportRow::from_entry(Section::ExpensesUpTo, "Expense", &food),
            ReportRow::from_entry(Section::ExpensesUpTo, "Expense", &rent),
        ];

        let s = write_to_string(&rows);
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 3, "expected header + 2 rows");
        assert_eq!(lines[0], "section,name,date,category,kind,amount");
        assert_eq!(lines[1], "expenses_up_to,ana,2024-01-01,food,Expense,80.00");
        assert_eq!(lines[2], "expenses_up_to,bo,2024-01-05,rent,Expense,700.50");
    }

    #[test]
    fn income_rows_keep_empty_category() {
        let pay = ChainEntry::new("ana", "2024-01-01", Money::from_str("1000").unwrap(), "");
        let s = write_to_string(&[ReportRow::from_entry(Section::Income, "Income", &pay)]);
        assert_eq!(s.lines().nth(1), Some("income,ana,2024-01-01,,Income,1000.00"));
    }

    #[test]
    fn negative_balance_is_signed() {
        let s = write_to_string(&[ReportRow::balance(Money::from_str("-12.3").unwrap())]);
        assert_eq!(s.lines().nth(1), Some("net_balance,,,,Net,-12.30"));
    }

    #[test]
    fn no_rows_writes_nothing() {
        assert_eq!(write_to_string(&[]), "");
    }
}
