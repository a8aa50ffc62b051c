use bigdecimal::{BigDecimal, ParseBigDecimalError, ToPrimitive};
use std::fmt;
const SCALE: i64 = 10_000;

#[derive(Debug, Clone, Copy, Default)]
/// A signed monetary amount stored in ten-thousandths of a unit.
///
/// Ledger amounts are accumulated and summed many times over; keeping them as
/// scaled integers makes every total exact regardless of the order in which the
/// tree is walked.
///
/// # Examples
/// ```
/// use date_ledger::common::money::Money;
///
/// let amount: Money = "12.5".parse().unwrap();
/// assert_eq!(amount.as_i64(), 125_000);
/// assert_eq!(amount.to_string_2dp(), "12.50");
/// ```
pub struct Money(i64);

impl Money {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    /// Sums `amounts` in an `i128` accumulator, or `None` when the final total
    /// does not fit. Intermediate totals may leave the `i64` range.
    pub fn checked_sum<'a>(amounts: impl IntoIterator<Item = &'a Money>) -> Option<Money> {
        let total: i128 = amounts.into_iter().map(|m| i128::from(m.0)).sum();
        i64::try_from(total).ok().map(Money)
    }

    pub fn to_string_4dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.4}", bd)
    }

    /// Two fractional digits, the precision used in report rows. Ties round
    /// half-to-even (`2.675` prints as `2.68`).
    pub fn to_string_2dp(&self) -> String {
        let bd = (BigDecimal::from(self.0) / BigDecimal::from(SCALE)).round(2);
        format!("{:.2}", bd)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_4dp())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(Money::zero(), Money(0));
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!(Money::from_str("1").unwrap(), Money(10000));
        assert_eq!(Money::from_str("80").unwrap(), Money(800_000));
        assert_eq!(Money::from_str("1.2345").unwrap(), Money(12345));
        assert_eq!(Money::from_str("-3.5").unwrap(), Money(-35000));
        assert_eq!(Money::from_str("  2.0000 ").unwrap(), Money(20000));
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(Money::from_str("").is_err());
        assert!(Money::from_str("   ").is_err());
        assert!(Money::from_str("ten").is_err());
    }

    #[test]
    fn test_to_string_2dp() {
        assert_eq!(Money(800_000).to_string_2dp(), "80.00");
        assert_eq!(Money(12_500).to_string_2dp(), "1.25");
        assert_eq!(Money(0).to_string_2dp(), "0.00");
        assert_eq!(Money(-205_000).to_string_2dp(), "-20.50");
    }

    #[test]
    fn test_checked_add() {
        assert_eq!(Money(5).checked_add(Money(7)), Some(Money(12)));
        assert_eq!(Money(i64::MAX).checked_add(Money(1)), None);
    }

    #[test]
    fn test_checked_sub() {
        assert_eq!(Money(100).checked_sub(Money(250)), Some(Money(-150)));
        assert_eq!(Money(i64::MIN).checked_sub(Money(1)), None);
    }

    #[test]
    fn test_checked_sum() {
        let amounts = [Money(10), Money(20), Money(-5)];
        assert_eq!(Money::checked_sum(&amounts), Some(Money(25)));
        assert_eq!(Money::checked_sum(Vec::<Money>::new().iter()), Some(Money::zero()));
        assert_eq!(Money::checked_sum(&[Money(i64::MAX), Money(1)]), None);
        assert_eq!(
            Money::checked_sum(&[Money(i64::MAX), Money(1), Money(-1)]),
            Some(Money(i64::MAX))
        );
    }

    #[test]
    fn test_to_string_2dp_rounds_half_to_even() {
        assert_eq!(Money(26_750).to_string_2dp(), "2.68");
        assert_eq!(Money(26_250).to_string_2dp(), "2.62");
    }
}
