use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Credit or debit, derived from the sign of the amount — never supplied
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnKind {
    Credit,
    Debit,
}

impl TxnKind {
    pub fn from_amount(amount: Decimal) -> Self {
        if amount >= Decimal::ZERO {
            Self::Credit
        } else {
            Self::Debit
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }
}

/// A normalized statement row ready for insertion.
#[derive(Debug, Clone)]
pub struct StatementRecord {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub kind: TxnKind,
    pub balance_after: Option<Decimal>,
}

/// Monetary columns are stored as integer cents so SQL aggregation stays
/// exact. Values are rescaled to 2 before conversion.
pub fn to_cents(value: Decimal) -> i64 {
    let mut v = value;
    v.rescale(2);
    v.mantissa() as i64
}

pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_kind_from_amount_sign() {
        assert_eq!(TxnKind::from_amount(dec!(35.00)), TxnKind::Credit);
        assert_eq!(TxnKind::from_amount(dec!(0.00)), TxnKind::Credit);
        assert_eq!(TxnKind::from_amount(dec!(-25.49)), TxnKind::Debit);
    }

    #[test]
    fn test_cents_roundtrip() {
        assert_eq!(to_cents(dec!(1234.56)), 123456);
        assert_eq!(to_cents(dec!(-25.49)), -2549);
        assert_eq!(to_cents(dec!(100)), 10000);
        assert_eq!(from_cents(123456), dec!(1234.56));
        assert_eq!(from_cents(-2549), dec!(-25.49));
        assert_eq!(from_cents(to_cents(dec!(10541.95))), dec!(10541.95));
    }
}
