use rust_decimal::Decimal;

/// Format an amount as a dollar value with thousands separators: $1,234.56
pub fn money(val: Decimal) -> String {
    let negative = val < Decimal::ZERO;
    let abs = val.abs();
    let cents = format!("{:.2}", abs);
    let parts: Vec<&str> = cents.split('.').collect();
    let int_part = parts[0];
    let dec_part = parts[1];

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_formatting() {
        assert_eq!(money(dec!(1234.56)), "$1,234.56");
        assert_eq!(money(dec!(-500.00)), "-$500.00");
        assert_eq!(money(dec!(0.00)), "$0.00");
        assert_eq!(money(dec!(1000000.99)), "$1,000,000.99");
        assert_eq!(money(dec!(42.10)), "$42.10");
    }
}
