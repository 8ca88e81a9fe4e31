//! Форматирование денежных значений для формы

/// Знак валюты, которым подписываются цены и сумма
pub const CURRENCY_SIGN: &str = "₽";

/// Форматирует сумму: два знака после запятой, целые суммы без дробной части
///
/// # Примеры
///
/// ```
/// use contracts::shared::money::format_amount;
/// assert_eq!(format_amount(30.0), "30");
/// assert_eq!(format_amount(89.9), "89.90");
/// ```
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    match formatted.strip_suffix(".00") {
        Some(integer) if integer == "-0" => "0".to_string(),
        Some(integer) => integer.to_string(),
        None => formatted,
    }
}

/// Форматирует цену со знаком валюты: "89.90 ₽"
pub fn format_price(value: f64) -> String {
    format!("{} {}", format_amount(value), CURRENCY_SIGN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(30.0), "30");
        assert_eq!(format_amount(10.5), "10.50");
        assert_eq!(format_amount(0.1 + 0.2), "0.30");
        assert_eq!(format_amount(1234567.891), "1234567.89");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "0 ₽");
        assert_eq!(format_price(99.99), "99.99 ₽");
    }
}
