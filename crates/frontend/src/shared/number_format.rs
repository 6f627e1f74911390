//! Number formatting for dashboard figures (es-MX style: `1,234.50`)

/// Formats a number with `,` thousand separators and `decimals` fraction digits
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Money without cents, e.g. `$450,000`
pub fn format_money(value: f64) -> String {
    with_currency(format_number_with_decimals(value, 0))
}

/// Money with cents, e.g. `$285.50`
pub fn format_money_cents(value: f64) -> String {
    with_currency(format_number_with_decimals(value, 2))
}

pub fn format_count(value: u32) -> String {
    format_number_with_decimals(f64::from(value), 0)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

fn with_currency(number: String) -> String {
    match number.strip_prefix('-') {
        Some(rest) => format!("-${}", rest),
        None => format!("${}", number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(-123456.0, 0), "-123,456");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(450_000.0), "$450,000");
        assert_eq!(format_money(0.0), "$0");
        assert_eq!(format_money(-1500.0), "-$1,500");
        assert_eq!(format_money_cents(285.5), "$285.50");
    }

    #[test]
    fn test_format_count_and_percent() {
        assert_eq!(format_count(1_579), "1,579");
        assert_eq!(format_percent(84.444), "84.4%");
    }
}
