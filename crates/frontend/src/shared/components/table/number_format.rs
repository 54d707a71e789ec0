//! Number formatting for table cells

/// Formats a number with a space thousands separator and fixed decimals
///
/// ```ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    let digits: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            grouped.push(' ');
        }
        grouped.push(*c);
    }
    let integer = grouped.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", integer, d),
        None => integer,
    }
}

/// Money amount: 2 decimals with thousands separator
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Percentage with an explicit sign, shortest representation: `+5%`, `-12.5%`
pub fn format_signed_percent(value: f64) -> String {
    format!("{:+}%", value)
}
