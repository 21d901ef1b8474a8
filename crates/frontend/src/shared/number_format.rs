//! Number formatting for money and percentages (pt-BR conventions)

/// Inserts `.` every three digits of a non-negative integer string
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Formats a number with `.` as thousands separator and `,` as decimal separator
///
/// `format_number_br(1234.5, 2)` gives `"1.234,50"`.
pub fn format_number_br(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut result = String::new();
    // -0,00 is not a thing
    if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        result.push('-');
    }
    result.push_str(&group_thousands(integer_part));
    if let Some(d) = decimal_part {
        result.push(',');
        result.push_str(d);
    }
    result
}

/// Money in reais: `R$ 1.234,56`
pub fn format_brl(value: f64) -> String {
    let number = format_number_br(value, 2);
    match number.strip_prefix('-') {
        Some(abs) => format!("-R$ {}", abs),
        None => format!("R$ {}", number),
    }
}

/// Commission percentage as stored by the API (`10` -> `"10%"`, `7.5` -> `"7,5%"`)
pub fn format_percent(value: f64) -> String {
    format!("{}%", value).replace('.', ",")
}

/// Integer counters with thousands separator
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}
