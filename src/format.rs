//! Display Helpers
//!
//! Text formatting shared by the views.

/// First letter of each word ("Sarah Johnson" -> "SJ")
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Whole US dollars with thousands separators ("$67,500")
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}", grouped)
}

/// Share of `total` reached by `part`, clamped to 0..=100
pub fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64 * 100.0).min(100.0)
}

/// Parse a donation amount typed by the user
///
/// Accepts an optional leading `$` and thousands separators. Empty, zero or
/// malformed input yields `None`.
pub fn parse_amount(input: &str) -> Option<u32> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    match cleaned.parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(amount) => Some(amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
        assert_eq!(initials("  alumni   office "), "AO");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(999), "$999");
        assert_eq!(format_usd(67500), "$67,500");
        assert_eq!(format_usd(1_000_000), "$1,000,000");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(67500, 100000), 67.5);
        assert_eq!(percent(5, 0), 0.0);
        assert_eq!(percent(301, 300), 100.0);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("250"), Some(250));
        assert_eq!(parse_amount(" $1,000 "), Some(1000));
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("ten"), None);
        assert_eq!(parse_amount("-5"), None);
    }
}
