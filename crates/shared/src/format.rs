//! Norwegian display formatting for prices, percentages and post dates.

use chrono::{DateTime, Datelike};

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAI", "JUN", "JUL", "AUG", "SEP", "OKT", "NOV", "DES",
];

/// Digit grouping with a no-break space, as `toLocaleString('no-NO')` does.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{a0}');
        }
        out.push(c);
    }
    out
}

pub fn format_nok(value: u64) -> String {
    format!("{} kr", group_thousands(value))
}

/// Whole-krone amount from a float field, e.g. price per m².
pub fn format_amount(value: f64) -> String {
    group_thousands(value.round().max(0.0) as u64)
}

fn decimal_comma(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}").replace('.', ",")
}

/// Signed percentage, e.g. `+2,4%`.
pub fn format_change(percent: f64) -> String {
    let sign = if percent >= 0.0 { "+" } else { "" };
    format!("{sign}{}%", decimal_comma(percent, 1))
}

/// Millions with one decimal, e.g. `5,8 mill.`
pub fn format_millions(millions: f64) -> String {
    format!("{} mill.", decimal_comma(millions, 1))
}

/// `JAN 12`-style label for an RFC 3339 timestamp.
pub fn post_date_label(published_at: &str) -> Option<String> {
    let date = DateTime::parse_from_rfc3339(published_at).ok()?;
    Some(format!("{} {:02}", MONTHS[date.month0() as usize], date.day()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1\u{a0}000");
        assert_eq!(group_thousands(8_032_500), "8\u{a0}032\u{a0}500");
    }

    #[test]
    fn test_format_nok() {
        assert_eq!(format_nok(94_500), "94\u{a0}500 kr");
    }

    #[test]
    fn test_format_amount_rounds() {
        assert_eq!(format_amount(94_499.6), "94\u{a0}500");
    }

    #[test]
    fn test_format_change_sign() {
        assert_eq!(format_change(2.4), "+2,4%");
        assert_eq!(format_change(-1.3), "-1,3%");
        assert_eq!(format_change(0.0), "+0,0%");
    }

    #[test]
    fn test_format_millions() {
        assert_eq!(format_millions(5.8), "5,8 mill.");
    }

    #[test]
    fn test_post_date_label() {
        assert_eq!(post_date_label("2026-01-12T00:00:00Z").as_deref(), Some("JAN 12"));
        assert_eq!(post_date_label("2025-05-03T10:00:00+02:00").as_deref(), Some("MAI 03"));
        assert_eq!(post_date_label("12. januar"), None);
    }
}
