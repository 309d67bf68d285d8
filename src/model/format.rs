//! Number formatting used across dashboards and tables.

/// Format a dollar amount with thousands separators and two decimals, e.g. `$1,245.75`.
pub fn currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = group_thousands(cents / 100);

    format!("{}${}.{:02}", sign, dollars, cents % 100)
}

/// Shorten a count for stat cards, e.g. `245000` becomes `245.0K`.
pub fn compact(value: u64) -> String {
    match value {
        v if v >= 1_000_000 => format!("{:.1}M", v as f64 / 1_000_000.0),
        v if v >= 1_000 => format!("{:.1}K", v as f64 / 1_000.0),
        v => v.to_string(),
    }
}

pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(currency(1245.75), "$1,245.75");
        assert_eq!(currency(50.0), "$50.00");
        assert_eq!(currency(1_000_000.5), "$1,000,000.50");
        assert_eq!(currency(-25.0), "-$25.00");
    }

    #[test]
    fn compact_counts() {
        assert_eq!(compact(999), "999");
        assert_eq!(compact(245_000), "245.0K");
        assert_eq!(compact(1_240_000), "1.2M");
    }
}
