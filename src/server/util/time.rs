//! Billing date calculations.

use chrono::{DateTime, Months, Utc};

/// Next billing date of a paid subscription started at `now`.
///
/// Adds one calendar month, clamping to the last day of a shorter month (January 31st bills
/// next on the last day of February). Falls back to 30 days if the date would overflow.
pub fn one_month_after(now: DateTime<Utc>) -> DateTime<Utc> {
    now.checked_add_months(Months::new(1))
        .unwrap_or_else(|| now + chrono::Duration::days(30))
}
