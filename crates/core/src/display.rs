//! Derived display values.
//!
//! Pure functions from raw record fields to the strings and numbers the
//! templates print.

use chrono::{DateTime, Utc};

use crate::types::Money;

/// Percent off MRP, rounded half up: `round((mrp - price) / mrp * 100)`.
///
/// Returns 0 when there is no discount, when MRP is zero, or when the two
/// amounts are in different currencies.
#[must_use]
pub fn discount_percent(price: Money, mrp: Money) -> u32 {
    if price.currency_code != mrp.currency_code || mrp.amount <= 0 || price.amount >= mrp.amount {
        return 0;
    }
    let diff = i128::from(mrp.amount) - i128::from(price.amount.max(0));
    let mrp = i128::from(mrp.amount);
    let rounded = (diff * 200 + mrp) / (mrp * 2);
    u32::try_from(rounded).unwrap_or(100)
}

/// Short relative time, e.g. "3 hours ago".
///
/// Anything 30 days or older (or in the future by more than a minute)
/// falls back to an absolute date like `15 Jun 2024`.
#[must_use]
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let seconds = elapsed.num_seconds();
    if seconds < -60 {
        return then.format("%-d %b %Y").to_string();
    }
    if seconds < 60 {
        return "just now".to_string();
    }
    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return plural(minutes, "minute");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }
    let days = elapsed.num_days();
    if days < 30 {
        return plural(days, "day");
    }
    then.format("%-d %b %Y").to_string()
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::types::CurrencyCode;

    fn inr(amount: i64) -> Money {
        Money::new(amount, CurrencyCode::INR)
    }

    #[test]
    fn test_discount_percent_rounds() {
        assert_eq!(discount_percent(inr(349_900), inr(399_900)), 13);
        assert_eq!(discount_percent(inr(50), inr(100)), 50);
        // 1/3 off => 33.33 => 33
        assert_eq!(discount_percent(inr(200), inr(300)), 33);
        // 2/3 off => 66.67 => 67
        assert_eq!(discount_percent(inr(100), inr(300)), 67);
    }

    #[test]
    fn test_discount_percent_half_rounds_up() {
        // 12.5% => 13
        assert_eq!(discount_percent(inr(875), inr(1_000)), 13);
    }

    #[test]
    fn test_no_discount() {
        assert_eq!(discount_percent(inr(100), inr(100)), 0);
        assert_eq!(discount_percent(inr(120), inr(100)), 0);
        assert_eq!(discount_percent(inr(0), inr(0)), 0);
        assert_eq!(
            discount_percent(inr(50), Money::new(100, CurrencyCode::USD)),
            0
        );
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(relative_time(now - Duration::seconds(20), now), "just now");
        assert_eq!(relative_time(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(relative_time(now - Duration::minutes(45), now), "45 minutes ago");
        assert_eq!(relative_time(now - Duration::hours(3), now), "3 hours ago");
        assert_eq!(relative_time(now - Duration::days(1), now), "1 day ago");
        assert_eq!(relative_time(now - Duration::days(29), now), "29 days ago");
    }

    #[test]
    fn test_relative_time_falls_back_to_date() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let then = Utc.with_ymd_and_hms(2024, 3, 2, 9, 30, 0).unwrap();
        assert_eq!(relative_time(then, now), "2 Mar 2024");
    }
}
