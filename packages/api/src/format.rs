//! Display formatting shared by every view.
//!
//! Dates render in the admin's local time zone through [`date`]; tests pin a
//! zone with [`date_in`].

use chrono::{DateTime, Local, TimeZone, Utc};

/// Report descriptions on list cards.
pub const REPORT_PREVIEW_CHARS: usize = 150;
/// Ticket descriptions on list cards.
pub const TICKET_PREVIEW_CHARS: usize = 120;
/// Admin notes on report cards.
pub const NOTES_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `Jan 5, 2025`
    Short,
    /// `Jan 5, 2025, 03:04 PM`
    ShortTime,
    /// `January 5, 2025`
    Long,
    /// `January 5, 2025, 03:04 PM`
    LongTime,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            DateStyle::Short => "%b %-d, %Y",
            DateStyle::ShortTime => "%b %-d, %Y, %I:%M %p",
            DateStyle::Long => "%B %-d, %Y",
            DateStyle::LongTime => "%B %-d, %Y, %I:%M %p",
        }
    }
}

/// Format a backend timestamp in local time.
pub fn date(at: &DateTime<Utc>, style: DateStyle) -> String {
    date_in(at, &Local, style)
}

pub fn date_in<Tz>(at: &DateTime<Utc>, tz: &Tz, style: DateStyle) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(tz).format(style.pattern()).to_string()
}

/// `₹1234.50`
pub fn currency(amount: f64) -> String {
    format!("₹{amount:.2}")
}

/// `4.3`
pub fn rating(value: f64) -> String {
    format!("{value:.1}")
}

/// `12,345`
pub fn count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Avatar initials: first letter of each word of the name, or the first two
/// characters of the phone number when there is no name.
pub fn initials(full_name: Option<&str>, phone: &str) -> String {
    match full_name.filter(|n| !n.trim().is_empty()) {
        Some(name) => name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect(),
        None => phone.chars().take(2).collect(),
    }
}

/// `helper` → `Helper`.
pub fn title_case(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Cut `text` to `max` characters, appending `...` when anything was cut.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// First eight characters of an id.
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((cut, _)) => &id[..cut],
        None => id,
    }
}

/// Time left on a block. `None` expiry means the block is permanent.
pub fn time_remaining(expires_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(expires_at) = expires_at else {
        return "Permanent".to_string();
    };
    let left = expires_at - now;
    if left <= chrono::Duration::zero() {
        return "Expired".to_string();
    }
    let hours = left.num_hours();
    let days = hours / 24;
    if days > 0 {
        format!("{days}d {}h remaining", hours % 24)
    } else {
        format!("{hours}h remaining")
    }
}

/// How long a block lasted. `None` unblock time means it is still in force.
pub fn block_duration(blocked_at: DateTime<Utc>, unblocked_at: Option<DateTime<Utc>>) -> String {
    let Some(unblocked_at) = unblocked_at else {
        return "Ongoing".to_string();
    };
    let hours = (unblocked_at - blocked_at).num_hours();
    let days = hours / 24;
    if days > 0 {
        format!("{} {}", plural(days, "day"), plural(hours % 24, "hour"))
    } else {
        plural(hours, "hour")
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Width of a distribution bar as a percentage of `total`, clamped to
/// `0.0..=100.0`. A zero total draws an empty bar.
pub fn bar_width(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_date_styles() {
        let when = at("2025-01-05T15:04:00Z");
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(date_in(&when, &utc, DateStyle::Short), "Jan 5, 2025");
        assert_eq!(
            date_in(&when, &utc, DateStyle::ShortTime),
            "Jan 5, 2025, 03:04 PM"
        );
        assert_eq!(date_in(&when, &utc, DateStyle::Long), "January 5, 2025");
        assert_eq!(
            date_in(&when, &utc, DateStyle::LongTime),
            "January 5, 2025, 03:04 PM"
        );
    }

    #[test]
    fn test_date_shifts_to_zone() {
        let when = at("2025-01-05T20:00:00Z");
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        assert_eq!(date_in(&when, &ist, DateStyle::Short), "Jan 6, 2025");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(currency(1250.5), "₹1250.50");
        assert_eq!(currency(0.0), "₹0.00");
        assert_eq!(rating(4.26), "4.3");
        assert_eq!(rating(0.0), "0.0");
        assert_eq!(count(0), "0");
        assert_eq!(count(999), "999");
        assert_eq!(count(1000), "1,000");
        assert_eq!(count(1234567), "1,234,567");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials(Some("Ravi Kumar"), "98765"), "RK");
        assert_eq!(initials(Some("  Meera  "), "98765"), "M");
        assert_eq!(initials(None, "98765"), "98");
        assert_eq!(initials(Some(""), "7"), "7");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("helper"), "Helper");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_truncate_and_short_id() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("abcdefghijk", 10), "abcdefghij...");
        assert_eq!(truncate("₹₹₹₹", 2), "₹₹...");
        assert_eq!(short_id("5f0c2a9e-1111-2222"), "5f0c2a9e");
        assert_eq!(short_id("abc"), "abc");
    }

    #[test]
    fn test_time_remaining() {
        let now = at("2025-01-01T00:00:00Z");
        assert_eq!(time_remaining(None, now), "Permanent");
        assert_eq!(time_remaining(Some(now), now), "Expired");
        assert_eq!(time_remaining(Some(now - Duration::hours(1)), now), "Expired");
        assert_eq!(
            time_remaining(Some(now + Duration::minutes(5 * 60 + 59)), now),
            "5h remaining"
        );
        assert_eq!(
            time_remaining(Some(now + Duration::hours(50)), now),
            "2d 2h remaining"
        );
        assert_eq!(
            time_remaining(Some(now + Duration::minutes(30)), now),
            "0h remaining"
        );
    }

    #[test]
    fn test_block_duration() {
        let start = at("2025-01-01T00:00:00Z");
        assert_eq!(block_duration(start, None), "Ongoing");
        assert_eq!(block_duration(start, Some(start + Duration::hours(1))), "1 hour");
        assert_eq!(block_duration(start, Some(start + Duration::hours(5))), "5 hours");
        assert_eq!(
            block_duration(start, Some(start + Duration::hours(25))),
            "1 day 1 hour"
        );
        assert_eq!(
            block_duration(start, Some(start + Duration::hours(72))),
            "3 days 0 hours"
        );
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(5, 0), 0.0);
        assert_eq!(bar_width(1, 4), 25.0);
        assert_eq!(bar_width(9, 4), 100.0);
        assert_eq!(bar_width(0, 4), 0.0);
    }
}
