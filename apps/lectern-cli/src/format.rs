use chrono::{DateTime, Utc};

/// `15420` -> `15.4K`, `1260000` -> `1.3M`.
#[allow(clippy::cast_precision_loss)]
pub fn compact_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// `January 22, 2024`
pub fn calendar_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `Saturday, January 20, 2024`
pub fn long_date(date: DateTime<Utc>) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Age in whole days rounded up, bucketed into days, weeks, then months.
pub fn relative_age(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - date).num_seconds().unsigned_abs();
    let days = secs.div_ceil(86_400);
    match days {
        1 => "1 day ago".to_string(),
        d if d < 7 => format!("{d} days ago"),
        d if d < 30 => format!("{} weeks ago", d.div_ceil(7)),
        d => format!("{} months ago", d.div_ceil(30)),
    }
}
