use chrono::{DateTime, Utc};

/// Short absolute date for table cells, e.g. "Jul 28"
pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%b %d").to_string()
}

/// Relative age against `now`, e.g. "2h ago" / "3d ago"
pub fn format_relative(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - ts).num_seconds().max(0);
    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3600)
    } else {
        format!("{}d ago", seconds / 86_400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_date() {
        let ts = Utc.with_ymd_and_hms(2026, 7, 28, 9, 30, 0).unwrap();
        assert_eq!(format_date(ts), "Jul 28");
    }

    #[test]
    fn test_format_relative_buckets() {
        let now = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
        assert_eq!(format_relative(now - Duration::seconds(30), now), "just now");
        assert_eq!(format_relative(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(format_relative(now - Duration::hours(3), now), "3h ago");
        assert_eq!(format_relative(now - Duration::days(2), now), "2d ago");
    }
}
