//! Calendar helpers: month keys, week ranges and display formatting.
//!
//! Everything here is pure and takes "today" as an argument so callers
//! decide which clock to use.

use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, NaiveDateTime, Utc};

use super::error::ValidationError;

/// Validate a `YYYY-MM` month key
pub fn parse_month(month: &str) -> Result<String, ValidationError> {
    let is_valid = month.len() == 7
        && month.as_bytes()[4] == b'-'
        && NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d").is_ok();

    if is_valid {
        Ok(month.to_string())
    } else {
        Err(ValidationError::InvalidMonth(month.to_string()))
    }
}

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Resolve the date of a new transaction.
///
/// Missing or blank input means today. Accepts `YYYY-MM-DD`, a naive ISO
/// date-time (minutes or seconds precision, `T` or space separated), or
/// RFC 3339; only the calendar date is kept.
pub fn parse_transaction_date(
    raw: Option<&str>,
    today: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(today),
        Some(value) => value,
    };

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Some(datetime) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return Ok(datetime.date());
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Ok(datetime.date_naive());
    }

    Err(ValidationError::InvalidDate(raw.to_string()))
}

/// The Monday-to-Sunday week containing `today`
pub fn week_dates(today: NaiveDate) -> [NaiveDate; 7] {
    let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    let mut days = [monday; 7];
    for (offset, day) in days.iter_mut().enumerate() {
        *day = monday + Duration::days(offset as i64);
    }
    days
}

/// Month keys for the last `count` months, oldest first.
///
/// Steps back in 30-day strides from `today`, so a label can repeat or a
/// short month can be skipped. Callers rely on this exact behavior.
/// Strides reaching past the earliest representable date are left out.
pub fn trend_months(today: NaiveDate, count: u32) -> Vec<String> {
    (0..count)
        .rev()
        .filter_map(|i| today.checked_sub_days(Days::new(30 * u64::from(i))))
        .map(|day| day.format("%Y-%m").to_string())
        .collect()
}

/// "2026-10" -> "Oct 2026"
pub fn month_label(month: &str) -> String {
    NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|_| month.to_string())
}

/// "Oct 16, 2026 at 02:05 PM"
pub fn format_last_updated(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %d, %Y at %I:%M %p").to_string()
}

/// "02:05 PM"
pub fn format_time_of_day(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Weekday};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2026-10").unwrap(), "2026-10");
        assert!(parse_month("2026-13").is_err());
        assert!(parse_month("2026-1").is_err());
        assert!(parse_month("202610").is_err());
        assert!(parse_month("October").is_err());
        assert_eq!(
            parse_month("2026/10"),
            Err(ValidationError::InvalidMonth("2026/10".to_string()))
        );
    }

    #[test]
    fn test_parse_transaction_date_variants() {
        let today = date("2026-10-16");
        assert_eq!(parse_transaction_date(None, today).unwrap(), today);
        assert_eq!(parse_transaction_date(Some("  "), today).unwrap(), today);
        assert_eq!(parse_transaction_date(Some("2026-09-30"), today).unwrap(), date("2026-09-30"));
        assert_eq!(
            parse_transaction_date(Some("2026-09-30T23:15:00"), today).unwrap(),
            date("2026-09-30")
        );
        assert_eq!(
            parse_transaction_date(Some("2026-09-30T10:30:00-04:00"), today).unwrap(),
            date("2026-09-30")
        );
        assert!(parse_transaction_date(Some("30/09/2026"), today).is_err());
    }

    #[test]
    fn test_parse_transaction_date_without_seconds() {
        let today = date("2026-10-16");
        assert_eq!(
            parse_transaction_date(Some("2026-09-30T08:45"), today).unwrap(),
            date("2026-09-30")
        );
        assert_eq!(
            parse_transaction_date(Some("2026-09-30 08:45"), today).unwrap(),
            date("2026-09-30")
        );
        assert_eq!(
            parse_transaction_date(Some("2026-09-30 08:45:12.5"), today).unwrap(),
            date("2026-09-30")
        );
        assert!(parse_transaction_date(Some("2026-09-30T8"), today).is_err());
    }

    #[test]
    fn test_week_dates_start_on_monday() {
        // 2026-10-16 is a Friday
        let week = week_dates(date("2026-10-16"));
        assert_eq!(week[0], date("2026-10-12"));
        assert_eq!(week[0].weekday(), Weekday::Mon);
        assert_eq!(week[6], date("2026-10-18"));
        assert_eq!(week[6].weekday(), Weekday::Sun);

        // Sunday belongs to the week that started six days earlier
        let sunday_week = week_dates(date("2026-10-18"));
        assert_eq!(sunday_week[0], date("2026-10-12"));

        // Weeks spanning a month boundary
        let boundary = week_dates(date("2026-11-01"));
        assert_eq!(boundary[0], date("2026-10-26"));
    }

    #[test]
    fn test_trend_months_oldest_first() {
        let months = trend_months(date("2026-10-16"), 3);
        assert_eq!(months, vec!["2026-08", "2026-09", "2026-10"]);
        assert!(trend_months(date("2026-10-16"), 0).is_empty());
    }

    #[test]
    fn test_trend_months_long_windows() {
        let months = trend_months(date("2026-10-16"), 121);
        assert_eq!(months.len(), 121);
        assert_eq!(months.last().map(String::as_str), Some("2026-10"));
        assert_eq!(months[0], "2016-12");

        // Strides before the earliest representable date are dropped, not panicked on
        let near_min = NaiveDate::MIN + Days::new(45);
        assert_eq!(trend_months(near_min, 5).len(), 2);
    }

    #[test]
    fn test_trend_months_keeps_thirty_day_approximation() {
        // 2026-03-31 minus 30 days is 2026-03-01, so March appears twice
        // and February is skipped.
        let months = trend_months(date("2026-03-31"), 2);
        assert_eq!(months, vec!["2026-03", "2026-03"]);
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(month_label("2026-10"), "Oct 2026");
        let ts = Utc.with_ymd_and_hms(2026, 10, 16, 14, 5, 0).unwrap();
        assert_eq!(format_last_updated(ts), "Oct 16, 2026 at 02:05 PM");
        assert_eq!(format_time_of_day(ts), "02:05 PM");
    }
}
