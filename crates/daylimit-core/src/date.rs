use chrono::{Duration, Local, NaiveDate};

use crate::{TrackerError, TrackerResult};

pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Length of the trailing window reported by `week_stats`, today included.
pub const WEEK_WINDOW_DAYS: i64 = 7;

/// Current local calendar date. Read on every call so long-running processes
/// pick up midnight rollover.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Exclusive lower bound of the trailing week ending at `today`.
pub fn week_window_start(today: NaiveDate) -> NaiveDate {
    today - Duration::days(WEEK_WINDOW_DAYS)
}

pub fn in_week_window(date: NaiveDate, today: NaiveDate) -> bool {
    week_window_start(today) < date && date <= today
}

pub fn parse_record_date(value: &str) -> TrackerResult<NaiveDate> {
    if !looks_like_record_date(value) {
        return Err(TrackerError::invalid_date(
            value,
            "must use DD.MM.YYYY format.",
        ));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        TrackerError::invalid_date(value, "must be a real calendar date in DD.MM.YYYY format.")
    })
}

pub fn format_record_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn looks_like_record_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[2] != b'.' || bytes[5] != b'.' {
        return false;
    }

    for index in [0usize, 1, 3, 4, 6, 7, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{format_record_date, in_week_window, parse_record_date, week_window_start};

    #[test]
    fn parses_day_month_year() {
        let parsed = parse_record_date("26.08.2021");
        assert!(parsed.is_ok());
        if let Ok(date) = parsed {
            assert_eq!(Some(date), NaiveDate::from_ymd_opt(2021, 8, 26));
            assert_eq!(format_record_date(&date), "26.08.2021");
        }
    }

    #[test]
    fn rejects_iso_and_unpadded_shapes() {
        for value in ["2021-08-26", "6.8.2021", "26/08/2021", "26.08.21", ""] {
            let parsed = parse_record_date(value);
            assert!(parsed.is_err(), "{value} should be rejected");
            if let Err(error) = parsed {
                assert_eq!(error.code, "invalid_date");
                assert!(error.message.contains("DD.MM.YYYY"));
            }
        }
    }

    #[test]
    fn rejects_impossible_calendar_values() {
        let parsed = parse_record_date("31.02.2021");
        assert!(parsed.is_err());
        if let Err(error) = parsed {
            assert!(error.message.contains("calendar"));
        }
    }

    #[test]
    fn week_window_is_half_open() {
        let today = NaiveDate::from_ymd_opt(2021, 10, 8);
        assert!(today.is_some());
        if let Some(today) = today {
            let start = week_window_start(today);
            assert_eq!(Some(start), NaiveDate::from_ymd_opt(2021, 10, 1));
            assert!(!in_week_window(start, today));
            assert!(in_week_window(start.succ_opt().unwrap_or(today), today));
            assert!(in_week_window(today, today));
            assert!(!in_week_window(today.succ_opt().unwrap_or(start), today));
        }
    }
}
