use chrono::{Duration, NaiveDate};

use crate::calculator::Tracker;
use crate::contracts::types::{EntryInput, RecordRow, StatsData};
use crate::date::{format_record_date, local_today, parse_record_date, week_window_start};
use crate::record::Record;
use crate::{TrackerError, TrackerResult};

/// Reference date for a command run: the override when given, otherwise the
/// local date at call time.
pub fn resolve_today(today_override: Option<&str>) -> TrackerResult<NaiveDate> {
    match today_override {
        Some(value) => parse_record_date(value),
        None => Ok(local_today()),
    }
}

pub fn validate_limit(limit: f64, command: &str) -> TrackerResult<()> {
    if !limit.is_finite() {
        return Err(TrackerError::invalid_argument_for_command(
            "`limit` must be a finite number.",
            Some(command),
        ));
    }
    Ok(())
}

/// Validates every entry before any is added, so a bad date leaves the
/// tracker untouched. Entries without a date land on `today`.
pub fn load_entries<T>(
    tracker: &mut T,
    entries: &[EntryInput],
    today: NaiveDate,
    command: &str,
) -> TrackerResult<()>
where
    T: Tracker,
{
    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        if !entry.amount.is_finite() {
            return Err(TrackerError::invalid_argument_for_command(
                &format!("Entry `{}` has a non-finite amount.", entry.comment),
                Some(command),
            ));
        }
        let record = match entry.date.as_deref() {
            Some(value) => Record::new(entry.amount, &entry.comment, Some(value))?,
            None => Record::dated(entry.amount, &entry.comment, today),
        };
        records.push(record);
    }
    for record in records {
        tracker.add_record(record);
    }
    Ok(())
}

pub fn stats_data<T>(tracker: &T, today: NaiveDate) -> StatsData
where
    T: Tracker,
{
    let summary = tracker.summary_on(today);
    StatsData {
        today: format_record_date(&today),
        week_from: format_record_date(&(week_window_start(today) + Duration::days(1))),
        limit: summary.limit,
        today_total: summary.today_total,
        week_total: summary.week_total,
        remained: summary.remained,
        records: tracker
            .records()
            .iter()
            .map(|record| RecordRow {
                amount: record.amount(),
                comment: record.comment().to_string(),
                date: format_record_date(&record.date()),
            })
            .collect(),
    }
}
