use chrono::NaiveDate;

use crate::TrackerResult;
use crate::date::{local_today, parse_record_date};

/// One spend or intake entry. Fields are read-only once built, so the same
/// record can be added to several calculators.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    amount: f64,
    comment: String,
    date: NaiveDate,
}

impl Record {
    /// Builds a record, parsing `date` as `DD.MM.YYYY` or falling back to
    /// the current local date when it is omitted.
    pub fn new(amount: f64, comment: &str, date: Option<&str>) -> TrackerResult<Self> {
        let date = match date {
            Some(value) => parse_record_date(value)?,
            None => local_today(),
        };
        Ok(Self::dated(amount, comment, date))
    }

    pub fn dated(amount: f64, comment: &str, date: NaiveDate) -> Self {
        Self {
            amount,
            comment: comment.to_string(),
            date,
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}
