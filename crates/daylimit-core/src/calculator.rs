use chrono::NaiveDate;
use tracing::debug;

use crate::date::{in_week_window, local_today};
use crate::record::Record;

/// Daily limit plus the append-only log of records it is checked against.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    limit: f64,
    records: Vec<Record>,
}

impl Calculator {
    pub fn new(limit: f64) -> Self {
        Self {
            limit,
            records: Vec::new(),
        }
    }
}

/// Point-in-time view of a calculator's windows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub today: NaiveDate,
    pub limit: f64,
    pub today_total: f64,
    pub week_total: f64,
    pub remained: f64,
    pub record_count: usize,
}

/// Aggregation shared by every calculator flavour. Implementors only expose
/// their underlying [`Calculator`]; sums and the remaining balance come from
/// the provided methods.
///
/// The `*_on` methods take the reference date explicitly. The plain variants
/// read the local date on each call, so results move when the day rolls over
/// even without new records.
pub trait Tracker {
    fn calculator(&self) -> &Calculator;

    fn calculator_mut(&mut self) -> &mut Calculator;

    fn limit(&self) -> f64 {
        self.calculator().limit
    }

    fn records(&self) -> &[Record] {
        &self.calculator().records
    }

    fn add_record(&mut self, record: Record) {
        let calculator = self.calculator_mut();
        debug!(
            amount = record.amount(),
            date = %record.date(),
            comment = record.comment(),
            "adding record"
        );
        calculator.records.push(record);
    }

    fn today_stats(&self) -> f64 {
        self.today_stats_on(local_today())
    }

    fn today_stats_on(&self, today: NaiveDate) -> f64 {
        self.records()
            .iter()
            .filter(|record| record.date() == today)
            .map(Record::amount)
            .sum()
    }

    fn week_stats(&self) -> f64 {
        self.week_stats_on(local_today())
    }

    fn week_stats_on(&self, today: NaiveDate) -> f64 {
        self.records()
            .iter()
            .filter(|record| in_week_window(record.date(), today))
            .map(Record::amount)
            .sum()
    }

    fn remained(&self) -> f64 {
        self.remained_on(local_today())
    }

    fn remained_on(&self, today: NaiveDate) -> f64 {
        self.limit() - self.today_stats_on(today)
    }

    fn summary_on(&self, today: NaiveDate) -> Summary {
        let summary = Summary {
            today,
            limit: self.limit(),
            today_total: self.today_stats_on(today),
            week_total: self.week_stats_on(today),
            remained: self.remained_on(today),
            record_count: self.records().len(),
        };
        debug!(
            %today,
            today_total = summary.today_total,
            week_total = summary.week_total,
            remained = summary.remained,
            "evaluated windows"
        );
        summary
    }
}

impl Tracker for Calculator {
    fn calculator(&self) -> &Calculator {
        self
    }

    fn calculator_mut(&mut self) -> &mut Calculator {
        self
    }
}
