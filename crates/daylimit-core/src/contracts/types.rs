use serde::Serialize;

use crate::calories::CaloriesStatus;
use crate::cash::CashStatus;
use crate::locale::Locale;

/// Caller-supplied entry before its date has been validated.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryInput {
    pub amount: f64,
    pub comment: String,
    pub date: Option<String>,
}

impl EntryInput {
    pub fn new(amount: f64, comment: &str, date: Option<&str>) -> Self {
        Self {
            amount,
            comment: comment.to_string(),
            date: date.map(std::string::ToString::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordRow {
    pub amount: f64,
    pub comment: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsData {
    pub today: String,
    pub week_from: String,
    pub limit: f64,
    pub today_total: f64,
    pub week_total: f64,
    pub remained: f64,
    pub records: Vec<RecordRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaloriesData {
    pub locale: Locale,
    pub stats: StatsData,
    pub status: CaloriesStatus,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CashData {
    pub locale: Locale,
    pub requested_currency: String,
    pub stats: StatsData,
    pub status: CashStatus,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoData {
    pub locale: Locale,
    pub today: String,
    pub calories: CaloriesData,
    pub cash: CashData,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrencyRow {
    pub code: String,
    pub label: String,
    pub rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrenciesData {
    pub base: String,
    pub rows: Vec<CurrencyRow>,
}
