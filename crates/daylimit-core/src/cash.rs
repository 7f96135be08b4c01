use chrono::NaiveDate;
use serde::Serialize;

use crate::calculator::{Calculator, Tracker};
use crate::currency::Currency;
use crate::date::local_today;
use crate::locale::Locale;
use crate::TrackerResult;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CashStatus {
    Left { amount: f64, currency: Currency },
    Exhausted,
    Debt { amount: f64, currency: Currency },
}

impl CashStatus {
    /// Classifies a base-unit remainder for display in `currency`.
    ///
    /// A remainder of exactly zero short-circuits before the currency code is
    /// looked up, so it reports `Exhausted` even for unknown codes.
    pub fn evaluate(remained: f64, currency: &str) -> TrackerResult<Self> {
        if remained == 0.0 {
            return Ok(Self::Exhausted);
        }
        let currency = currency.parse::<Currency>()?;
        let converted = currency.convert(remained);
        if converted > 0.0 {
            Ok(Self::Left {
                amount: converted,
                currency,
            })
        } else {
            Ok(Self::Debt {
                amount: converted.abs(),
                currency,
            })
        }
    }

    pub fn render(&self, locale: Locale) -> String {
        match (self, locale) {
            (Self::Left { amount, currency }, Locale::En) => {
                format!("Left for today: {amount:.2} {}", currency.label())
            }
            (Self::Left { amount, currency }, Locale::Ru) => {
                format!("На сегодня осталось {amount:.2} {}", currency.label())
            }
            (Self::Exhausted, Locale::En) => "No money left, hang in there".to_string(),
            (Self::Exhausted, Locale::Ru) => "Денег нет, держись".to_string(),
            (Self::Debt { amount, currency }, Locale::En) => format!(
                "No money left, hang in there: your debt is {amount:.2} {}",
                currency.label()
            ),
            (Self::Debt { amount, currency }, Locale::Ru) => format!(
                "Денег нет, держись: твой долг - {amount:.2} {}",
                currency.label()
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CashCalculator {
    inner: Calculator,
}

impl CashCalculator {
    pub fn new(limit: f64) -> Self {
        Self {
            inner: Calculator::new(limit),
        }
    }

    pub fn cash_status_on(&self, today: NaiveDate, currency: &str) -> TrackerResult<CashStatus> {
        CashStatus::evaluate(self.remained_on(today), currency)
    }

    /// Today's balance message in English. Fails with `unknown_currency`
    /// when `currency` is not one of `rub`, `usd`, `eur` and the balance is
    /// not exactly zero.
    pub fn today_cash_remained(&self, currency: &str) -> TrackerResult<String> {
        self.today_cash_remained_on(local_today(), currency, Locale::En)
    }

    pub fn today_cash_remained_on(
        &self,
        today: NaiveDate,
        currency: &str,
        locale: Locale,
    ) -> TrackerResult<String> {
        Ok(self.cash_status_on(today, currency)?.render(locale))
    }
}

impl Tracker for CashCalculator {
    fn calculator(&self) -> &Calculator {
        &self.inner
    }

    fn calculator_mut(&mut self) -> &mut Calculator {
        &mut self.inner
    }
}
