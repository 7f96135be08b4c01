use chrono::NaiveDate;
use serde::Serialize;

use crate::calculator::{Calculator, Tracker};
use crate::date::local_today;
use crate::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaloriesStatus {
    CanEat { remained: f64 },
    Stop,
}

impl CaloriesStatus {
    pub fn from_remained(remained: f64) -> Self {
        if remained > 0.0 {
            Self::CanEat { remained }
        } else {
            Self::Stop
        }
    }

    /// The remainder is printed as computed, without rounding.
    pub fn render(&self, locale: Locale) -> String {
        match (self, locale) {
            (Self::CanEat { remained }, Locale::En) => format!(
                "You can eat something else today, but with a total energy value of no more than {remained} kcal"
            ),
            (Self::CanEat { remained }, Locale::Ru) => format!(
                "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более {remained} кКал"
            ),
            (Self::Stop, Locale::En) => "Stop eating!".to_string(),
            (Self::Stop, Locale::Ru) => "Хватит есть!".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaloriesCalculator {
    inner: Calculator,
}

impl CaloriesCalculator {
    pub fn new(limit: f64) -> Self {
        Self {
            inner: Calculator::new(limit),
        }
    }

    pub fn calories_status_on(&self, today: NaiveDate) -> CaloriesStatus {
        CaloriesStatus::from_remained(self.remained_on(today))
    }

    /// Advice for the rest of today in English.
    pub fn calories_remained(&self) -> String {
        self.calories_remained_on(local_today(), Locale::En)
    }

    pub fn calories_remained_on(&self, today: NaiveDate, locale: Locale) -> String {
        self.calories_status_on(today).render(locale)
    }
}

impl Tracker for CaloriesCalculator {
    fn calculator(&self) -> &Calculator {
        &self.inner
    }

    fn calculator_mut(&mut self) -> &mut Calculator {
        &mut self.inner
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{CaloriesCalculator, CaloriesStatus};
    use crate::calculator::Tracker;
    use crate::locale::Locale;
    use crate::record::Record;

    fn reference_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 10, 8).unwrap_or_default()
    }

    #[test]
    fn advice_embeds_the_exact_remainder() {
        let mut calculator = CaloriesCalculator::new(1800.0);
        calculator.add_record(Record::dated(439.0, "very tasty cookie", reference_day()));
        let text = calculator.calories_remained_on(reference_day(), Locale::En);
        assert!(text.ends_with("no more than 1361 kcal"));
    }

    #[test]
    fn fractional_remainder_is_not_rounded() {
        let mut calculator = CaloriesCalculator::new(100.0);
        calculator.add_record(Record::dated(0.25, "gum", reference_day()));
        assert_eq!(
            calculator.calories_status_on(reference_day()),
            CaloriesStatus::CanEat { remained: 99.75 }
        );
        let text = calculator.calories_remained_on(reference_day(), Locale::Ru);
        assert!(text.contains("не более 99.75 кКал"));
    }

    #[test]
    fn reaching_the_limit_exactly_means_stop() {
        let mut calculator = CaloriesCalculator::new(500.0);
        calculator.add_record(Record::dated(500.0, "pizza", reference_day()));
        assert_eq!(
            calculator.calories_status_on(reference_day()),
            CaloriesStatus::Stop
        );
        assert_eq!(
            calculator.calories_remained_on(reference_day(), Locale::En),
            "Stop eating!"
        );
        assert_eq!(
            calculator.calories_remained_on(reference_day(), Locale::Ru),
            "Хватит есть!"
        );
    }

    #[test]
    fn status_serializes_with_a_tag() {
        let value = serde_json::to_value(CaloriesStatus::CanEat { remained: 12.0 });
        assert!(value.is_ok());
        if let Ok(json) = value {
            assert_eq!(json["status"], "can_eat");
            assert_eq!(json["remained"], 12.0);
        }
    }
}
