use crate::TrackerResult;
use crate::commands::calories::{self, CaloriesRunOptions};
use crate::commands::cash::{self, CashRunOptions};
use crate::commands::common::resolve_today;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{DemoData, EntryInput};
use crate::date::format_record_date;
use crate::locale::resolve_locale;

const CALORIES_LIMIT: f64 = 1800.0;
const CASH_LIMIT: f64 = 1000.0;
const CASH_CURRENCY: &str = "rub";

#[derive(Debug, Default)]
pub struct DemoRunOptions {
    pub today: Option<String>,
    pub locale: Option<String>,
}

pub fn run() -> TrackerResult<SuccessEnvelope> {
    run_with_options(DemoRunOptions::default())
}

/// Two sample calculators, each fed one entry for today and one long past.
pub fn run_with_options(options: DemoRunOptions) -> TrackerResult<SuccessEnvelope> {
    let locale = resolve_locale(options.locale.as_deref())?;
    let today = resolve_today(options.today.as_deref())?;
    let today_text = format_record_date(&today);

    let calories = calories::evaluate(&CaloriesRunOptions {
        limit: CALORIES_LIMIT,
        entries: vec![
            EntryInput::new(439.0, "very tasty cookie", None),
            EntryInput::new(30.0, "juice", Some("26.08.2021")),
        ],
        today: Some(today_text.clone()),
        locale: Some(locale.as_str().to_string()),
    })?;

    let cash = cash::evaluate(&CashRunOptions {
        limit: CASH_LIMIT,
        currency: CASH_CURRENCY.to_string(),
        entries: vec![
            EntryInput::new(150.0, "matcha latte", None),
            EntryInput::new(2000.0, "debt to sister", Some("01.10.2021")),
        ],
        today: Some(today_text.clone()),
        locale: Some(locale.as_str().to_string()),
    })?;

    success(
        "demo",
        DemoData {
            locale,
            today: today_text,
            calories,
            cash,
        },
    )
}
