use crate::TrackerResult;
use crate::cash::CashCalculator;
use crate::commands::common::{load_entries, resolve_today, stats_data, validate_limit};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{CashData, EntryInput};
use crate::locale::resolve_locale;

#[derive(Debug, Default)]
pub struct CashRunOptions {
    pub limit: f64,
    pub currency: String,
    pub entries: Vec<EntryInput>,
    pub today: Option<String>,
    pub locale: Option<String>,
}

pub fn run(limit: f64, currency: &str, entries: Vec<EntryInput>) -> TrackerResult<SuccessEnvelope> {
    run_with_options(CashRunOptions {
        limit,
        currency: currency.to_string(),
        entries,
        today: None,
        locale: None,
    })
}

pub fn run_with_options(options: CashRunOptions) -> TrackerResult<SuccessEnvelope> {
    success("cash", evaluate(&options)?)
}

pub(crate) fn evaluate(options: &CashRunOptions) -> TrackerResult<CashData> {
    validate_limit(options.limit, "cash")?;
    let locale = resolve_locale(options.locale.as_deref())?;
    let today = resolve_today(options.today.as_deref())?;

    let mut calculator = CashCalculator::new(options.limit);
    load_entries(&mut calculator, &options.entries, today, "cash")?;

    let status = calculator.cash_status_on(today, &options.currency)?;
    Ok(CashData {
        locale,
        requested_currency: options.currency.clone(),
        stats: stats_data(&calculator, today),
        status,
        message: status.render(locale),
    })
}
