use crate::TrackerResult;
use crate::calories::CaloriesCalculator;
use crate::commands::common::{load_entries, resolve_today, stats_data, validate_limit};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{CaloriesData, EntryInput};
use crate::locale::resolve_locale;

#[derive(Debug, Default)]
pub struct CaloriesRunOptions {
    pub limit: f64,
    pub entries: Vec<EntryInput>,
    pub today: Option<String>,
    pub locale: Option<String>,
}

pub fn run(limit: f64, entries: Vec<EntryInput>) -> TrackerResult<SuccessEnvelope> {
    run_with_options(CaloriesRunOptions {
        limit,
        entries,
        today: None,
        locale: None,
    })
}

pub fn run_with_options(options: CaloriesRunOptions) -> TrackerResult<SuccessEnvelope> {
    success("calories", evaluate(&options)?)
}

pub(crate) fn evaluate(options: &CaloriesRunOptions) -> TrackerResult<CaloriesData> {
    validate_limit(options.limit, "calories")?;
    let locale = resolve_locale(options.locale.as_deref())?;
    let today = resolve_today(options.today.as_deref())?;

    let mut calculator = CaloriesCalculator::new(options.limit);
    load_entries(&mut calculator, &options.entries, today, "calories")?;

    let status = calculator.calories_status_on(today);
    Ok(CaloriesData {
        locale,
        stats: stats_data(&calculator, today),
        status,
        message: status.render(locale),
    })
}
