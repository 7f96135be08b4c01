use crate::TrackerResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{CurrenciesData, CurrencyRow};
use crate::currency::Currency;

pub fn run() -> TrackerResult<SuccessEnvelope> {
    let rows = Currency::ALL
        .iter()
        .map(|currency| CurrencyRow {
            code: currency.code().to_string(),
            label: currency.label().to_string(),
            rate: currency.rate(),
        })
        .collect::<Vec<CurrencyRow>>();

    success(
        "currencies",
        CurrenciesData {
            base: Currency::Rub.code().to_string(),
            rows,
        },
    )
}
