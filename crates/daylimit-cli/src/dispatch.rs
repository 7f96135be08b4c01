use daylimit_core::commands::calories::{self, CaloriesRunOptions};
use daylimit_core::commands::cash::{self, CashRunOptions};
use daylimit_core::commands::currencies;
use daylimit_core::commands::demo::{self, DemoRunOptions};
use daylimit_core::{SuccessEnvelope, TrackerResult};
use tracing::debug;

use crate::cli::{Cli, Commands};

pub fn dispatch(cli: &Cli) -> TrackerResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Demo { report } => {
            debug!("running demo");
            demo::run_with_options(DemoRunOptions {
                today: report.today.clone(),
                locale: report.locale.clone(),
            })
        }
        Commands::Calories {
            limit,
            entries,
            report,
        } => {
            debug!(limit, entries = entries.len(), "running calories");
            calories::run_with_options(CaloriesRunOptions {
                limit: *limit,
                entries: entries.clone(),
                today: report.today.clone(),
                locale: report.locale.clone(),
            })
        }
        Commands::Cash {
            limit,
            currency,
            entries,
            report,
        } => {
            debug!(limit, currency = %currency, entries = entries.len(), "running cash");
            cash::run_with_options(CashRunOptions {
                limit: *limit,
                currency: currency.clone(),
                entries: entries.clone(),
                today: report.today.clone(),
                locale: report.locale.clone(),
            })
        }
        Commands::Currencies { .. } => currencies::run(),
    }
}
