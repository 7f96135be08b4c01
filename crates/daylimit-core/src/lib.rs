//! Daily limit tracking for calorie intake and cash spend.
//!
//! Records are aggregated over today and the trailing seven days, then
//! compared against a fixed daily limit to produce advisory messages.

pub mod calculator;
pub mod calories;
pub mod cash;
pub mod commands;
pub mod contracts;
pub mod currency;
pub mod date;
pub mod error;
pub mod locale;
pub mod record;

pub use calculator::{Calculator, Summary, Tracker};
pub use calories::{CaloriesCalculator, CaloriesStatus};
pub use cash::{CashCalculator, CashStatus};
pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use currency::Currency;
pub use error::{TrackerError, TrackerResult};
pub use locale::Locale;
pub use record::Record;

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
