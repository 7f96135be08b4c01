use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::warn;

use crate::TrackerError;

/// Currencies the cash calculator can report in. Rates convert from the
/// limit's base unit (roubles) and are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Rub,
    Usd,
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Self::Rub, Self::Usd, Self::Eur];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Rub => "rub",
            Self::Usd => "usd",
            Self::Eur => "eur",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rub => "RUB",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }

    pub const fn rate(self) -> f64 {
        match self {
            Self::Rub => 1.0,
            Self::Usd => 60.0,
            Self::Eur => 70.0,
        }
    }

    pub fn convert(self, base_amount: f64) -> f64 {
        base_amount / self.rate()
    }
}

impl FromStr for Currency {
    type Err = TrackerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match Self::ALL.iter().find(|currency| currency.code() == value) {
            Some(currency) => Ok(*currency),
            None => {
                warn!(currency = value, "unknown currency requested");
                Err(TrackerError::unknown_currency(value))
            }
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
