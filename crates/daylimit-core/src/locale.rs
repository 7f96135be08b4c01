use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::{TrackerError, TrackerResult};

pub const LOCALE_ENV_VAR: &str = "DAYLIMIT_LOCALE";

/// Language used for advisory messages. Embedded figures are identical
/// across locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }
}

impl FromStr for Locale {
    type Err = TrackerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ru" => Ok(Self::Ru),
            _ => Err(TrackerError::invalid_argument_with_recovery(
                &format!("Locale `{value}` is not supported."),
                vec![
                    "Use `en` or `ru`.".to_string(),
                    format!("Unset `{LOCALE_ENV_VAR}` to fall back to `en`."),
                ],
            )),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explicit choice wins, then `DAYLIMIT_LOCALE`, then English.
pub fn resolve_locale(explicit: Option<&str>) -> TrackerResult<Locale> {
    if let Some(value) = explicit {
        return value.parse();
    }
    match std::env::var(LOCALE_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => value.parse(),
        _ => Ok(Locale::default()),
    }
}
