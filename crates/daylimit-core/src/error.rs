use serde_json::{Value, json};
use thiserror::Error;

use crate::currency::Currency;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TrackerError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl TrackerError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `daylimit {cmd} --help` for usage."),
            None => "Run `daylimit --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn invalid_date(value: &str, detail: &str) -> Self {
        Self::new(
            "invalid_date",
            &format!("Date `{value}` {detail}"),
            vec![
                "Write record dates as DD.MM.YYYY, for example `26.08.2021`.".to_string(),
                "Omit the date to record the entry for today.".to_string(),
            ],
        )
        .with_data(json!({
            "value": value,
            "expected_format": "DD.MM.YYYY",
        }))
    }

    pub fn unknown_currency(code: &str) -> Self {
        let known = Currency::ALL
            .iter()
            .map(|currency| currency.code())
            .collect::<Vec<&str>>();
        Self::new(
            "unknown_currency",
            &format!("Currency `{code}` is not supported."),
            vec![
                format!("Use one of: {}.", known.join(", ")),
                "Run `daylimit currencies` to list supported currencies and rates.".to_string(),
            ],
        )
        .with_data(json!({
            "currency": code,
            "supported_currencies": known,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }

    pub fn is_internal(&self) -> bool {
        self.code.starts_with("internal_")
    }
}

pub type TrackerResult<T> = Result<T, TrackerError>;
