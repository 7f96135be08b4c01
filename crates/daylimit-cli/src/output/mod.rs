mod error_text;
mod format;
mod json;
mod mode;
mod report_text;

use std::io;

use daylimit_core::{SuccessEnvelope, TrackerError};

use crate::stdout_io::write_stdout;

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    write_stdout(&body, true)
}

pub fn print_failure(error: &TrackerError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    write_stdout(&body, true)
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "demo" => report_text::render_demo(&success.data),
        "calories" => report_text::render_calories(&success.data),
        "cash" => report_text::render_cash(&success.data),
        "currencies" => report_text::render_currencies(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}
