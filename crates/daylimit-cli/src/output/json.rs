use std::io;

use daylimit_core::{SuccessEnvelope, TrackerError};
use daylimit_core::contracts::envelope::failure_from_error;
use serde::Serialize;
use serde_json::json;

const JSON_VERSION: &str = "v1";

pub fn render_success_json(success: &SuccessEnvelope) -> io::Result<String> {
    let value = match success.command.as_str() {
        "demo" | "calories" | "cash" | "currencies" => json!({
            "ok": true,
            "version": JSON_VERSION,
            "command": success.command,
            "data": success.data.clone(),
        }),
        _ => {
            return Err(io::Error::other(format!(
                "JSON output is not supported for command `{}`",
                success.command
            )));
        }
    };

    serialize_json_pretty(&value)
}

pub fn render_error_json(error: &TrackerError) -> io::Result<String> {
    serialize_json_pretty(&failure_from_error(error))
}

fn serialize_json_pretty<T>(value: &T) -> io::Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use daylimit_core::{SuccessEnvelope, TrackerError};
    use serde_json::{Value, json};

    use super::{render_error_json, render_success_json};

    fn success(command: &str, data: Value) -> SuccessEnvelope {
        SuccessEnvelope {
            ok: true,
            command: command.to_string(),
            version: "0.1.0".to_string(),
            data,
        }
    }

    #[test]
    fn success_json_wraps_data() {
        let rendered = render_success_json(&success("cash", json!({ "message": "hi" })));
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(value["ok"], Value::Bool(true));
                assert_eq!(value["version"], "v1");
                assert_eq!(value["command"], "cash");
                assert_eq!(value["data"]["message"], "hi");
            }
        }
    }

    #[test]
    fn unknown_commands_are_rejected() {
        assert!(render_success_json(&success("import", json!({}))).is_err());
    }

    #[test]
    fn error_json_carries_code_and_data() {
        let rendered = render_error_json(&TrackerError::unknown_currency("xyz"));
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(value["ok"], Value::Bool(false));
                assert_eq!(value["error"]["code"], "unknown_currency");
                assert_eq!(value["data"]["currency"], "xyz");
            }
        }
    }
}
