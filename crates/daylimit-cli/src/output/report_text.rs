use std::io;

use serde_json::Value;

use super::format::{key_value_rows, number, text};

pub fn render_calories(data: &Value) -> io::Result<String> {
    let stats = stats(data)?;
    let mut lines = vec![format!(
        "Calories for {} (daily limit {})",
        text(stats, "today"),
        number(stats, "limit")
    )];
    lines.extend(stats_rows(stats));
    lines.push(String::new());
    lines.push(message(data)?.to_string());
    Ok(lines.join("\n"))
}

pub fn render_cash(data: &Value) -> io::Result<String> {
    let stats = stats(data)?;
    let mut lines = vec![format!(
        "Cash for {} (daily limit {} RUB, reporting in {})",
        text(stats, "today"),
        number(stats, "limit"),
        text(data, "requested_currency")
    )];
    lines.extend(stats_rows(stats));
    lines.push(String::new());
    lines.push(message(data)?.to_string());
    Ok(lines.join("\n"))
}

pub fn render_demo(data: &Value) -> io::Result<String> {
    let calories = data
        .get("calories")
        .ok_or_else(|| io::Error::other("demo output requires calories"))?;
    let cash = data
        .get("cash")
        .ok_or_else(|| io::Error::other("demo output requires cash"))?;

    Ok([
        format!("Demo for {}", text(data, "today")),
        String::new(),
        render_calories(calories)?,
        String::new(),
        render_cash(cash)?,
    ]
    .join("\n"))
}

pub fn render_currencies(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("currencies output requires rows"))?;

    let entries = rows
        .iter()
        .map(|row| {
            let label = text(row, "label");
            (
                text(row, "code"),
                format!("{label}  1 {label} = {} RUB", number(row, "rate")),
            )
        })
        .collect::<Vec<(&str, String)>>();

    let mut lines = vec!["Supported currencies (fixed rates)".to_string()];
    lines.extend(key_value_rows(&entries, 2));
    Ok(lines.join("\n"))
}

fn stats(data: &Value) -> io::Result<&Value> {
    data.get("stats")
        .ok_or_else(|| io::Error::other("report output requires stats"))
}

fn message(data: &Value) -> io::Result<&str> {
    data.get("message")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("report output requires message"))
}

fn stats_rows(stats: &Value) -> Vec<String> {
    let record_count = stats
        .get("records")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    key_value_rows(
        &[
            ("Today", number(stats, "today_total")),
            (
                "Last 7 days",
                format!(
                    "{} (since {})",
                    number(stats, "week_total"),
                    text(stats, "week_from")
                ),
            ),
            ("Remaining", number(stats, "remained")),
            ("Records", record_count.to_string()),
        ],
        2,
    )
}
