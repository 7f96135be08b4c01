use serde_json::Value;

pub fn key_value_rows(entries: &[(&str, String)], indent: usize) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }

    let label_width = entries
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);
    let padding = " ".repeat(indent);

    entries
        .iter()
        .map(|(label, value)| format!("{padding}{label:<label_width$}  {value}"))
        .collect()
}

/// Renders a JSON number the way the calculators print amounts: whole values
/// without a fractional part, everything else as computed.
pub fn number(data: &Value, key: &str) -> String {
    match data.get(key).and_then(Value::as_f64) {
        Some(value) => value.to_string(),
        None => "-".to_string(),
    }
}

pub fn text<'a>(data: &'a Value, key: &str) -> &'a str {
    data.get(key).and_then(Value::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{key_value_rows, number, text};

    #[test]
    fn aligns_labels_to_the_widest() {
        let rows = key_value_rows(
            &[("Today", "439".to_string()), ("Last 7 days", "469".to_string())],
            2,
        );
        assert_eq!(rows[0], "  Today        439");
        assert_eq!(rows[1], "  Last 7 days  469");
    }

    #[test]
    fn numbers_drop_trailing_zero_fraction() {
        let data = json!({ "whole": 1361.0, "part": 99.75 });
        assert_eq!(number(&data, "whole"), "1361");
        assert_eq!(number(&data, "part"), "99.75");
        assert_eq!(number(&data, "missing"), "-");
        assert_eq!(text(&data, "missing"), "");
    }
}
