use serde_json::Value;

/// Turns a snake_case field identifier into a display label,
/// e.g. "free_cash_flow" -> "Free Cash Flow".
pub fn format_key(key: &str) -> String {
    key.split('_')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats a number with thousands separators. Integers drop the decimal
/// part, everything else keeps two decimal places.
pub fn format_number(num: f64) -> String {
    if !num.is_finite() {
        return "0".to_string();
    }

    if num.fract() == 0.0 {
        group_thousands(&format!("{:.0}", num))
    } else {
        let formatted = format!("{:.2}", num);
        let parts: Vec<&str> = formatted.split('.').collect();
        let dec_part = parts.get(1).unwrap_or(&"00");
        format!("{}.{}", group_thousands(parts[0]), dec_part)
    }
}

fn group_thousands(int_part: &str) -> String {
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut result = String::new();
    let chars: Vec<_> = digits.chars().collect();
    for (i, c) in chars.iter().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, *c);
    }

    format!("{}{}", sign, result)
}

/// Display form of a scalar JSON value. Strings pass through verbatim,
/// numbers get separators, null renders as empty.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => format_number(n.as_f64().unwrap_or(0.0)),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
