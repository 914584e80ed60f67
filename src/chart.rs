use serde::Serialize;
use serde_json::Value;

/// Default categorical palette, cycled by entry position.
pub const PALETTE: [&str; 10] = [
    "#3b82f6", "#10b981", "#f59e0b", "#8b5cf6", "#ef4444", "#06b6d4", "#ec4899", "#84cc16",
    "#f97316", "#6366f1",
];

pub const GREEN: &str = "#22c55e";
pub const RED: &str = "#ef4444";
pub const ORANGE: &str = "#f97316";
pub const YELLOW: &str = "#eab308";
pub const GRAY: &str = "#9ca3af";

/// Labels longer than this get shortened before charting.
pub const LABEL_LIMIT: usize = 15;
const LABEL_PREFIX_LEN: usize = 12;

/// One normalized point handed to the charting collaborator. `value` is
/// always finite and `color` is always assigned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, Value>>,
}

/// A labeled raw value on its way into a chart series.
#[derive(Debug, Clone)]
pub struct SeriesEntry {
    pub label: String,
    pub raw: Value,
    pub color: Option<String>,
    pub fallback: Option<f64>,
}

impl SeriesEntry {
    pub fn new(label: impl Into<String>, raw: Value) -> Self {
        SeriesEntry {
            label: label.into(),
            raw,
            color: None,
            fallback: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = Some(fallback);
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SeriesOptions {
    /// Fold signs away before charting (cash-flow magnitudes).
    pub absolute: bool,
    /// Drop entries whose coerced value is not positive.
    pub drop_non_positive: bool,
    pub label_limit: usize,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        SeriesOptions {
            absolute: false,
            drop_non_positive: false,
            label_limit: LABEL_LIMIT,
        }
    }
}

/// Coerces a raw JSON value to a finite f64. Strings are stripped down to
/// digits, dots and minus signs before parsing ("$1,234.56" -> 1234.56).
/// Anything unparseable, and any non-finite result, yields `fallback`.
pub fn coerce_numeric(raw: &Value, fallback: f64) -> f64 {
    let value = match raw {
        Value::Number(n) => n.as_f64().unwrap_or(fallback),
        Value::String(s) => parse_numeric_str(s).unwrap_or(fallback),
        _ => fallback,
    };
    if value.is_finite() {
        value
    } else if fallback.is_finite() {
        fallback
    } else {
        0.0
    }
}

fn parse_numeric_str(s: &str) -> Option<f64> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Shortens a label to a 12-character prefix plus ellipsis once it exceeds
/// `limit` characters. Labels at or under the limit pass through untouched.
pub fn truncate_label(label: &str, limit: usize) -> String {
    if label.chars().count() > limit {
        let prefix: String = label.chars().take(LABEL_PREFIX_LEN).collect();
        format!("{}...", prefix)
    } else {
        label.to_string()
    }
}

/// Normalizes labeled raw values into chart points.
///
/// Palette colors are bound to each entry's original position before the
/// non-positive filter runs, so dropping an entry never shifts the colors
/// of the ones that remain.
pub fn to_series(entries: &[SeriesEntry], options: SeriesOptions) -> Vec<ChartPoint> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let mut value = coerce_numeric(&entry.raw, entry.fallback.unwrap_or(0.0));
            if options.absolute {
                value = value.abs();
            }
            let color = entry
                .color
                .clone()
                .unwrap_or_else(|| PALETTE[i % PALETTE.len()].to_string());
            ChartPoint {
                name: truncate_label(&entry.label, options.label_limit),
                value,
                color,
                metadata: None,
            }
        })
        .filter(|point| !options.drop_non_positive || point.value > 0.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_currency_string() {
        assert_eq!(coerce_numeric(&json!("$1,234.56"), 0.0), 1234.56);
        assert_eq!(coerce_numeric(&json!("1.85x"), 0.0), 1.85);
        assert_eq!(coerce_numeric(&json!("-$50M"), 0.0), -50.0);
    }

    #[test]
    fn test_coerce_garbage_defaults() {
        assert_eq!(coerce_numeric(&json!("abc"), 0.0), 0.0);
        assert_eq!(coerce_numeric(&json!("abc"), 42.0), 42.0);
        assert_eq!(coerce_numeric(&Value::Null, 15.0), 15.0);
        assert_eq!(coerce_numeric(&json!(true), 7.0), 7.0);
    }

    #[test]
    fn test_coerce_number_passthrough() {
        assert_eq!(coerce_numeric(&json!(3.25), 0.0), 3.25);
        assert_eq!(coerce_numeric(&json!(-17), 0.0), -17.0);
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("a".repeat(20).as_str(), LABEL_LIMIT), format!("{}...", "a".repeat(12)));
        // A label exactly at the threshold is left alone.
        let fifteen = "b".repeat(15);
        assert_eq!(truncate_label(&fifteen, LABEL_LIMIT), fifteen);
        assert_eq!(truncate_label("short", LABEL_LIMIT), "short");
    }

    #[test]
    fn test_palette_wraps_at_ten() {
        let entries: Vec<SeriesEntry> = (0..12)
            .map(|i| SeriesEntry::new(format!("entry {}", i), json!(i + 1)))
            .collect();
        let points = to_series(&entries, SeriesOptions::default());
        assert_eq!(points.len(), 12);
        assert_eq!(points[0].color, points[10].color);
        assert_eq!(points[1].color, points[11].color);
        assert_ne!(points[0].color, points[1].color);
    }

    #[test]
    fn test_filter_keeps_original_colors() {
        // Entries at positions 2 and 5 coerce to non-positive values and get
        // dropped; the survivors keep the colors of their original slots.
        let raws = [10.0, 20.0, 0.0, 30.0, 40.0, -5.0, 50.0];
        let entries: Vec<SeriesEntry> = raws
            .iter()
            .enumerate()
            .map(|(i, v)| SeriesEntry::new(format!("entry {}", i), json!(v)))
            .collect();
        let points = to_series(
            &entries,
            SeriesOptions {
                drop_non_positive: true,
                ..Default::default()
            },
        );
        assert_eq!(points.len(), 5);
        let expected = [0usize, 1, 3, 4, 6];
        for (point, original_idx) in points.iter().zip(expected) {
            assert_eq!(point.color, PALETTE[original_idx % PALETTE.len()]);
        }
    }

    #[test]
    fn test_absolute_folding() {
        let entries = vec![SeriesEntry::new("Operating", json!("-$50M"))];
        let points = to_series(
            &entries,
            SeriesOptions {
                absolute: true,
                ..Default::default()
            },
        );
        assert_eq!(points[0].value, 50.0);
    }

    #[test]
    fn test_explicit_color_wins() {
        let entries = vec![SeriesEntry::new("Critical", json!(3)).with_color(RED)];
        let points = to_series(&entries, SeriesOptions::default());
        assert_eq!(points[0].color, RED);
    }

    #[test]
    fn test_fallback_applies_to_missing_value() {
        let entries = vec![SeriesEntry::new("Revenue", Value::Null).with_fallback(100.0)];
        let points = to_series(&entries, SeriesOptions::default());
        assert_eq!(points[0].value, 100.0);
    }
}
