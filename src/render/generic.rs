//! Fallback renderer for records with no specialized shape. Walks an
//! arbitrarily nested JSON tree and emits display blocks deterministically,
//! preserving the record's own field order.

use serde_json::Value;
use std::fmt;

use super::output::Block;
use crate::analysis::AnalysisRecord;
use crate::format::{display_value, format_key, format_number};

/// Nesting bound for recursive rendering. The data model forbids cycles,
/// but external data may violate the contract; recursion past this depth
/// surfaces as a `StructuralError` instead of a crash.
pub const MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralError {
    pub key: String,
    pub depth: usize,
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "analysis record nesting exceeds {} levels at field `{}`",
            MAX_DEPTH, self.key
        )
    }
}

impl std::error::Error for StructuralError {}

/// Renders one field of a record. Returns `Ok(None)` for values that
/// produce no visible output (null, empty string, empty array); callers
/// skip those rather than rendering an empty placeholder.
pub fn render_value(
    key: &str,
    value: &Value,
    depth: usize,
) -> Result<Option<Block>, StructuralError> {
    if depth > MAX_DEPTH {
        return Err(StructuralError {
            key: key.to_string(),
            depth,
        });
    }

    let block = match value {
        Value::Null => None,
        Value::String(text) => {
            if text.is_empty() {
                None
            } else {
                Some(Block::Paragraph {
                    label: format_key(key),
                    body: text.clone(),
                })
            }
        }
        Value::Array(items) => {
            if items.is_empty() {
                None
            } else {
                Some(Block::List {
                    label: format_key(key),
                    count: items.len(),
                    items: items.iter().map(render_list_item).collect(),
                })
            }
        }
        Value::Object(map) => {
            if map.is_empty() {
                None
            } else {
                let mut children = Vec::new();
                for (child_key, child_value) in map {
                    if let Some(child) = render_value(child_key, child_value, depth + 1)? {
                        children.push(child);
                    }
                }
                Some(Block::Group {
                    label: format_key(key),
                    depth,
                    children,
                })
            }
        }
        Value::Number(n) => Some(Block::Field {
            label: format_key(key),
            value: format_number(n.as_f64().unwrap_or(0.0)),
        }),
        Value::Bool(b) => Some(Block::Field {
            label: format_key(key),
            value: b.to_string(),
        }),
    };

    Ok(block)
}

/// Renders every field of a record in insertion order, starting at `depth`.
pub fn render_record(record: &AnalysisRecord, depth: usize) -> Result<Vec<Block>, StructuralError> {
    let mut blocks = Vec::new();
    for (key, value) in record {
        if let Some(block) = render_value(key, value, depth)? {
            blocks.push(block);
        }
    }
    Ok(blocks)
}

/// List elements get one flattening pass: scalars become text, structural
/// records become a card of their own first-level fields. No recursion
/// below that, so list contexts cannot nest without bound.
fn render_list_item(item: &Value) -> Block {
    match item {
        Value::Object(map) => {
            let title = map
                .get("name")
                .or_else(|| map.get("title"))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let mut children = Vec::new();
            for (key, value) in map {
                match value {
                    Value::Null => {}
                    Value::String(text) if text.is_empty() => {}
                    Value::String(text) => children.push(Block::Field {
                        label: format_key(key),
                        value: text.clone(),
                    }),
                    Value::Number(_) | Value::Bool(_) => children.push(Block::Field {
                        label: format_key(key),
                        value: display_value(value),
                    }),
                    Value::Array(nested) => children.push(Block::Field {
                        label: format_key(key),
                        value: format!("{} items", nested.len()),
                    }),
                    Value::Object(nested) => children.push(Block::Field {
                        label: format_key(key),
                        value: format!("{} fields", nested.len()),
                    }),
                }
            }
            Block::Card {
                title,
                theme: super::output::Theme::Neutral,
                children,
            }
        }
        Value::Array(_) => Block::Text(item.to_string()),
        scalar => Block::Text(display_value(scalar)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> AnalysisRecord {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_null_produces_no_block() {
        assert_eq!(render_value("x", &Value::Null, 0).unwrap(), None);
    }

    #[test]
    fn test_empty_string_produces_no_block() {
        assert_eq!(render_value("x", &json!(""), 0).unwrap(), None);
    }

    #[test]
    fn test_empty_array_produces_no_block() {
        assert_eq!(render_value("x", &json!([]), 0).unwrap(), None);
    }

    #[test]
    fn test_string_becomes_labeled_paragraph() {
        let block = render_value("executive_summary", &json!("Solid year"), 0)
            .unwrap()
            .unwrap();
        assert_eq!(
            block,
            Block::Paragraph {
                label: "Executive Summary".to_string(),
                body: "Solid year".to_string()
            }
        );
    }

    #[test]
    fn test_number_and_bool_become_inline_fields() {
        assert_eq!(
            render_value("employees", &json!(164000), 0).unwrap().unwrap(),
            Block::Field {
                label: "Employees".to_string(),
                value: "164,000".to_string()
            }
        );
        assert_eq!(
            render_value("profitable", &json!(true), 0).unwrap().unwrap(),
            Block::Field {
                label: "Profitable".to_string(),
                value: "true".to_string()
            }
        );
    }

    #[test]
    fn test_null_suppression_in_record() {
        let blocks = render_record(&record(json!({"x": null, "y": "hello"})), 0).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0],
            Block::Paragraph {
                label: "Y".to_string(),
                body: "hello".to_string()
            }
        );
    }

    #[test]
    fn test_record_preserves_insertion_order() {
        let blocks = render_record(
            &record(json!({"a": "first", "b": "second", "c": "third"})),
            0,
        )
        .unwrap();
        let labels: Vec<&str> = blocks
            .iter()
            .map(|b| match b {
                Block::Paragraph { label, .. } => label.as_str(),
                _ => panic!("expected paragraphs"),
            })
            .collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_list_heading_carries_count() {
        let block = render_value("segments", &json!(["Cloud", "Devices"]), 0)
            .unwrap()
            .unwrap();
        match block {
            Block::List { label, count, items } => {
                assert_eq!(label, "Segments");
                assert_eq!(count, 2);
                assert_eq!(items.len(), 2);
                assert_eq!(items[0], Block::Text("Cloud".to_string()));
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_structural_list_element_flattens_one_level() {
        let block = render_value(
            "products",
            &json!([{
                "name": "Anvil",
                "description": "Heavy",
                "variants": ["small", "large"],
                "specs": {"weight": 100}
            }]),
            0,
        )
        .unwrap()
        .unwrap();
        match block {
            Block::List { items, .. } => match &items[0] {
                Block::Card { title, children, .. } => {
                    assert_eq!(title, "Anvil");
                    // Nested structures are summarized, not recursed into.
                    assert!(children.contains(&Block::Field {
                        label: "Variants".to_string(),
                        value: "2 items".to_string()
                    }));
                    assert!(children.contains(&Block::Field {
                        label: "Specs".to_string(),
                        value: "1 fields".to_string()
                    }));
                }
                _ => panic!("expected card"),
            },
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_nested_map_renders_at_deeper_level() {
        let block = render_value(
            "details",
            &json!({"inner": {"leaf": "value"}}),
            0,
        )
        .unwrap()
        .unwrap();
        match block {
            Block::Group { depth, children, .. } => {
                assert_eq!(depth, 0);
                match &children[0] {
                    Block::Group { depth, .. } => assert_eq!(*depth, 1),
                    _ => panic!("expected nested group"),
                }
            }
            _ => panic!("expected group"),
        }
    }

    #[test]
    fn test_depth_guard_raises_structural_error() {
        let mut value = json!("leaf");
        for _ in 0..(MAX_DEPTH + 2) {
            value = json!({ "nested": value });
        }
        let err = render_value("root", &value, 0).unwrap_err();
        assert_eq!(err.key, "nested");
        assert!(err.depth > MAX_DEPTH);
        assert!(err.to_string().contains("nesting exceeds"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let value = json!({"a": 1, "b": ["x", {"name": "y"}], "c": {"d": true}});
        let first = render_value("root", &value, 0).unwrap();
        let second = render_value("root", &value, 0).unwrap();
        assert_eq!(first, second);
    }
}
