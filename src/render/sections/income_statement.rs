use serde_json::Value;

use crate::analysis::records::IncomeStatementRecord;
use crate::chart::{to_series, SeriesEntry, SeriesOptions};
use crate::format::display_value;
use crate::render::output::{Block, ChartKind, ChartSpec, KpiCard, Theme};

const REVENUE_FALLBACK: f64 = 100.0;
const NET_INCOME_FALLBACK: f64 = 20.0;

pub fn render(record: &IncomeStatementRecord) -> Vec<Block> {
    let mut blocks = Vec::new();

    for (label, field) in [
        ("Revenue", &record.revenue),
        ("Net Income", &record.net_income),
    ] {
        if let Some(value) = field {
            blocks.push(Block::Kpi(KpiCard {
                label: label.to_string(),
                value: display_value(value),
            }));
        }
    }

    if let Some(summary) = &record.summary {
        if !summary.is_empty() {
            blocks.push(Block::Paragraph {
                label: "Summary".to_string(),
                body: summary.clone(),
            });
        }
    }

    if let Some(profitability) = &record.profitability {
        let mut children = Vec::new();
        for (label, field) in [
            ("Gross Margin", &profitability.gross_margin),
            ("Operating Margin", &profitability.operating_margin),
            ("Net Margin", &profitability.net_margin),
        ] {
            if let Some(value) = field {
                if !value.is_empty() {
                    children.push(Block::Field {
                        label: label.to_string(),
                        value: value.clone(),
                    });
                }
            }
        }
        if !children.is_empty() {
            blocks.push(Block::Card {
                title: "Profitability".to_string(),
                theme: Theme::IncomeStatement,
                children,
            });
        }
    }

    blocks.push(Block::Chart(revenue_chart(record)));

    blocks
}

fn revenue_chart(record: &IncomeStatementRecord) -> ChartSpec {
    let entries = vec![
        SeriesEntry::new(
            "Revenue",
            record.revenue.clone().unwrap_or(Value::Null),
        )
        .with_fallback(REVENUE_FALLBACK),
        SeriesEntry::new(
            "Net Income",
            record.net_income.clone().unwrap_or(Value::Null),
        )
        .with_fallback(NET_INCOME_FALLBACK),
    ];
    ChartSpec {
        kind: ChartKind::Bar,
        title: "Revenue vs Net Income".to_string(),
        points: to_series(
            &entries,
            SeriesOptions {
                drop_non_positive: true,
                ..Default::default()
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_from(value: serde_json::Value) -> IncomeStatementRecord {
        serde_json::from_value(value).unwrap()
    }

    fn chart_of(blocks: &[Block]) -> &ChartSpec {
        blocks
            .iter()
            .find_map(|b| match b {
                Block::Chart(spec) => Some(spec),
                _ => None,
            })
            .expect("expected a chart block")
    }

    #[test]
    fn test_chart_coerces_currency_strings() {
        let record = record_from(json!({
            "revenue": "$394.3B",
            "net_income": "$97.0B"
        }));
        let binding = render(&record);
        let spec = chart_of(&binding);
        assert_eq!(spec.points.len(), 2);
        assert_eq!(spec.points[0].value, 394.3);
        assert_eq!(spec.points[1].value, 97.0);
    }

    #[test]
    fn test_missing_fields_use_fallbacks() {
        let spec_blocks = render(&IncomeStatementRecord::default());
        let spec = chart_of(&spec_blocks);
        assert_eq!(spec.points[0].value, REVENUE_FALLBACK);
        assert_eq!(spec.points[1].value, NET_INCOME_FALLBACK);
        // No KPI cards without source fields.
        assert!(!spec_blocks.iter().any(|b| matches!(b, Block::Kpi(_))));
    }

    #[test]
    fn test_non_positive_values_excluded_from_chart() {
        let record = record_from(json!({
            "revenue": "$10B",
            "net_income": "-$2B"
        }));
        let binding = render(&record);
        let spec = chart_of(&binding);
        assert_eq!(spec.points.len(), 1);
        assert_eq!(spec.points[0].name, "Revenue");
    }

    #[test]
    fn test_profitability_narrative() {
        let record = record_from(json!({
            "profitability": {
                "gross_margin": "44%",
                "operating_margin": "30%",
                "net_margin": "25%"
            }
        }));
        let blocks = render(&record);
        match blocks
            .iter()
            .find(|b| matches!(b, Block::Card { .. }))
            .unwrap()
        {
            Block::Card { title, children, .. } => {
                assert_eq!(title, "Profitability");
                assert_eq!(children.len(), 3);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_partial_profitability_suppresses_missing_fields() {
        let record = record_from(json!({
            "profitability": {"net_margin": "25%"}
        }));
        let blocks = render(&record);
        match blocks
            .iter()
            .find(|b| matches!(b, Block::Card { .. }))
            .unwrap()
        {
            Block::Card { children, .. } => {
                assert_eq!(children.len(), 1);
                assert_eq!(
                    children[0],
                    Block::Field {
                        label: "Net Margin".to_string(),
                        value: "25%".to_string()
                    }
                );
            }
            _ => unreachable!(),
        }
    }
}
