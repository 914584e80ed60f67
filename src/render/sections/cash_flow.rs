use serde_json::Value;

use crate::analysis::records::CashFlowRecord;
use crate::chart::{to_series, SeriesEntry, SeriesOptions, GREEN};
use crate::format::display_value;
use crate::render::output::{Block, ChartKind, ChartSpec, KpiCard};

const OPERATING_FALLBACK: f64 = 50.0;
const INVESTING_FALLBACK: f64 = 20.0;
const FINANCING_FALLBACK: f64 = 15.0;

pub fn render(record: &CashFlowRecord) -> Vec<Block> {
    let mut blocks = Vec::new();

    if let Some(summary) = &record.summary {
        if !summary.is_empty() {
            blocks.push(Block::Paragraph {
                label: "Summary".to_string(),
                body: summary.clone(),
            });
        }
    }

    for (label, field) in [
        ("Operating Cash Flow", &record.operating_cash_flow),
        ("Investing Cash Flow", &record.investing_cash_flow),
        ("Financing Cash Flow", &record.financing_cash_flow),
    ] {
        if let Some(value) = field {
            blocks.push(Block::Kpi(KpiCard {
                label: label.to_string(),
                value: display_value(value),
            }));
        }
    }

    if let Some(fcf) = &record.free_cash_flow {
        blocks.push(Block::Badge {
            label: "Free Cash Flow".to_string(),
            text: display_value(fcf),
            color: GREEN.to_string(),
        });
    }

    blocks.push(Block::Chart(breakdown_chart(record)));

    blocks
}

/// Pie chart over the three cash-flow legs. Signs are folded away so the
/// slices chart magnitudes; non-positive results are dropped.
fn breakdown_chart(record: &CashFlowRecord) -> ChartSpec {
    let entries = vec![
        SeriesEntry::new(
            "Operating",
            record.operating_cash_flow.clone().unwrap_or(Value::Null),
        )
        .with_fallback(OPERATING_FALLBACK),
        SeriesEntry::new(
            "Investing",
            record.investing_cash_flow.clone().unwrap_or(Value::Null),
        )
        .with_fallback(INVESTING_FALLBACK),
        SeriesEntry::new(
            "Financing",
            record.financing_cash_flow.clone().unwrap_or(Value::Null),
        )
        .with_fallback(FINANCING_FALLBACK),
    ];
    ChartSpec {
        kind: ChartKind::Pie,
        title: "Cash Flow Breakdown".to_string(),
        points: to_series(
            &entries,
            SeriesOptions {
                absolute: true,
                drop_non_positive: true,
                ..Default::default()
            },
        ),
    }
}
