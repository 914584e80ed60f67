use serde_json::Value;

use crate::analysis::records::BalanceSheetRecord;
use crate::chart::{to_series, SeriesEntry, SeriesOptions};
use crate::format::display_value;
use crate::render::output::{Block, ChartKind, ChartSpec, KpiCard, Theme};

const MAX_RATIO_CARDS: usize = 4;
const MAX_CHART_RATIOS: usize = 6;

pub fn render(record: &BalanceSheetRecord) -> Vec<Block> {
    let mut blocks = Vec::new();

    for (label, field) in [
        ("Total Assets", &record.total_assets),
        ("Total Liabilities", &record.total_liabilities),
        ("Total Equity", &record.total_equity),
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

    for ratio in record.key_ratios.iter().take(MAX_RATIO_CARDS) {
        let mut children = Vec::new();
        if let Some(current) = &ratio.current_value {
            children.push(Block::Field {
                label: "Current".to_string(),
                value: display_value(current),
            });
        }
        if let Some(prior) = &ratio.prior_value {
            children.push(Block::Field {
                label: "Prior".to_string(),
                value: display_value(prior),
            });
        }
        if let Some(commentary) = &ratio.commentary {
            if !commentary.is_empty() {
                children.push(Block::Paragraph {
                    label: "Commentary".to_string(),
                    body: commentary.clone(),
                });
            }
        }
        blocks.push(Block::Card {
            title: ratio.ratio_name.clone(),
            theme: Theme::BalanceSheet,
            children,
        });
    }

    if !record.key_ratios.is_empty() {
        let entries: Vec<SeriesEntry> = record
            .key_ratios
            .iter()
            .take(MAX_CHART_RATIOS)
            .map(|ratio| {
                SeriesEntry::new(
                    &ratio.ratio_name,
                    ratio.current_value.clone().unwrap_or(Value::Null),
                )
            })
            .collect();
        blocks.push(Block::Chart(ChartSpec {
            kind: ChartKind::Bar,
            title: "Key Ratios".to_string(),
            points: to_series(&entries, SeriesOptions::default()),
        }));
    }

    blocks
}
