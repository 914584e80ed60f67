use serde_json::json;

use crate::analysis::records::BusinessRecord;
use crate::chart::{to_series, SeriesEntry, SeriesOptions};
use crate::render::output::{
    Block, ChartKind, ChartSpec, InsightHighlight, InsightKind, Priority, Theme, Tone,
};

const MAX_CHART_ADVANTAGES: usize = 5;

pub fn render(record: &BusinessRecord) -> Vec<Block> {
    let mut blocks = Vec::new();

    let mut overview = Vec::new();
    if let Some(description) = &record.description {
        if !description.is_empty() {
            overview.push(Block::Paragraph {
                label: "Description".to_string(),
                body: description.clone(),
            });
        }
    }
    if let Some(industry) = &record.industry {
        if !industry.is_empty() {
            overview.push(Block::Field {
                label: "Industry".to_string(),
                value: industry.clone(),
            });
        }
    }
    if !record.market_segments.is_empty() {
        overview.push(Block::List {
            label: "Market Segments".to_string(),
            count: record.market_segments.len(),
            items: record
                .market_segments
                .iter()
                .map(|segment| Block::Text(segment.clone()))
                .collect(),
        });
    }
    if !overview.is_empty() {
        blocks.push(Block::Card {
            title: "Operational Overview".to_string(),
            theme: Theme::Business,
            children: overview,
        });
    }

    if !record.products.is_empty() {
        let items = record
            .products
            .iter()
            .map(|product| {
                let mut children = Vec::new();
                if let Some(description) = &product.description {
                    if !description.is_empty() {
                        children.push(Block::Paragraph {
                            label: "Description".to_string(),
                            body: description.clone(),
                        });
                    }
                }
                if let Some(significance) = &product.significance {
                    if !significance.is_empty() {
                        children.push(Block::Badge {
                            label: "Significance".to_string(),
                            text: significance.clone(),
                            color: crate::chart::GREEN.to_string(),
                        });
                    }
                }
                Block::Card {
                    title: product.name.clone(),
                    theme: Theme::Business,
                    children,
                }
            })
            .collect();
        blocks.push(Block::List {
            label: "Products".to_string(),
            count: record.products.len(),
            items,
        });
    }

    for advantage in &record.competitive_advantages {
        blocks.push(Block::Insight(InsightHighlight {
            title: advantage.clone(),
            kind: InsightKind::Opportunity,
            priority: Priority::High,
            sentiment: Tone::Positive,
        }));
    }

    if !record.competitive_advantages.is_empty() {
        blocks.push(Block::Chart(advantage_chart(&record.competitive_advantages)));
    }

    blocks
}

/// Bar chart over the top advantages. Strength is rank-derived; the
/// analysis pipeline does not emit a numeric score for advantages.
fn advantage_chart(advantages: &[String]) -> ChartSpec {
    let entries: Vec<SeriesEntry> = advantages
        .iter()
        .take(MAX_CHART_ADVANTAGES)
        .enumerate()
        .map(|(i, advantage)| SeriesEntry::new(advantage, json!(100.0 - 10.0 * i as f64)))
        .collect();
    ChartSpec {
        kind: ChartKind::Bar,
        title: "Competitive Strength".to_string(),
        points: to_series(&entries, SeriesOptions::default()),
    }
}
