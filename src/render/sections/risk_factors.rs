use serde_json::json;

use crate::analysis::records::RiskFactorsRecord;
use crate::analysis::risk::{severity_breakdown, RiskFactor};
use crate::chart::{to_series, SeriesEntry, SeriesOptions};
use crate::render::output::{Block, ChartKind, ChartSpec, Theme};

pub fn render(record: &RiskFactorsRecord) -> Vec<Block> {
    let mut blocks = Vec::new();

    if let Some(summary) = &record.executive_summary {
        if !summary.is_empty() {
            blocks.push(Block::Paragraph {
                label: "Executive Summary".to_string(),
                body: summary.clone(),
            });
        }
    }

    if !record.risk_factors.is_empty() {
        blocks.push(Block::List {
            label: "Risk Factors".to_string(),
            count: record.risk_factors.len(),
            items: record.risk_factors.iter().map(render_factor).collect(),
        });
        blocks.push(Block::Chart(severity_chart(&record.risk_factors)));
    }

    blocks
}

fn render_factor(factor: &RiskFactor) -> Block {
    match factor {
        RiskFactor::Legacy(text) => Block::Text(text.clone()),
        RiskFactor::Structured(record) => {
            let mut children = Vec::new();
            children.push(Block::Badge {
                label: "Severity".to_string(),
                text: record.severity.to_string(),
                color: record.severity.color().to_string(),
            });
            if let Some(category) = &record.category {
                children.push(Block::Field {
                    label: "Category".to_string(),
                    value: category.to_string(),
                });
            }
            if !record.description.is_empty() {
                children.push(Block::Paragraph {
                    label: "Description".to_string(),
                    body: record.description.clone(),
                });
            }
            for (label, field) in [
                ("Probability", &record.probability),
                ("Potential Impact", &record.potential_impact),
                ("Timeline", &record.timeline),
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
            if !record.mitigation_measures.is_empty() {
                children.push(Block::List {
                    label: "Mitigation Measures".to_string(),
                    count: record.mitigation_measures.len(),
                    items: record
                        .mitigation_measures
                        .iter()
                        .map(|measure| Block::Text(measure.clone()))
                        .collect(),
                });
            }
            Block::Card {
                title: record
                    .risk_name
                    .clone()
                    .unwrap_or_else(|| "Risk Factor".to_string()),
                theme: Theme::Risk,
                children,
            }
        }
    }
}

/// Pie chart of factor counts per severity tier, most severe first, with
/// the fixed tier colors.
fn severity_chart(factors: &[RiskFactor]) -> ChartSpec {
    let entries: Vec<SeriesEntry> = severity_breakdown(factors)
        .into_iter()
        .map(|(severity, count)| {
            SeriesEntry::new(severity.to_string(), json!(count)).with_color(severity.color())
        })
        .collect();
    ChartSpec {
        kind: ChartKind::Pie,
        title: "Risk Severity".to_string(),
        points: to_series(&entries, SeriesOptions::default()),
    }
}
