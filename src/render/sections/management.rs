use crate::analysis::records::ManagementDiscussionRecord;
use crate::chart::{GRAY, GREEN, ORANGE, RED};
use crate::render::output::{Block, Theme};

pub fn render(record: &ManagementDiscussionRecord) -> Vec<Block> {
    let mut blocks = Vec::new();

    if let Some(overview) = &record.executive_overview {
        if !overview.is_empty() {
            blocks.push(Block::Paragraph {
                label: "Executive Overview".to_string(),
                body: overview.clone(),
            });
        }
    }

    if !record.financial_metrics.is_empty() {
        blocks.push(Block::MetricsGrid(record.financial_metrics.clone()));
    }

    if let Some(outlook) = &record.outlook {
        let mut children = Vec::new();
        let sentiment = outlook.sentiment.as_deref().unwrap_or("Unknown");
        children.push(Block::Badge {
            label: "Outlook".to_string(),
            text: sentiment.to_string(),
            color: outlook_color(sentiment).to_string(),
        });
        if let Some(summary) = &outlook.summary {
            if !summary.is_empty() {
                children.push(Block::Paragraph {
                    label: "Summary".to_string(),
                    body: summary.clone(),
                });
            }
        }
        blocks.push(Block::Card {
            title: "Outlook".to_string(),
            theme: Theme::Management,
            children,
        });
    }

    blocks
}

/// Badge color for the outlook sentiment string: positive/optimistic are
/// green, negative red, cautious orange, everything else gray.
pub(crate) fn outlook_color(sentiment: &str) -> &'static str {
    let lowered = sentiment.to_lowercase();
    if lowered.contains("positive") || lowered.contains("optimistic") {
        GREEN
    } else if lowered.contains("negative") {
        RED
    } else if lowered.contains("cautious") {
        ORANGE
    } else {
        GRAY
    }
}
