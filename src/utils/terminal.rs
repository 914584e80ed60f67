//! Plain-terminal presentation of the rendered block tree. This is the
//! CLI's stand-in for the web presentation layer; it consumes the same
//! descriptors the charting/UI collaborators would.

use colored::Colorize;

use crate::format::format_number;
use crate::render::output::{Block, ChartKind, ChartSpec, Tone};

pub fn print_blocks(blocks: &[Block]) {
    for block in blocks {
        print_block(block, 0);
    }
}

fn print_block(block: &Block, indent: usize) {
    let pad = "  ".repeat(indent);
    match block {
        Block::Paragraph { label, body } => {
            println!("{}{}", pad, label.bold());
            println!("{}{}", pad, body);
        }
        Block::Field { label, value } => {
            println!("{}{}: {}", pad, label.dimmed(), value);
        }
        Block::Text(text) => {
            println!("{}- {}", pad, text);
        }
        Block::List { label, count, items } => {
            println!("{}{} ({})", pad, label.bold(), count);
            for item in items {
                print_block(item, indent + 1);
            }
        }
        Block::Group { label, children, .. } => {
            println!("{}{}", pad, label.bold());
            for child in children {
                print_block(child, indent + 1);
            }
        }
        Block::Card { title, children, .. } => {
            if title.is_empty() {
                println!("{}{}", pad, "---".dimmed());
            } else {
                println!("{}{}", pad, title.bold().underline());
            }
            for child in children {
                print_block(child, indent + 1);
            }
        }
        Block::Kpi(card) => {
            println!("{}{} {}", pad, card.value.bold(), card.label.dimmed());
        }
        Block::Insight(insight) => {
            let marker = match insight.sentiment {
                Tone::Positive => "+".green(),
                Tone::Negative => "-".red(),
                Tone::Neutral => "*".normal(),
            };
            println!("{}{} {}", pad, marker, insight.title);
        }
        Block::Badge { label, text, .. } => {
            println!("{}[{}: {}]", pad, label.dimmed(), text.bold());
        }
        Block::Chart(spec) => {
            print_chart(spec, indent);
        }
        Block::MetricsGrid(metrics) => {
            println!("{}{}", pad, "Financial Metrics".bold());
            for metric in metrics {
                let value = metric
                    .value
                    .as_ref()
                    .map(crate::format::display_value)
                    .unwrap_or_default();
                let change = metric.change.as_deref().unwrap_or("");
                println!("{}  {}: {} {}", pad, metric.name.dimmed(), value, change);
            }
        }
        Block::SentimentGauge { value } => {
            let pct = (value * 100.0).round() as i64;
            println!("{}{}: {}%", pad, "Sentiment".dimmed(), pct);
        }
        Block::Placeholder { message } => {
            println!("{}{}", pad, message.italic());
        }
    }
}

fn print_chart(spec: &ChartSpec, indent: usize) {
    let pad = "  ".repeat(indent);
    let kind = match spec.kind {
        ChartKind::Bar => "bar",
        ChartKind::Pie => "pie",
    };
    println!("{}{} [{}]", pad, spec.title.bold(), kind);
    let max = spec
        .points
        .iter()
        .map(|p| p.value)
        .fold(0.0_f64, f64::max);
    for point in &spec.points {
        let width = if max > 0.0 {
            ((point.value / max) * 20.0).round() as usize
        } else {
            0
        };
        println!(
            "{}  {:<16} {} {}",
            pad,
            point.name,
            "#".repeat(width.max(1)),
            format_number(point.value)
        );
    }
}
