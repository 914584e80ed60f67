//! Drives rendering across the filing's top-level sections and owns the
//! expand/collapse bookkeeping. The rendering itself stays pure; the
//! expanded set is passed in by whoever owns the UI event loop.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::analysis::payload::Section;
use crate::render::dispatch::dispatch;
use crate::render::generic::StructuralError;
use crate::render::output::{Block, Theme};

const DISPLAY_NAME_LIMIT: usize = 30;
const DISPLAY_NAME_PREFIX: usize = 27;

// Standard 10-K item headings, matched by prefix.
static SECTION_SHORT_NAMES: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("Item 1 - Business", "Business"),
        ("Item 1A - Risk Factors", "Risk Factors"),
        ("Item 1B - Unresolved Staff Comments", "Staff Comments"),
        ("Item 2 - Properties", "Properties"),
        ("Item 3 - Legal Proceedings", "Legal Proceedings"),
        ("Item 7 - Management's Discussion and Analysis", "MD&A"),
        (
            "Item 7A - Quantitative and Qualitative Disclosures About Market Risk",
            "Market Risk",
        ),
        ("Item 8 - Financial Statements", "Financial Statements"),
    ]
});

static ITEM_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Item\s+\d+[A-Za-z]?\s*-\s*(.+)$").expect("item prefix pattern")
});

/// Short display name for a section heading: known 10-K items map through
/// the fixed table, other `Item N - Title` headings keep their title, and
/// anything else is truncated past 30 characters.
pub fn section_display_name(name: &str) -> String {
    for (prefix, short) in SECTION_SHORT_NAMES.iter() {
        if name.starts_with(prefix) {
            return (*short).to_string();
        }
    }
    if let Some(captures) = ITEM_PREFIX.captures(name) {
        if let Some(title) = captures.get(1) {
            return title.as_str().trim().to_string();
        }
    }
    if name.chars().count() > DISPLAY_NAME_LIMIT {
        let prefix: String = name.chars().take(DISPLAY_NAME_PREFIX).collect();
        format!("{}...", prefix)
    } else {
        name.to_string()
    }
}

/// The set of currently expanded section names, keyed by exact name.
/// Starts empty: every section collapsed.
#[derive(Debug, Clone, Default)]
pub struct ExpandedSections {
    expanded: HashSet<String>,
}

impl ExpandedSections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, name: &str) {
        if !self.expanded.remove(name) {
            self.expanded.insert(name.to_string());
        }
    }

    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded.contains(name)
    }

    pub fn expand_all<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        for name in names {
            self.expanded.insert(name.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.expanded.clear();
    }
}

/// Renders the whole dashboard: one card per section in payload order,
/// with sub-sections dispatched only for expanded sections. An empty
/// section list renders a defined placeholder instead of nothing.
pub fn render_dashboard(
    sections: &[Section],
    expanded: &ExpandedSections,
) -> Result<Vec<Block>, StructuralError> {
    if sections.is_empty() {
        return Ok(vec![Block::Placeholder {
            message: "No analysis available for this filing yet.".to_string(),
        }]);
    }

    let mut blocks = Vec::new();
    for section in sections {
        let mut children = Vec::new();
        children.push(Block::SentimentGauge {
            value: section.sentiment(),
        });
        if !section.critical_findings.is_empty() {
            children.push(Block::List {
                label: "Critical Findings".to_string(),
                count: section.critical_findings.len(),
                items: section
                    .critical_findings
                    .iter()
                    .map(|finding| Block::Text(finding.clone()))
                    .collect(),
            });
        }
        if expanded.is_expanded(&section.name) {
            for sub in section.resolved_sub_sections() {
                let rendered = dispatch(&sub.schema_type, &sub.record, &sub.name)?;
                children.push(Block::Card {
                    title: rendered.title,
                    theme: rendered.theme,
                    children: rendered.blocks,
                });
            }
        }
        blocks.push(Block::Card {
            title: section_display_name(&section.name),
            theme: Theme::Neutral,
            children,
        });
    }
    Ok(blocks)
}
