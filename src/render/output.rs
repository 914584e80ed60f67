//! The abstract rendered-output tree handed to the presentation layer.
//!
//! Nothing in here draws pixels; blocks, KPI cards and chart specs are
//! descriptors consumed by an external UI/charting collaborator.

use serde::Serialize;

use crate::analysis::records::FinancialMetric;
use crate::analysis::schema::SchemaType;
use crate::chart::ChartPoint;

/// The rendered form of one sub-section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSection {
    pub title: String,
    pub theme: Theme,
    pub blocks: Vec<Block>,
}

/// Style hint derived from the schema type. Unrecognized schemas get the
/// neutral theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Theme {
    Business,
    Risk,
    Management,
    BalanceSheet,
    IncomeStatement,
    CashFlow,
    Neutral,
}

impl From<&SchemaType> for Theme {
    fn from(schema: &SchemaType) -> Theme {
        match schema {
            SchemaType::Business => Theme::Business,
            SchemaType::RiskFactors => Theme::Risk,
            SchemaType::ManagementDiscussion => Theme::Management,
            SchemaType::BalanceSheet => Theme::BalanceSheet,
            SchemaType::IncomeStatement => Theme::IncomeStatement,
            SchemaType::CashFlow => Theme::CashFlow,
            SchemaType::Unknown(_) => Theme::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartKind {
    Bar,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InsightKind {
    Opportunity,
    Threat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightHighlight {
    pub title: String,
    pub kind: InsightKind,
    pub priority: Priority,
    pub sentiment: Tone,
}

/// One node of the display tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Block {
    /// A labeled body of text.
    Paragraph { label: String, body: String },
    /// An inline label/value pair.
    Field { label: String, value: String },
    /// A bare run of text, used for list items.
    Text(String),
    /// A labeled list; the heading shows the element count.
    List {
        label: String,
        count: usize,
        items: Vec<Block>,
    },
    /// A nested group of blocks, indented one level per depth step.
    Group {
        label: String,
        depth: usize,
        children: Vec<Block>,
    },
    /// A titled, themed container.
    Card {
        title: String,
        theme: Theme,
        children: Vec<Block>,
    },
    Kpi(KpiCard),
    Insight(InsightHighlight),
    Badge {
        label: String,
        text: String,
        color: String,
    },
    Chart(ChartSpec),
    /// Descriptors for the external financial-metrics grid widget.
    MetricsGrid(Vec<FinancialMetric>),
    /// Descriptor for the external sentiment gauge widget, 0.0-1.0.
    SentimentGauge { value: f64 },
    /// Defined empty state, e.g. when no analysis exists yet.
    Placeholder { message: String },
}
