//! Typed shapes for the six known analysis schemas.
//!
//! Every field is optional and unknown fields are ignored, so a record that
//! drifts from its declared schema still deserializes wherever it can; a
//! record that cannot deserialize at all falls back to generic rendering.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::risk::RiskFactor;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessRecord {
    pub description: Option<String>,
    pub industry: Option<String>,
    pub market_segments: Vec<String>,
    pub products: Vec<Product>,
    pub competitive_advantages: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub name: String,
    pub description: Option<String>,
    pub significance: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskFactorsRecord {
    pub executive_summary: Option<String>,
    pub risk_factors: Vec<RiskFactor>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagementDiscussionRecord {
    pub executive_overview: Option<String>,
    pub financial_metrics: Vec<FinancialMetric>,
    pub outlook: Option<Outlook>,
}

/// One entry of the financial-metrics grid. The grid widget itself is an
/// external collaborator; these descriptors are handed to it untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialMetric {
    pub name: String,
    pub value: Option<Value>,
    pub change: Option<String>,
    pub trend: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Outlook {
    pub sentiment: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceSheetRecord {
    pub total_assets: Option<Value>,
    pub total_liabilities: Option<Value>,
    pub total_equity: Option<Value>,
    pub summary: Option<String>,
    pub key_ratios: Vec<BalanceRatio>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceRatio {
    pub ratio_name: String,
    pub current_value: Option<Value>,
    pub prior_value: Option<Value>,
    pub commentary: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeStatementRecord {
    pub revenue: Option<Value>,
    pub net_income: Option<Value>,
    pub summary: Option<String>,
    pub profitability: Option<Profitability>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profitability {
    pub gross_margin: Option<String>,
    pub operating_margin: Option<String>,
    pub net_margin: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CashFlowRecord {
    pub summary: Option<String>,
    pub operating_cash_flow: Option<Value>,
    pub investing_cash_flow: Option<Value>,
    pub financing_cash_flow: Option<Value>,
    pub free_cash_flow: Option<Value>,
}
