use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

use crate::chart;

/// A single risk factor. The analysis pipeline emits either a bare string
/// (legacy shape) or a structured record; the variant is fixed at
/// ingestion, not re-checked on every render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RiskFactor {
    Structured(RiskFactorRecord),
    Legacy(String),
}

impl RiskFactor {
    pub fn severity(&self) -> Severity {
        match self {
            RiskFactor::Structured(record) => record.severity,
            RiskFactor::Legacy(_) => Severity::default(),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            RiskFactor::Structured(record) => &record.description,
            RiskFactor::Legacy(text) => text,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskFactorRecord {
    pub description: String,
    pub risk_name: Option<String>,
    pub severity: Severity,
    pub category: Option<RiskCategory>,
    pub probability: Option<String>,
    pub potential_impact: Option<String>,
    pub timeline: Option<String>,
    pub mitigation_measures: Vec<String>,
}

/// Severity tiers, ordered least to most severe. Missing and unrecognized
/// severities both fold to `Medium`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    EnumIter,
)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl From<String> for Severity {
    fn from(s: String) -> Severity {
        match s.to_lowercase().as_str() {
            "low" => Severity::Low,
            "high" => Severity::High,
            "critical" => Severity::Critical,
            _ => Severity::Medium,
        }
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> String {
        severity.to_string()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "Low"),
            Severity::Medium => write!(f, "Medium"),
            Severity::High => write!(f, "High"),
            Severity::Critical => write!(f, "Critical"),
        }
    }
}

impl Severity {
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Critical => chart::RED,
            Severity::High => chart::ORANGE,
            Severity::Medium => chart::YELLOW,
            Severity::Low => chart::GRAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskCategory {
    Operational,
    Financial,
    Market,
    Regulatory,
    Legal,
    Technology,
    Environmental,
    Strategic,
    Other(String),
}

impl From<String> for RiskCategory {
    fn from(s: String) -> RiskCategory {
        match s.to_lowercase().as_str() {
            "operational" => RiskCategory::Operational,
            "financial" => RiskCategory::Financial,
            "market" => RiskCategory::Market,
            "regulatory" => RiskCategory::Regulatory,
            "legal" => RiskCategory::Legal,
            "technology" => RiskCategory::Technology,
            "environmental" => RiskCategory::Environmental,
            "strategic" => RiskCategory::Strategic,
            _ => RiskCategory::Other(s),
        }
    }
}

impl From<RiskCategory> for String {
    fn from(category: RiskCategory) -> String {
        category.to_string()
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskCategory::Operational => write!(f, "Operational"),
            RiskCategory::Financial => write!(f, "Financial"),
            RiskCategory::Market => write!(f, "Market"),
            RiskCategory::Regulatory => write!(f, "Regulatory"),
            RiskCategory::Legal => write!(f, "Legal"),
            RiskCategory::Technology => write!(f, "Technology"),
            RiskCategory::Environmental => write!(f, "Environmental"),
            RiskCategory::Strategic => write!(f, "Strategic"),
            RiskCategory::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Counts risk factors per severity tier, most severe first. Tiers with no
/// factors are omitted.
pub fn severity_breakdown(factors: &[RiskFactor]) -> Vec<(Severity, usize)> {
    let counts = factors.iter().map(|f| f.severity()).counts();
    Severity::iter()
        .rev()
        .filter_map(|severity| counts.get(&severity).map(|&count| (severity, count)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_legacy_and_structured_shapes() {
        let factors: Vec<RiskFactor> = serde_json::from_value(json!([
            "Supply chain concentration in a single region",
            {
                "description": "Key customer accounts for 40% of revenue",
                "risk_name": "Customer concentration",
                "severity": "High",
                "category": "Market"
            }
        ]))
        .unwrap();

        assert!(matches!(factors[0], RiskFactor::Legacy(_)));
        assert_eq!(factors[0].severity(), Severity::Medium);
        match &factors[1] {
            RiskFactor::Structured(record) => {
                assert_eq!(record.severity, Severity::High);
                assert_eq!(record.category, Some(RiskCategory::Market));
            }
            RiskFactor::Legacy(_) => panic!("expected structured record"),
        }
    }

    #[test]
    fn test_unrecognized_severity_folds_to_medium() {
        let severity: Severity = serde_json::from_value(json!("severe")).unwrap();
        assert_eq!(severity, Severity::Medium);
        let severity: Severity = serde_json::from_value(json!("critical")).unwrap();
        assert_eq!(severity, Severity::Critical);
    }

    #[test]
    fn test_missing_severity_defaults_to_medium() {
        let record: RiskFactorRecord =
            serde_json::from_value(json!({"description": "x"})).unwrap();
        assert_eq!(record.severity, Severity::Medium);
    }

    #[test]
    fn test_severity_breakdown_orders_and_counts() {
        let factors: Vec<RiskFactor> = serde_json::from_value(json!([
            {"description": "a", "severity": "Critical"},
            {"description": "b", "severity": "High"},
            {"description": "c", "severity": "High"},
            {"description": "d", "severity": "Medium"},
            {"description": "e"}
        ]))
        .unwrap();
        let breakdown = severity_breakdown(&factors);
        assert_eq!(
            breakdown,
            vec![
                (Severity::Critical, 1),
                (Severity::High, 2),
                (Severity::Medium, 2)
            ]
        );
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }
}
