use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum::{EnumIter, IntoEnumIterator};

/// Identifies which specialized shape an analysis record follows. Every
/// tag outside the known set lands in `Unknown`, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(try_from = "String", into = "String")]
pub enum SchemaType {
    Business,
    RiskFactors,
    ManagementDiscussion,
    BalanceSheet,
    IncomeStatement,
    CashFlow,
    Unknown(String),
}

impl TryFrom<String> for SchemaType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        SchemaType::from_str(&s)
    }
}

impl From<SchemaType> for String {
    fn from(schema: SchemaType) -> String {
        schema.to_string()
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaType::Business => write!(f, "BusinessAnalysisSection"),
            SchemaType::RiskFactors => write!(f, "RiskFactorsAnalysisSection"),
            SchemaType::ManagementDiscussion => write!(f, "MDAAnalysisSection"),
            SchemaType::BalanceSheet => write!(f, "BalanceSheetAnalysisSection"),
            SchemaType::IncomeStatement => write!(f, "IncomeStatementAnalysisSection"),
            SchemaType::CashFlow => write!(f, "CashFlowAnalysisSection"),
            SchemaType::Unknown(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for SchemaType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<SchemaType, String> {
        match s {
            "BusinessAnalysisSection" => Ok(SchemaType::Business),
            "RiskFactorsAnalysisSection" => Ok(SchemaType::RiskFactors),
            "MDAAnalysisSection" => Ok(SchemaType::ManagementDiscussion),
            "BalanceSheetAnalysisSection" => Ok(SchemaType::BalanceSheet),
            "IncomeStatementAnalysisSection" => Ok(SchemaType::IncomeStatement),
            "CashFlowAnalysisSection" => Ok(SchemaType::CashFlow),
            _ => Ok(SchemaType::Unknown(s.to_string())),
        }
    }
}

pub static KNOWN_SCHEMAS: Lazy<String> = Lazy::new(|| {
    SchemaType::iter()
        .filter(|t| !matches!(t, SchemaType::Unknown(_)))
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ")
});

impl SchemaType {
    pub fn list_known() -> &'static str {
        &KNOWN_SCHEMAS
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SchemaType::Unknown(_))
    }
}
