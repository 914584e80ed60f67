use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::schema::SchemaType;
use super::AnalysisRecord;

/// The full analysis payload for one filing, as delivered by the external
/// analysis pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisPayload {
    pub company: Option<String>,
    pub generated_at: Option<DateTime<Utc>>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    #[serde(default)]
    pub overall_sentiment: f64,
    #[serde(default)]
    pub critical_findings: Vec<String>,
    #[serde(default)]
    pub sub_sections: Vec<SubSection>,
}

impl Section {
    /// Sentiment clamped to the 0.0-1.0 gauge range.
    pub fn sentiment(&self) -> f64 {
        if self.overall_sentiment.is_finite() {
            self.overall_sentiment.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Unpacks the sub-sections with their parent's name stamped in.
    pub fn resolved_sub_sections(&self) -> Vec<SubSection> {
        self.sub_sections
            .iter()
            .map(|sub| SubSection {
                parent_section_name: self.name.clone(),
                ..sub.clone()
            })
            .collect()
    }
}

/// One schema-tagged unit of analysis nested under a filing section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubSection {
    pub schema_type: SchemaType,
    pub name: String,
    #[serde(default)]
    pub record: AnalysisRecord,
    #[serde(default)]
    pub parent_section_name: String,
}

pub fn parse_payload(content: &str) -> Result<AnalysisPayload> {
    serde_json::from_str(content).map_err(|e| anyhow!("Failed to parse analysis payload: {}", e))
}

pub fn load_payload(path: &Path) -> Result<AnalysisPayload> {
    info!("Loading analysis payload from {}", path.display());
    let content = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?;
    let payload = parse_payload(&content)?;
    info!(
        "Loaded analysis for {} with {} sections",
        payload.company.as_deref().unwrap_or("unknown company"),
        payload.sections.len()
    );
    Ok(payload)
}
